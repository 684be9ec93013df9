//! Sort a fixed list of numbers and print every value, followed by `?`, to the
//! error stream.
//!
//! See [`run`] for the whole procedure, and [`numbers`], [`sorter`] and
//! [`printer`] for its three steps.

use std::io;

mod error;
pub use error::{Error, Result};

pub mod numbers;
pub use numbers::{NUMBERS, get_numbers};

pub mod sorter;
pub use sorter::{is_sorted, sort, sorted};

pub mod printer;
pub use printer::{DELIMITER, Printer};


/// Produce, sort and print the numbers to the error stream.
pub fn run() -> Result<()> {
    run_with(io::stderr().lock())
}

/// Produce, sort and print the numbers to `writer`.
#[tracing::instrument(skip_all)]
pub fn run_with<W: io::Write>(writer: W) -> Result<()> {
    let numbers = sorted(get_numbers());
    tracing::debug!(?numbers, "sorted");
    Printer::new(writer).print(&numbers)
}
