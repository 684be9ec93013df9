use crate::{Error, Result};
use std::{fmt::Display, io::Write};

/// Written after every value, before the line terminator.
pub const DELIMITER: char = '?';

/// Writes one `<value>?` line per element.
pub struct Printer<W> {
    writer: W,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Printer { writer }
    }

    /// Print `numbers` in order and flush the writer.
    pub fn print<T: Display>(&mut self, numbers: &[T]) -> Result<()> {
        for (index, number) in numbers.iter().enumerate() {
            writeln!(self.writer, "{number}{DELIMITER}")
                .map_err(|source| Error::Write { index, source })?;
        }
        // a failed flush is attributed to the last line
        self.writer.flush().map_err(|source| Error::Write {
            index: numbers.len().saturating_sub(1),
            source,
        })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_print_lines() -> anyhow::Result<()> {
        let mut printer = Printer::new(Vec::new());
        printer.print(&[1, -2, 30])?;
        assert_eq!(printer.into_inner(), b"1?\n-2?\n30?\n");
        Ok(())
    }

    #[test]
    fn test_print_empty() -> anyhow::Result<()> {
        let mut printer = Printer::new(Vec::new());
        printer.print::<i32>(&[])?;
        assert!(printer.into_inner().is_empty());
        Ok(())
    }

    /// Accepts `budget` bytes, then fails.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_write_failure() {
        // room for the first two lines only
        let mut printer = Printer::new(FailingWriter { budget: 6 });
        let Error::Write { index, source } = printer.print(&[1, 2, 3]).unwrap_err();
        assert_eq!(index, 2);
        assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
    }
}
