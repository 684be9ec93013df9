use console::style;
use std::{
    backtrace::BacktraceStatus,
    io::{self, Write},
};

/// Set up the logger. Only warnings and errors are shown unless `RUST_LOG` says otherwise,
/// so that by default stderr carries nothing but the program output.
pub fn setup_logger() {
    use tracing_subscriber::{
        EnvFilter, Registry, filter::LevelFilter, fmt, layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let default_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .compact()
        .with_thread_ids(false)
        .with_thread_names(false)
        .without_time()
        .with_writer(std::io::stderr);

    Registry::default()
        .with(fmt_layer)
        .with(default_filter)
        .try_init()
        .ok();
}

/// Report `e` on stderr. Stderr itself may be the thing that failed, so write errors are
/// dropped rather than allowed to panic before the caller exits.
pub fn print_error(e: anyhow::Error) {
    let _ = write_error(&mut io::stderr().lock(), &e);
}

/// Write every cause of `e`, root cause first, then the backtrace if one was captured.
pub fn write_error<W: Write>(out: &mut W, e: &anyhow::Error) -> io::Result<()> {
    for cause in e.chain().rev() {
        writeln!(
            out,
            "{}{} {cause}",
            style("error").for_stderr().red().bold(),
            style(":").for_stderr().white().bold(),
        )?;
    }
    let bt = e.backtrace();
    if bt.status() == BacktraceStatus::Captured {
        writeln!(out, "error backtrace:")?;
        writeln!(out, "{bt}")?;
    }
    Ok(())
}
