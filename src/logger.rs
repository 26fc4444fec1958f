use std::fmt::Display;
use std::io::Write;

use anyhow::Context;

/// Write one line to standard output, appending a newline.
///
/// A failed write (e.g. closed pipe) is propagated as an error rather than
/// ignored; the caller decides whether it is fatal.
pub fn log_line(msg: impl Display) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{msg}").context("failed to write line to stdout")?;
    Ok(())
}
