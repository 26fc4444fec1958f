use std::process::ExitCode;

use anyhow::Context;

mod arith;
mod logger;

fn main() -> ExitCode {
    env_logger::init();
    if let Err(e) = main_internal() {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn main_internal() -> anyhow::Result<()> {
    logger::log_line("Ghost in the Shell initializing...")
        .context("failed to write startup message")?;

    let r = arith::add(7, 5);
    log::debug!("computed sum: {r}");
    logger::log_line(format!("Computation result: {r}"))
        .context("failed to write computation result")?;

    logger::log_line("System integrity: stable.").context("failed to write status message")?;
    Ok(())
}
