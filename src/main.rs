use anyhow::Result;
use clap::Parser;
use csv2ics::cli::Cli;
use csv2ics::{Config, convert_file, init_logger, self_check};
use log::{error, info};
use std::io::Write;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init_logger();
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        info!("No input file given, running the date parser self-check");
        let failures = self_check::run();
        if failures > 0 {
            error!("{} self-check case(s) failed", failures);
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    };

    let ical = convert_file(&input, &Config::default())?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(ical.as_bytes())?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
