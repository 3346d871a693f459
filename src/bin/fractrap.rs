use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::fmt;

use fractrap::{Cli, EXIT_BAD_INPUT, PixelsPresenterFactory, RunGuiCommand, StartupError};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_BAD_INPUT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let max_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    fmt().with_max_level(max_level).with_target(false).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), StartupError> {
    let config = cli.into_config()?;
    let command = RunGuiCommand::new(config, PixelsPresenterFactory::new());

    let report = command.execute()?;
    if report.total() > 0 {
        info!(
            "{} snapshots written, {} failed",
            report.succeeded, report.failed
        );
    }

    Ok(())
}
