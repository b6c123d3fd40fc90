use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use sonosbar::cli::Args;
use sonosbar::config::Config;
use sonosbar::controller::UpnpController;
use sonosbar::logging::init_logging;
use sonosbar::BarError;

fn report(error: &BarError) {
    match error.user_message() {
        Some(message) => println!("{}", message),
        None => {
            error!(error = %error, "command failed");
            eprintln!("Error: {}", error);
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from_env(&args).context("Invalid configuration")?;
    init_logging(&config.log_level).context("Failed to initialize logging")?;
    debug!(?config, "starting");

    let invocation = match args.invocation() {
        Ok(invocation) => invocation,
        Err(e) => {
            report(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let controller = UpnpController::new(config.discovery_timeout);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = sonosbar::run(&controller, &invocation, &config.menu(), &mut out);
    out.flush().context("Failed to flush output")?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            drop(out);
            report(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
