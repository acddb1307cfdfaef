//! # `convert`
//!
//! Converts quantities between units of temperature, distance and weight, and
//! compares two quantities of the same family.
//!
//! ## Usage
//!
//! ```sh
//! convert temperature 100 C F      # 212
//! convert temperature 100          # uses the configured default units
//! convert distance 5 km mi         # 3.11
//! convert compare 5 km 3 mi
//! ```
//!
//! Results are rounded to the precision in the defaults file. Pass
//! `--config <PATH>` (or set `CONVERT_CONFIG`) to use a different one.

use clap::Parser as _;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use unitconv::cli::Args;
use unitconv::error::ConvertError;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Logs go to stderr so stdout only ever carries results
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match unitconv::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Invocation failed: {err:?}");
            let code = match err.downcast_ref::<ConvertError>() {
                Some(convert_err) if convert_err.is_usage() => {
                    eprintln!("{convert_err}");
                    convert_err.exit_code()
                }
                Some(convert_err) => {
                    eprintln!("Error: {err:#}");
                    convert_err.exit_code()
                }
                None => {
                    eprintln!("Error: {err:#}");
                    1
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
