//! `unitconv` - A CLI tool for converting and comparing quantities
//!
//! This library converts values between temperature, distance and weight
//! units, compares two quantities of the same family, and rounds every result
//! to the precision set in the defaults file.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;
pub mod units;
pub mod utils;

use anyhow::Result;
use cli::Args;
use config::Defaults;
use operations::Converter;
use std::io::Write;
use system::{RealSystem, System};

/// Main entry point for the convert library
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(args, &system, &mut out)
}

/// Run against an explicit system and output sink
///
/// Usage is checked before the defaults are loaded, so a bad invocation never
/// touches the configuration.
pub fn run_with(args: &Args, system: &dyn System, out: &mut dyn Write) -> Result<()> {
    let request = args.request()?;
    let defaults = Defaults::load(system, args.config.as_deref())?;
    let converter = Converter::new(defaults);
    cli::execute(&request, &converter, out)
}
