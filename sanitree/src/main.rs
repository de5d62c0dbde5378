// sanitree/src/main.rs
//! sanitree entry point.
//!
//! Parses arguments, initialises logging and runs the sanitize command.

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use sanitree::cli::Cli;
use sanitree::logger;
use sanitree::{run_sanitize_opts, SanitizeOptions};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("sanitree started. Version: {}", env!("CARGO_PKG_VERSION"));

    run_sanitize_opts(&SanitizeOptions {
        rules_path: args.rules,
        input_path: args.input,
        output_path: args.output,
        format: args.format,
        compact: args.compact,
        summary: args.summary,
    })
}
