//! This file defines the command-line interface (CLI) for the sanitree application.
//! License: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sanitree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite values inside a JSON or YAML document with path-based filter rules",
    long_about = "sanitree reads a document, applies the filter chains declared in a rules file to every value their dotted paths reach (with `*` matching every element at one level), and writes the transformed document as JSON. Values no rule reaches are left exactly as they were."
)]
pub struct Cli {
    /// Rules file (YAML or JSON) with a top-level `rules` mapping of path to rule string.
    #[arg(long, short = 'r', value_name = "FILE", env = "SANITREE_RULES")]
    pub rules: PathBuf,

    /// Path to an input document (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the sanitized document to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format of the input document.
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: InputFormat,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,

    /// Print how many values each rule path rewrote to stderr.
    #[arg(long, short = 's')]
    pub summary: bool,

    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,
}

/// Supported input document formats.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}
