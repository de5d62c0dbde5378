//! `sanitize` command implementation: read a document, apply the rules, write it out.

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use sanitree_core::{RulesConfig, SanitizeSummaryItem, Sanitizer};

use crate::cli::InputFormat;

/// Options for the ergonomic run_sanitize_opts API
pub struct SanitizeOptions {
    pub rules_path: PathBuf,
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub format: InputFormat,
    pub compact: bool,
    pub summary: bool,
}

/// The main operation runner for the sanitree CLI.
pub fn run_sanitize_opts(opts: &SanitizeOptions) -> Result<()> {
    info!("Starting sanitize operation.");

    let config = RulesConfig::load_from_file(&opts.rules_path)?;
    let sanitizer = Sanitizer::new(config.rule_set());

    let raw = read_input(opts.input_path.as_ref())?;
    let document = parse_document(&raw, opts.format)?;

    let (sanitized, summary) = sanitizer
        .sanitize_with_summary(&document)
        .context("Sanitization failed")?;
    debug!("Sanitized document with {} rule path(s).", summary.len());

    write_output(opts, &sanitized)?;

    if opts.summary {
        print_summary(&summary, &mut io::stderr())?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

pub fn parse_document(raw: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => serde_json::from_str(raw).context("Input is not valid JSON"),
        InputFormat::Yaml => serde_yml::from_str(raw).context("Input is not valid YAML"),
    }
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

fn write_output(opts: &SanitizeOptions, sanitized: &Value) -> Result<()> {
    let text = render(sanitized, opts.compact)?;
    match &opts.output_path {
        Some(path) => {
            info!("Writing sanitized document to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", text)?;
        }
        None => {
            info!("Writing sanitized document to stdout.");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", text)?;
        }
    }
    Ok(())
}

pub fn print_summary<W: Write>(summary: &[SanitizeSummaryItem], out: &mut W) -> Result<()> {
    writeln!(out, "Sanitization summary:")?;
    for item in summary {
        writeln!(out, "  {}: {} value(s) rewritten", item.path, item.rewritten)?;
    }
    let total: usize = summary.iter().map(|s| s.rewritten).sum();
    writeln!(out, "  total: {}", total)?;
    Ok(())
}
