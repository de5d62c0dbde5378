// sanitree/src/lib.rs
//! # sanitree CLI Application
//!
//! Thin command-line wrapper around `sanitree-core`: it loads a rules file and a
//! document, runs the sanitizer, and writes the result.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::sanitize::{run_sanitize_opts, SanitizeOptions};
