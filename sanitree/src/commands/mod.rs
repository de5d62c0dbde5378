//! Command implementations for the sanitree CLI.

pub mod sanitize;
