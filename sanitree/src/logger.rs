//! Logger setup for the sanitree binary.
//!
//! Honours `RUST_LOG` unless an explicit level override is passed. Lines are written
//! to stderr as `[LEVEL target] message` so stdout stays reserved for the document.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    if let Some(level) = level_override {
        builder.filter_level(level);
    }

    // Tests may initialise more than once.
    let _ = builder.try_init();
}
