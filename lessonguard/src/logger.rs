// lessonguard/src/logger.rs
//! Logger setup for the lessonguard binary.
//!
//! `RUST_LOG` is honored; `--debug` forces Debug for the lessonguard crates and
//! `--quiet` turns logging off entirely.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

const OWN_CRATES: [&str; 3] = ["lessonguard", "lessonguard_core", "lessonguard_wordlist"];

/// Chooses the level override implied by the global flags. `quiet` wins.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Initializes `env_logger`. Safe to call more than once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));

    match level_override {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            for module in OWN_CRATES {
                builder.filter_module(module, level);
            }
        }
        None => {}
    }

    let _ = builder.try_init();
}
