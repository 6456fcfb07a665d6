// lessonguard/src/main.rs
//! Lessonguard entry point.

use clap::Parser;
use log::{debug, info};

use lessonguard::cli::Cli;
use lessonguard::commands::error_msg;
use lessonguard::logger;

fn main() {
    // A `.env` file may supply LESSONGUARD_RULES before clap reads the environment.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    info!("lessonguard started. Version: {}", env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        debug!("Loaded environment from .env file.");
    }

    if let Err(e) = lessonguard::run(&cli) {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
