//! Main application entry point.

use clap::Parser;
use std::process;

fn main() {
    env_logger::init();
    log::info!("Starting LucidNote");

    let args = lucidnote_app::Args::parse();
    if let Err(err) = lucidnote_app::run(&args) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
