//! breathalyzer -- score a text file against the reference vocabulary.
//!
//! Usage: breathalyzer [--vocabulary <path>] [--format plain|json] [-v] <TEXT_FILE>

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use breathalyzer::cli::{self, CliArgs};

fn main() {
    let args = CliArgs::parse();

    // RUST_LOG wins when set; `-v` only raises the fallback filter.
    // Logs go to stderr so stdout only carries the result.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    // Exit explicitly: returning `Err` from main would print the Debug form.
    match cli::run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
