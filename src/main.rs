//! stockroom CLI entry point
//!
//! A minimal entrypoint: parse arguments, run the menu loop, print errors
//! to stderr, exit non-zero on failure. All logic lives in the cli module.

use stockroom::cli;
use stockroom::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal("RUN_FAILED", &[("error", &e.to_string())]);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
