//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// stockroom - An interactive inventory management tool
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./stockroom.json")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
