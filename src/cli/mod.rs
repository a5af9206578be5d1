//! CLI module for stockroom
//!
//! Operator surface: argument parsing, configuration, the interactive
//! six-action menu (add, update, remove, search, display-all, exit), and
//! input helpers. All inventory logic is delegated to the adapter.

mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{run, Config};
pub use errors::{CliError, CliResult};
pub use io::{parse_f64, parse_i64, parse_u64};
