//! Prompt and input parsing helpers
//!
//! Parsing and retry are separated: `parse_*` validate one input and return
//! a result; the `prompt_*` helpers own the re-prompt loop.

use std::io::{self, BufRead, Write};

use super::errors::{CliError, CliResult};

/// Prints a prompt and reads one trimmed line from stdin.
///
/// End of input is an I/O error; the menu loop ends on it.
pub fn prompt(text: &str) -> CliResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(CliError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "End of input",
        )));
    }
    Ok(line.trim().to_string())
}

/// Parses a price value
pub fn parse_f64(input: &str) -> CliResult<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_numeric(input.trim()))
}

/// Parses a quantity value
pub fn parse_u64(input: &str) -> CliResult<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_numeric(input.trim()))
}

/// Parses a discount percentage
pub fn parse_i64(input: &str) -> CliResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_numeric(input.trim()))
}

/// Prompts until the operator enters a parseable float
pub fn prompt_f64(text: &str) -> CliResult<f64> {
    loop {
        match parse_f64(&prompt(text)?) {
            Ok(value) => return Ok(value),
            Err(CliError::InvalidNumericInput(_)) => {
                println!("Invalid input. Please enter a number.");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prompts until the operator enters a parseable unsigned integer
pub fn prompt_u64(text: &str) -> CliResult<u64> {
    loop {
        match parse_u64(&prompt(text)?) {
            Ok(value) => return Ok(value),
            Err(CliError::InvalidNumericInput(_)) => {
                println!("Invalid input. Please enter an integer.");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prompts until the operator enters a parseable integer
pub fn prompt_i64(text: &str) -> CliResult<i64> {
    loop {
        match parse_i64(&prompt(text)?) {
            Ok(value) => return Ok(value),
            Err(CliError::InvalidNumericInput(_)) => {
                println!("Invalid input. Please enter an integer.");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prompts for an optional integer; a blank line means none
pub fn prompt_optional_i64(text: &str) -> CliResult<Option<i64>> {
    loop {
        let input = prompt(text)?;
        if input.is_empty() {
            return Ok(None);
        }
        match parse_i64(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(CliError::InvalidNumericInput(_)) => {
                println!("Invalid input. Please enter an integer or leave blank.");
            }
            Err(e) => return Err(e),
        }
    }
}
