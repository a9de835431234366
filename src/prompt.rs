//! Blocking stdin prompts for the interactive selector
//!
//! Parsing is split from the read loops so the accept/reject and menu
//! semantics are unit-testable without a terminal. Prompts read whole lines
//! from stdin, which also makes the binary drivable with piped input.

use std::io::{self, BufRead, Write};

use console::style;

use crate::error::{ArchflowError, Result};

/// Outcome of parsing one confirmation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

/// Parse a confirmation answer. Empty input takes the default; only `n`/`no`
/// (case-insensitive) rejects, everything else accepts.
pub fn parse_confirm(input: &str, default: Confirmation) -> Confirmation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.to_lowercase().as_str() {
        "n" | "no" => Confirmation::No,
        _ => Confirmation::Yes,
    }
}

/// Parse a menu answer against a 1-based menu of `len` entries
///
/// Returns the zero-based index, or `None` for anything out of range or
/// non-numeric (the caller re-prompts).
pub fn parse_menu_choice(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=len).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

/// Ask a yes/no question, defaulting to yes on empty input
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (Y/n): ", style(question).bold());
    flush_stdout()?;

    let line = read_line()?;
    Ok(parse_confirm(&line, Confirmation::Yes) == Confirmation::Yes)
}

/// Present a numbered menu and loop until a valid entry number is entered
///
/// Invalid input re-prompts and never terminates the program; only a closed
/// stdin surfaces as an error.
pub fn numbered_menu(title: &str, items: &[(String, String)]) -> Result<usize> {
    println!();
    println!("{}", style(title).yellow().bold());
    for (i, (_, label)) in items.iter().enumerate() {
        println!("  {}) {}", i + 1, label);
    }
    println!();

    loop {
        print!("Enter your choice (1-{}): ", items.len());
        flush_stdout()?;

        let line = read_line()?;
        match parse_menu_choice(&line, items.len()) {
            Some(index) => return Ok(index),
            None => {
                println!(
                    "{} Invalid choice. Please enter a number between 1 and {}.",
                    style("✗").red(),
                    items.len()
                );
            }
        }
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(ArchflowError::IoError {
            message: "stdin closed while waiting for input".to_string(),
        });
    }
    Ok(line)
}

fn flush_stdout() -> Result<()> {
    io::stdout().flush()?;
    Ok(())
}
