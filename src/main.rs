//! archflow-init - Archflow toolkit installer
//!
//! Detects which AI coding assistant a project uses, installs the Archflow
//! skills/rules/agents payload into that tool's conventions, and writes the
//! workflow configuration file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

mod cli;
mod commands;
mod common;
mod error;
mod installer;
mod platform;
mod progress;
mod prompt;
mod source;

use cli::Cli;
use error::{ArchflowError, Result};

const ISSUES_URL: &str = "https://github.com/samdae/archflow/issues";
const DOCS_URL: &str = "https://github.com/samdae/archflow";

const BANNER_LINE: &str = "==================================================";

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!();
    println!("{}", style("📦 Archflow Initialization").bold());
    println!("{}", style("==========================").bold());

    let result = resolve_workspace(&cli).and_then(|root| commands::init::run(&cli, &root));

    match result {
        Ok(()) => {
            print_success();
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Resolve and validate the installation target directory
fn resolve_workspace(cli: &Cli) -> Result<PathBuf> {
    let root = match &cli.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    dunce::canonicalize(&root).map_err(|e| ArchflowError::IoError {
        message: format!("workspace directory {}: {}", root.display(), e),
    })
}

fn print_success() {
    println!();
    println!("{}", style(BANNER_LINE).green());
    println!(
        "{}",
        style("✨ Archflow initialized successfully!").green().bold()
    );
    println!("{}", style(BANNER_LINE).green());
    println!();
    println!("{}", style("Next steps:").cyan());
    println!("  1. Review the configuration file (archflow.config.yaml)");
    println!("  2. Start using Archflow skills in your AI assistant:");
    println!("     - require-refine: Refine requirements");
    println!("     - architect: Design with multi-agent debate");
    println!("     - implement: Implement from design documents");
    println!("     - bugfix: Debug with document context");
    println!("     - changelogging: Generate changelogs");
    println!();
    println!("{} {}", style("📖 Documentation:").cyan(), DOCS_URL);
    println!();
}

fn print_failure(error: &ArchflowError) {
    eprintln!();
    eprintln!("{}", style(BANNER_LINE).red());
    eprintln!(
        "{} Initialization failed: {}",
        style("✗").red().bold(),
        error
    );
    eprintln!("{}", style(BANNER_LINE).red());
    eprintln!();
    eprintln!("{}", style("Please try again or report the issue at:").yellow());
    eprintln!("  {ISSUES_URL}");
    eprintln!();
}
