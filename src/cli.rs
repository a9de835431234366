//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// archflow-init - Archflow toolkit installer
///
/// Detects which AI coding assistant a project uses and installs the
/// Archflow skills, rules, and agents into that tool's locations.
#[derive(Parser, Debug)]
#[command(
    name = "archflow-init",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer for the Archflow document-driven development toolkit",
    long_about = "archflow-init detects the AI coding assistant configured in the current \
                  project (Cursor, Claude Code, Windsurf, Gemini CLI, GitHub Copilot), \
                  then installs the Archflow skills, rules, and agents into that tool's \
                  conventions and writes archflow.config.yaml."
)]
pub struct Cli {
    /// Project directory to install into (defaults to current directory)
    #[arg(long, short = 'w', env = "ARCHFLOW_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Install for a specific platform without detection or prompts
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Accept the detected platform without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}
