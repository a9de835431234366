//! Installation delegated to an external command-line tool
//!
//! Some tools own their plugin lifecycle; for those the installer runs the
//! tool's CLI instead of copying files. Commands inherit stdio so the tool's
//! own output and prompts pass through, and block until the child exits —
//! no timeout is imposed.

use std::path::Path;
use std::process::{Command, Stdio};

use console::style;

use crate::error::{ArchflowError, Result};
use crate::platform::CliDelegate;

/// Run the delegated install sequence
///
/// The program is probed first (PATH lookup plus a `--version` invocation);
/// if unreachable, the manual commands are printed and the run fails without
/// touching the file system. A failing command aborts immediately, with the
/// remaining commands printed for manual recovery.
pub fn run_cli_install(delegate: &CliDelegate, workspace_root: &Path) -> Result<()> {
    if !probe(&delegate.program) {
        print_manual_commands(
            delegate,
            &delegate.commands,
            &format!(
                "'{}' was not found on your PATH. Run these commands once it is installed:",
                delegate.program
            ),
        );
        return Err(ArchflowError::CliUnavailable {
            program: delegate.program.clone(),
        });
    }

    for (i, args) in delegate.commands.iter().enumerate() {
        let rendered = delegate.render_command(args);
        println!("{} {}", style("→").cyan(), rendered);

        let status = Command::new(&delegate.program)
            .args(args)
            .current_dir(workspace_root)
            .status()
            .map_err(|e| ArchflowError::IoError {
                message: format!("failed to launch '{}': {}", delegate.program, e),
            })?;

        if !status.success() {
            let remaining = &delegate.commands[i..];
            print_manual_commands(
                delegate,
                remaining,
                "The command above failed. Finish the install manually with:",
            );
            return Err(ArchflowError::CliCommandFailed {
                program: delegate.program.clone(),
                command: args.join(" "),
            });
        }
    }

    Ok(())
}

/// Check that the external program is reachable
fn probe(program: &str) -> bool {
    if which::which(program).is_err() {
        return false;
    }

    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn print_manual_commands(delegate: &CliDelegate, commands: &[Vec<String>], heading: &str) {
    eprintln!();
    eprintln!("{}", style(heading).yellow());
    for args in commands {
        eprintln!("  {}", style(delegate.render_command(args)).bold());
    }
    eprintln!();
}
