//! The init command: select a tool, then install the Archflow payload

use std::path::{Path, PathBuf};

use console::style;

use crate::cli::Cli;
use crate::error::{ArchflowError, Result};
use crate::installer::{self, InstallTarget};
use crate::platform::registry::ToolRegistry;
use crate::platform::{ToolProfile, detection};
use crate::prompt;
use crate::source::SourceTree;

/// Run the installer against the given workspace root
pub fn run(cli: &Cli, workspace_root: &Path) -> Result<()> {
    let registry = ToolRegistry::default();
    let source = SourceTree::locate()?;

    let profile = choose_profile(cli, &registry, workspace_root)?;
    println!(
        "\n{} Selected platform: {}",
        style("✓").green(),
        style(&profile.name).bold()
    );

    let target = InstallTarget::new(profile, PathBuf::from(workspace_root), source);
    installer::run(&target)
}

/// Resolve the tool to install for: flag override, detection plus
/// confirmation, or the numbered menu
fn choose_profile<'a>(
    cli: &Cli,
    registry: &'a ToolRegistry,
    workspace_root: &Path,
) -> Result<&'a ToolProfile> {
    if let Some(id) = &cli.platform {
        return registry
            .get(id)
            .ok_or_else(|| ArchflowError::PlatformNotSupported {
                platform: id.clone(),
            });
    }

    if let Some(detected) = detection::detect_tool(registry, workspace_root) {
        println!(
            "{} Detected platform: {}",
            style("ℹ").cyan(),
            style(&detected.name).bold()
        );

        if cli.yes || prompt::confirm(&format!("Continue with {}?", detected.name))? {
            return Ok(detected);
        }
    }

    select_from_menu(registry)
}

fn select_from_menu(registry: &ToolRegistry) -> Result<&ToolProfile> {
    let items: Vec<(String, String)> = registry
        .all()
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();

    let index = prompt::numbered_menu("Select your platform:", &items)?;

    // The menu index is valid by construction
    registry
        .all()
        .get(index)
        .ok_or_else(|| ArchflowError::IoError {
            message: "menu selection out of range".to_string(),
        })
}
