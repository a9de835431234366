//! Installer dispatcher
//!
//! Given a chosen tool profile, executes the fixed install sequence:
//! delegate to the tool's own CLI, or copy skills, materialize rules through
//! the format adapter, copy agents, mirror templates, write the
//! configuration file, and create the root context document.

use std::path::{Path, PathBuf};

use console::style;

use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::error::{ArchflowError, Result};
use crate::platform::{FileLayout, InstallMethod, ToolProfile};
use crate::progress::InstallProgress;
use crate::source::SourceTree;

pub mod cli_delegate;
pub mod config;
pub mod context;
pub mod rules;

use context::ContextOutcome;

/// The chosen profile bound to a concrete workspace and payload
pub struct InstallTarget<'a> {
    pub profile: &'a ToolProfile,
    pub workspace_root: PathBuf,
    pub source: SourceTree,
}

impl<'a> InstallTarget<'a> {
    pub fn new(profile: &'a ToolProfile, workspace_root: PathBuf, source: SourceTree) -> Self {
        Self {
            profile,
            workspace_root,
            source,
        }
    }
}

/// Run the full install sequence for the chosen tool
pub fn run(target: &InstallTarget) -> Result<()> {
    match &target.profile.install {
        InstallMethod::Cli(delegate) => {
            println!(
                "Installing through the {} CLI...",
                style(&target.profile.name).bold()
            );
            cli_delegate::run_cli_install(delegate, &target.workspace_root)
        }
        InstallMethod::Files(layout) => install_files(target, layout),
    }
}

fn install_files(target: &InstallTarget, layout: &FileLayout) -> Result<()> {
    let root = &target.workspace_root;

    // skills, rules, config, plus the optional steps this profile carries
    let mut total_steps = 3 + u64::from(layout.agents_dir.is_some());
    if target.source.templates_dir().is_dir() {
        total_steps += 1;
    }
    if layout.context_file.is_some() {
        total_steps += 1;
    }

    let progress = InstallProgress::new(total_steps);

    let outcome = (|| -> Result<()> {
        progress.update_step("Installing skills");
        let skills_count = copy_required_dir(
            &target.source.skills_dir(),
            &root.join(&layout.skills_dir),
            "skills",
        )?;
        progress.println(&format!(
            "{} Skills installed to {} ({} files)",
            style("✓").green(),
            layout.skills_dir,
            skills_count
        ));
        progress.inc_step();

        progress.update_step("Installing rules");
        let rules_count = rules::install_rules(&target.source.rules_dir(), root, &layout.rules)?;
        progress.println(&format!(
            "{} Rules installed to {} ({} files)",
            style("✓").green(),
            layout.rules.dest,
            rules_count
        ));
        progress.inc_step();

        if let Some(agents_dir) = &layout.agents_dir {
            progress.update_step("Installing agents");
            let agents_count = copy_required_dir(
                &target.source.agents_dir(),
                &root.join(agents_dir),
                "agents",
            )?;
            progress.println(&format!(
                "{} Agents installed to {} ({} files)",
                style("✓").green(),
                agents_dir,
                agents_count
            ));
            progress.inc_step();
        }

        if target.source.templates_dir().is_dir() {
            progress.update_step("Installing templates");
            let templates_dest = root.join(&layout.config_dir).join("templates");
            copy_dir_recursive(
                &target.source.templates_dir(),
                &templates_dest,
                &CopyOptions::housekeeping(),
            )?;
            progress.println(&format!(
                "{} Templates installed to {}/templates",
                style("✓").green(),
                layout.config_dir
            ));
            progress.inc_step();
        }

        progress.update_step("Writing configuration");
        let config_path = root.join(&layout.config_dir).join(config::CONFIG_FILE_NAME);
        config::write_config(&config_path, target.profile)?;
        progress.println(&format!(
            "{} Configuration written to {}/{}",
            style("✓").green(),
            layout.config_dir,
            config::CONFIG_FILE_NAME
        ));
        progress.inc_step();

        if let Some(context_file) = &layout.context_file {
            progress.update_step("Creating context file");
            match context::write_context_file(root, context_file)? {
                ContextOutcome::Created => progress.println(&format!(
                    "{} Context file created: {}",
                    style("✓").green(),
                    context_file
                )),
                ContextOutcome::AlreadyExists => progress.println(&format!(
                    "{} {} already exists, left untouched",
                    style("ℹ").cyan(),
                    context_file
                )),
            }
            progress.inc_step();
        }

        Ok(())
    })();

    match outcome {
        Ok(()) => {
            progress.finish();
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}

/// Copy a payload directory that must exist
fn copy_required_dir(src: &Path, dst: &Path, kind: &str) -> Result<usize> {
    if !src.is_dir() {
        return Err(ArchflowError::SourceDirMissing {
            kind: kind.to_string(),
            path: src.display().to_string(),
        });
    }
    copy_dir_recursive(src, dst, &CopyOptions::housekeeping())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::registry::ToolRegistry;
    use std::fs;
    use tempfile::TempDir;

    fn payload_fixture(temp: &TempDir) -> SourceTree {
        let root = temp.path().join("payload");
        fs::create_dir_all(root.join("skills/architect")).unwrap();
        fs::write(root.join("skills/architect/SKILL.md"), "# Architect\n").unwrap();
        fs::write(root.join("skills/require-refine.md"), "# Refine\n").unwrap();
        fs::create_dir_all(root.join("rules")).unwrap();
        fs::write(root.join("rules/style.md"), "# Style\n").unwrap();
        fs::write(root.join("rules/docs.md"), "# Docs\n").unwrap();
        fs::create_dir_all(root.join("agents")).unwrap();
        fs::write(root.join("agents/domain-architect.md"), "# Domain\n").unwrap();
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(root.join("templates/requirement.md"), "# Template\n").unwrap();
        SourceTree::at(root)
    }

    fn workspace(temp: &TempDir) -> PathBuf {
        let ws = temp.path().join("project");
        fs::create_dir_all(&ws).unwrap();
        ws
    }

    #[test]
    fn test_cursor_install_produces_declared_paths_only() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("cursor").unwrap();
        let ws = workspace(&temp);

        let target = InstallTarget::new(profile, ws.clone(), payload_fixture(&temp));
        run(&target).unwrap();

        assert!(ws.join(".cursor/skills/architect/SKILL.md").exists());
        assert!(ws.join(".cursor/rules/style.md").exists());
        assert!(ws.join(".cursor/agents/domain-architect.md").exists());
        assert!(ws.join(".cursor/templates/requirement.md").exists());
        assert!(ws.join(".cursor/archflow.config.yaml").exists());

        // Cursor has an agents directory, so no root context file
        assert!(!ws.join("AGENTS.md").exists());
        // Nothing for other tools
        assert!(!ws.join(".windsurf").exists());
        assert!(!ws.join(".gemini").exists());
        assert!(!ws.join(".github").exists());
    }

    #[test]
    fn test_windsurf_install_merges_rules_and_writes_context() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("windsurf").unwrap();
        let ws = workspace(&temp);

        let target = InstallTarget::new(profile, ws.clone(), payload_fixture(&temp));
        run(&target).unwrap();

        // Single merged file, not a folder of rule files
        let merged = ws.join(".windsurf/rules/archflow.md");
        assert!(merged.is_file());
        assert!(!ws.join(".windsurf/rules/style.md").exists());
        let content = fs::read_to_string(&merged).unwrap();
        assert!(content.starts_with("# Archflow Rules"));

        assert!(ws.join("AGENTS.md").exists());
        assert!(ws.join(".windsurf/archflow.config.yaml").exists());
    }

    #[test]
    fn test_gemini_install_references_rules_from_settings() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("gemini").unwrap();
        let ws = workspace(&temp);

        let target = InstallTarget::new(profile, ws.clone(), payload_fixture(&temp));
        run(&target).unwrap();

        assert!(ws.join(".gemini/archflow/rules/style.md").exists());
        assert!(ws.join("GEMINI.md").exists());

        let settings: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(ws.join(".gemini/settings.json")).unwrap())
                .unwrap();
        assert_eq!(settings["archflow"]["enabled"], true);
    }

    #[test]
    fn test_missing_skills_payload_is_fatal() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("cursor").unwrap();
        let ws = workspace(&temp);

        let payload_root = temp.path().join("broken-payload");
        fs::create_dir_all(payload_root.join("rules")).unwrap();

        let target = InstallTarget::new(profile, ws, SourceTree::at(payload_root));
        let result = run(&target);

        assert!(matches!(
            result,
            Err(ArchflowError::SourceDirMissing { .. })
        ));
    }

    #[test]
    fn test_missing_templates_payload_is_tolerated() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("windsurf").unwrap();
        let ws = workspace(&temp);

        let payload_root = temp.path().join("payload-no-templates");
        fs::create_dir_all(payload_root.join("skills")).unwrap();
        fs::write(payload_root.join("skills/a.md"), "# A\n").unwrap();
        fs::create_dir_all(payload_root.join("rules")).unwrap();
        fs::write(payload_root.join("rules/r.md"), "# R\n").unwrap();

        let target = InstallTarget::new(profile, ws.clone(), SourceTree::at(payload_root));
        run(&target).unwrap();

        assert!(ws.join(".windsurf/skills/a.md").exists());
        assert!(!ws.join(".windsurf/templates").exists());
    }

    #[test]
    fn test_rerun_preserves_existing_context_file() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::default();
        let profile = registry.get("windsurf").unwrap();
        let ws = workspace(&temp);
        fs::write(ws.join("AGENTS.md"), "user content\n").unwrap();

        let target = InstallTarget::new(profile, ws.clone(), payload_fixture(&temp));
        run(&target).unwrap();

        assert_eq!(
            fs::read_to_string(ws.join("AGENTS.md")).unwrap(),
            "user content\n"
        );
    }
}
