//! Generation of `archflow.config.yaml`
//!
//! The configuration schema is fixed and every default is baked into the
//! generator; only the platform section varies with the chosen tool.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::common::fs::ensure_parent_dir;
use crate::error::{ArchflowError, Result};
use crate::platform::ToolProfile;

/// Name of the generated configuration file
pub const CONFIG_FILE_NAME: &str = "archflow.config.yaml";

const CONFIG_HEADER: &str = "\
# Archflow Configuration
# This file configures the document-driven development workflow

";

#[derive(Debug, Serialize)]
pub struct ArchflowConfig {
    pub platform: PlatformSection,
    pub workflow: WorkflowSection,
    pub documentation: DocumentationSection,
    pub language: LanguageSection,
    pub skills: SkillsSection,
    pub advanced: AdvancedSection,
}

#[derive(Debug, Serialize)]
pub struct PlatformSection {
    /// Target platform identifier (e.g. "cursor")
    pub target: String,
    /// Skills installation path, relative to the project root
    pub skills_path: String,
    /// Rules installation path, relative to the project root
    pub rules_path: String,
    /// Agents installation path, for tools with an agents convention
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkflowSection {
    /// Enable Multi-Agent Debate for the design phase
    pub enable_debate: bool,
    /// Default agents for debate (overridable per skill)
    pub debate_agents: Vec<String>,
    /// Auto-sync architect documents after changes
    pub auto_sync_architect: bool,
    /// Auto-generate changelog after bugfix
    pub auto_changelog: bool,
}

#[derive(Debug, Serialize)]
pub struct DocumentationSection {
    pub architect_root: String,
    pub requirements_root: String,
    pub changelog_root: String,
    /// "standard" or "minimal"
    pub template_style: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageSection {
    /// Primary language for documents and prompts ("ko" or "en")
    pub primary: String,
    pub multi_language: bool,
}

#[derive(Debug, Serialize)]
pub struct SkillsSection {
    /// Skills to enable (empty = all skills enabled)
    pub enabled: Vec<String>,
    /// Skills to disable
    pub disabled: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AdvancedSection {
    /// "strict", "normal", or "lenient"
    pub validation_mode: String,
    /// Auto-fix linter errors after implementation
    pub auto_fix_lints: bool,
    /// Generate tests during implementation
    pub generate_tests: bool,
    /// "manual", "auto", or "prompt"
    pub commit_strategy: String,
}

impl ArchflowConfig {
    /// Build the configuration for a chosen tool, everything else defaulted
    pub fn for_profile(profile: &ToolProfile) -> Self {
        let layout = profile.layout();

        Self {
            platform: PlatformSection {
                target: profile.id.clone(),
                skills_path: layout.map(|l| l.skills_dir.clone()).unwrap_or_default(),
                rules_path: layout.map(|l| l.rules.dest.clone()).unwrap_or_default(),
                agents_path: layout.and_then(|l| l.agents_dir.clone()),
            },
            workflow: WorkflowSection {
                enable_debate: true,
                debate_agents: vec![
                    "domain-architect".to_string(),
                    "best-practice-advisor".to_string(),
                ],
                auto_sync_architect: true,
                auto_changelog: true,
            },
            documentation: DocumentationSection {
                architect_root: "docs".to_string(),
                requirements_root: "docs/requirements".to_string(),
                changelog_root: "docs/changelog".to_string(),
                template_style: "standard".to_string(),
            },
            language: LanguageSection {
                primary: "ko".to_string(),
                multi_language: false,
            },
            skills: SkillsSection {
                enabled: Vec::new(),
                disabled: Vec::new(),
            },
            advanced: AdvancedSection {
                validation_mode: "normal".to_string(),
                auto_fix_lints: true,
                generate_tests: true,
                commit_strategy: "manual".to_string(),
            },
        }
    }

    /// Serialize under the fixed comment header
    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("{CONFIG_HEADER}{body}"))
    }
}

/// Write the configuration file, overwriting any previous one
pub fn write_config(config_path: &Path, profile: &ToolProfile) -> Result<()> {
    let yaml = ArchflowConfig::for_profile(profile).to_yaml()?;
    ensure_parent_dir(config_path)?;
    fs::write(config_path, yaml).map_err(|e| ArchflowError::FileWriteFailed {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })
}
