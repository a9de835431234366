//! Tool registry for managing supported tool profiles
//!
//! The registry order is significant: platform detection walks the profiles
//! in definition order and the first profile with an existing marker wins.

use super::{CliDelegate, FileLayout, InstallMethod, RulesTarget, ToolProfile};

/// Registry of all supported tools, in detection order
pub struct ToolRegistry {
    profiles: Vec<ToolProfile>,
}

impl ToolRegistry {
    /// Create a new registry with the given profiles
    pub fn new(profiles: Vec<ToolProfile>) -> Self {
        Self { profiles }
    }

    /// Get a profile by its identifier
    pub fn get(&self, id: &str) -> Option<&ToolProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// All profiles in detection order
    pub fn all(&self) -> &[ToolProfile] {
        &self.profiles
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(default_profiles())
    }
}

/// Default tool profiles, in detection order
///
/// Order is the documented tie-break: a workspace carrying markers for
/// several tools resolves to the first one listed here.
pub fn default_profiles() -> Vec<ToolProfile> {
    vec![
        // Cursor
        ToolProfile {
            id: "cursor".to_string(),
            name: "Cursor".to_string(),
            markers: vec![".cursor".to_string()],
            install: InstallMethod::Files(FileLayout {
                config_dir: ".cursor".to_string(),
                skills_dir: ".cursor/skills".to_string(),
                rules: RulesTarget::folder(".cursor/rules"),
                agents_dir: Some(".cursor/agents".to_string()),
                context_file: None,
            }),
        },
        // Claude Code
        // Installed through the claude CLI plugin flow; no files are copied.
        ToolProfile {
            id: "claude".to_string(),
            name: "Claude Code".to_string(),
            markers: vec![".claude".to_string(), "CLAUDE.md".to_string()],
            install: InstallMethod::Cli(CliDelegate {
                program: "claude".to_string(),
                commands: vec![
                    vec![
                        "plugin".to_string(),
                        "marketplace".to_string(),
                        "add".to_string(),
                        "samdae/archflow".to_string(),
                    ],
                    vec![
                        "plugin".to_string(),
                        "install".to_string(),
                        "archflow@archflow".to_string(),
                    ],
                ],
            }),
        },
        // Windsurf
        ToolProfile {
            id: "windsurf".to_string(),
            name: "Windsurf".to_string(),
            markers: vec![".windsurf".to_string(), ".windsurfrules".to_string()],
            install: InstallMethod::Files(FileLayout {
                config_dir: ".windsurf".to_string(),
                skills_dir: ".windsurf/skills".to_string(),
                rules: RulesTarget::single_file(".windsurf/rules/archflow.md"),
                agents_dir: None,
                context_file: Some("AGENTS.md".to_string()),
            }),
        },
        // Gemini CLI
        ToolProfile {
            id: "gemini".to_string(),
            name: "Gemini CLI".to_string(),
            markers: vec![".gemini".to_string(), "GEMINI.md".to_string()],
            install: InstallMethod::Files(FileLayout {
                config_dir: ".gemini".to_string(),
                skills_dir: ".gemini/skills".to_string(),
                rules: RulesTarget::json(".gemini/archflow/rules", ".gemini/settings.json"),
                agents_dir: None,
                context_file: Some("GEMINI.md".to_string()),
            }),
        },
        // GitHub Copilot
        ToolProfile {
            id: "copilot".to_string(),
            name: "GitHub Copilot".to_string(),
            markers: vec![
                ".github/copilot-instructions.md".to_string(),
                ".github/instructions".to_string(),
            ],
            install: InstallMethod::Files(FileLayout {
                config_dir: ".github".to_string(),
                skills_dir: ".github/skills".to_string(),
                rules: RulesTarget::folder(".github/instructions"),
                agents_dir: None,
                context_file: Some("AGENTS.md".to_string()),
            }),
        },
    ]
}
