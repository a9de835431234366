//! Platform definitions, registry, and detection
//!
//! This module handles:
//! - Tool profile definitions (ToolProfile, InstallMethod, RulesFormat)
//! - Profile registration and lookup (via ToolRegistry)
//! - Platform detection (via detection module)

use std::path::Path;

pub mod detection;
pub mod registry;

/// How a tool expects its guidance documents laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    /// A folder of independent rule files, structure preserved
    Folder,
    /// All rule documents concatenated into one file
    SingleFile,
    /// Rules copied to a nested folder and referenced from a settings file
    Json,
}

/// Destination for the Archflow rule documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesTarget {
    pub format: RulesFormat,

    /// Destination relative to the workspace root: a directory for `Folder`
    /// and `Json`, a file path for `SingleFile`
    pub dest: String,

    /// Settings file updated to reference the rules (`Json` only)
    pub settings_file: Option<String>,
}

impl RulesTarget {
    pub fn folder(dest: impl Into<String>) -> Self {
        Self {
            format: RulesFormat::Folder,
            dest: dest.into(),
            settings_file: None,
        }
    }

    pub fn single_file(dest: impl Into<String>) -> Self {
        Self {
            format: RulesFormat::SingleFile,
            dest: dest.into(),
            settings_file: None,
        }
    }

    pub fn json(dest: impl Into<String>, settings_file: impl Into<String>) -> Self {
        Self {
            format: RulesFormat::Json,
            dest: dest.into(),
            settings_file: Some(settings_file.into()),
        }
    }
}

/// File-system layout for a tool installed by copying files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayout {
    /// Directory receiving `archflow.config.yaml` and the templates copy
    pub config_dir: String,

    /// Destination for the skills tree
    pub skills_dir: String,

    /// Destination and format for the rule documents
    pub rules: RulesTarget,

    /// Destination for the agents tree; tools without an agents convention
    /// get a root context file instead
    pub agents_dir: Option<String>,

    /// Root-level context document written when `agents_dir` is `None`,
    /// only if the file does not already exist
    pub context_file: Option<String>,
}

/// Delegation to an external command-line program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliDelegate {
    /// Program name resolved on PATH
    pub program: String,

    /// Argument vectors run in order; a failure aborts the sequence
    pub commands: Vec<Vec<String>>,
}

impl CliDelegate {
    /// Render one command the way a user would type it
    pub fn render_command(&self, args: &[String]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }
}

/// How a tool gets installed: by copying files, or by delegating to the
/// tool's own CLI. A profile is exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    Files(FileLayout),
    Cli(CliDelegate),
}

/// A supported AI coding tool integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolProfile {
    /// Tool identifier (e.g., "cursor", "claude", "windsurf")
    pub id: String,

    /// Display name for the tool
    pub name: String,

    /// Detection markers (directories or files that indicate this tool),
    /// probed relative to the workspace root
    pub markers: Vec<String>,

    /// Installation method
    pub install: InstallMethod,
}

impl ToolProfile {
    /// Check if this tool is detected in the given directory (any marker exists)
    pub fn is_detected(&self, workspace_root: &Path) -> bool {
        self.markers
            .iter()
            .any(|marker| workspace_root.join(marker).exists())
    }

    /// File layout, if this profile installs by copying files
    pub fn layout(&self) -> Option<&FileLayout> {
        match &self.install {
            InstallMethod::Files(layout) => Some(layout),
            InstallMethod::Cli(_) => None,
        }
    }
}
