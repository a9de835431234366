//! Common test utilities for archflow-init integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory the installer runs against
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a directory in the workspace
    pub fn create_dir(&self, path: &str) {
        std::fs::create_dir_all(self.path.join(path)).expect("Failed to create directory");
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// An Archflow payload tree the installer copies from
#[allow(dead_code)]
pub struct TestPayload {
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestPayload {
    /// A payload with skills, rules, agents, and templates populated
    pub fn standard() -> Self {
        let payload = Self::minimal();

        payload.write_file("skills/architect/SKILL.md", "# Architect\n\nDesign skill.\n");
        payload.write_file("agents/domain-architect.md", "# Domain Architect\n");
        payload.write_file("agents/best-practice-advisor.md", "# Best Practice Advisor\n");
        payload.write_file("templates/requirement.md", "# Requirement Template\n");

        payload
    }

    /// The smallest payload the installer accepts: skills and rules only
    pub fn minimal() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let payload = Self { temp, path };

        payload.write_file("skills/require-refine.md", "# Require Refine\n");
        payload.write_file("rules/document-style.md", "# Document Style\n\nWrite docs first.\n");
        payload.write_file("rules/review.md", "# Review\n\nReview designs.\n");
        payload.write_file("rules/.gitkeep", "");

        payload
    }

    /// Write a file in the payload
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }
}

/// Build an archflow-init command bound to a workspace and payload
#[allow(dead_code)]
pub fn init_cmd(workspace: &TestWorkspace, payload: &TestPayload) -> Command {
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("archflow-init").expect("binary should build");
    cmd.current_dir(&workspace.path)
        .env("ARCHFLOW_HOME", &payload.path)
        .env_remove("ARCHFLOW_WORKSPACE");
    cmd
}
