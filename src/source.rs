//! Locating the Archflow payload tree
//!
//! The payload is the fixed set of skill/rule/agent/template documents the
//! installer copies into a project. It ships next to the installed binary;
//! `ARCHFLOW_HOME` overrides the search, which is also how the integration
//! tests point the real binary at fixture payloads.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{ArchflowError, Result};

/// Environment variable overriding the payload location
pub const HOME_ENV: &str = "ARCHFLOW_HOME";

/// Resolved payload directories
#[derive(Debug, Clone)]
pub struct SourceTree {
    pub root: PathBuf,
}

impl SourceTree {
    /// Resolve the payload tree from ARCHFLOW_HOME, the executable's
    /// directory, or its parent, in that order
    pub fn locate() -> Result<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();

        if let Some(home) = env::var_os(HOME_ENV) {
            candidates.push(PathBuf::from(home));
        }

        if let Ok(exe) = env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                candidates.push(exe_dir.to_path_buf());
                if let Some(above) = exe_dir.parent() {
                    candidates.push(above.to_path_buf());
                }
            }
        }

        for candidate in &candidates {
            if Self::looks_like_payload(candidate) {
                return Ok(Self {
                    root: candidate.clone(),
                });
            }
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ArchflowError::PayloadNotFound { searched })
    }

    /// Open a payload tree at a known root (used by tests)
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn looks_like_payload(dir: &Path) -> bool {
        dir.join("skills").is_dir() && dir.join("rules").is_dir()
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.root.join("skills")
    }

    pub fn rules_dir(&self) -> PathBuf {
        self.root.join("rules")
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.root.join("agents")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_looks_like_payload() {
        let temp = TempDir::new().unwrap();
        assert!(!SourceTree::looks_like_payload(temp.path()));

        std::fs::create_dir(temp.path().join("skills")).unwrap();
        assert!(!SourceTree::looks_like_payload(temp.path()));

        std::fs::create_dir(temp.path().join("rules")).unwrap();
        assert!(SourceTree::looks_like_payload(temp.path()));
    }

    #[test]
    fn test_source_tree_paths() {
        let tree = SourceTree::at("/opt/archflow");
        assert_eq!(tree.skills_dir(), PathBuf::from("/opt/archflow/skills"));
        assert_eq!(tree.rules_dir(), PathBuf::from("/opt/archflow/rules"));
        assert_eq!(tree.agents_dir(), PathBuf::from("/opt/archflow/agents"));
        assert_eq!(
            tree.templates_dir(),
            PathBuf::from("/opt/archflow/templates")
        );
    }
}
