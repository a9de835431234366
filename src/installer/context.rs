//! Root context document for tools without an agents convention
//!
//! Tools that have no dedicated agents directory get a root-level
//! orientation document (AGENTS.md or GEMINI.md) instead. An existing file
//! is never overwritten; the user's own context document always wins.

use std::fs;
use std::path::Path;

use crate::error::{ArchflowError, Result};

const CONTEXT_TEMPLATE: &str = "\
# Archflow

This project uses Archflow, a document-driven development workflow.

Skills installed for this assistant:

- `require-refine`: refine requirements into a requirement document
- `architect`: design with multi-agent debate, producing architect documents
- `implement`: implement from design documents
- `bugfix`: debug with document context
- `changelogging`: generate changelogs from completed work

Workflow configuration lives in `archflow.config.yaml` next to the installed
skills. Architect and requirement documents live under `docs/` by default.
";

/// Result of a context-file write attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOutcome {
    Created,
    AlreadyExists,
}

/// Write the context document at the workspace root, unless it already exists
pub fn write_context_file(workspace_root: &Path, file_name: &str) -> Result<ContextOutcome> {
    let path = workspace_root.join(file_name);
    if path.exists() {
        return Ok(ContextOutcome::AlreadyExists);
    }

    fs::write(&path, CONTEXT_TEMPLATE).map_err(|e| ArchflowError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(ContextOutcome::Created)
}
