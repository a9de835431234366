//! Platform detection for finding configured AI tools in a workspace

use std::path::Path;

use super::{ToolProfile, registry::ToolRegistry};

/// Detect the configured tool in the workspace
///
/// Walks the registry in definition order and returns the first profile with
/// at least one existing marker path. Registry order is the tie-break when a
/// workspace carries markers for several tools.
pub fn detect_tool<'a>(registry: &'a ToolRegistry, workspace_root: &Path) -> Option<&'a ToolProfile> {
    registry
        .all()
        .iter()
        .find(|profile| profile.is_detected(workspace_root))
}
