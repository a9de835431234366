//! Rule format adapters
//!
//! Three mutually exclusive strategies materialize the same payload rule
//! documents into a target tool's expected shape: copy-as-folder,
//! concatenate-to-single-file, or wrap-as-JSON-settings-reference.

use std::fs;
use std::path::Path;

use crate::common::fs::{CopyOptions, copy_dir_recursive, ensure_parent_dir};
use crate::error::{ArchflowError, Result};
use crate::platform::{RulesFormat, RulesTarget};

/// Top heading of the merged single-file output
const MERGED_HEADER: &str = "# Archflow Rules";

/// Horizontal-rule separator between merged rule documents
const MERGED_SEPARATOR: &str = "\n\n---\n\n";

/// Settings key owned by Archflow in JSON-referenced installs
const SETTINGS_KEY: &str = "archflow";

/// Fallback when the crate version is somehow unavailable
const FALLBACK_VERSION: &str = "0.0.0";

/// Materialize the payload rules into the target shape
///
/// Returns the number of rule files written or copied.
pub fn install_rules(rules_src: &Path, workspace_root: &Path, target: &RulesTarget) -> Result<usize> {
    if !rules_src.is_dir() {
        return Err(ArchflowError::SourceDirMissing {
            kind: "rules".to_string(),
            path: rules_src.display().to_string(),
        });
    }

    match target.format {
        RulesFormat::Folder => install_folder(rules_src, &workspace_root.join(&target.dest)),
        RulesFormat::SingleFile => {
            install_single_file(rules_src, &workspace_root.join(&target.dest))
        }
        RulesFormat::Json => install_json(rules_src, workspace_root, target),
    }
}

/// `folder`: recursive copy preserving structure, housekeeping entries skipped
fn install_folder(rules_src: &Path, dest: &Path) -> Result<usize> {
    copy_dir_recursive(rules_src, dest, &CopyOptions::housekeeping())
}

/// `single-file`: concatenate every markdown rule document into one file
///
/// Documents are taken in directory-iteration order as returned by the file
/// system; that order is not guaranteed alphabetical on every platform. The
/// destination is overwritten unconditionally, so re-running replaces rather
/// than appends.
fn install_single_file(rules_src: &Path, dest: &Path) -> Result<usize> {
    let mut sections = Vec::new();

    for entry in fs::read_dir(rules_src)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| ArchflowError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        sections.push(content.trim_end().to_string());
    }

    let mut merged = String::from(MERGED_HEADER);
    merged.push_str("\n\n");
    merged.push_str(&sections.join(MERGED_SEPARATOR));
    merged.push('\n');

    ensure_parent_dir(dest)?;
    fs::write(dest, merged).map_err(|e| ArchflowError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(sections.len())
}

/// `json`: copy the rules folder to its nested destination, then record it
/// in the tool's settings file under the `archflow` key
fn install_json(rules_src: &Path, workspace_root: &Path, target: &RulesTarget) -> Result<usize> {
    let copied = install_folder(rules_src, &workspace_root.join(&target.dest))?;

    let Some(settings_rel) = target.settings_file.as_deref() else {
        // Registry invariant: json targets always carry a settings file.
        return Ok(copied);
    };
    let settings_path = workspace_root.join(settings_rel);

    let mut settings = read_settings_lenient(&settings_path);
    settings[SETTINGS_KEY] = serde_json::json!({
        "enabled": true,
        "rulesPath": target.dest,
        "version": crate_version(),
    });

    let pretty = serde_json::to_string_pretty(&settings)?;
    ensure_parent_dir(&settings_path)?;
    fs::write(&settings_path, pretty + "\n").map_err(|e| ArchflowError::FileWriteFailed {
        path: settings_path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(copied)
}

/// Read an existing settings file, silently falling back to an empty object
/// when it is missing, unreadable, or not a JSON object. A corrupt local
/// dev-tool settings file is replaced, not repaired.
fn read_settings_lenient(settings_path: &Path) -> serde_json::Value {
    let Ok(content) = fs::read_to_string(settings_path) else {
        return serde_json::json!({});
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) if value.is_object() => value,
        _ => serde_json::json!({}),
    }
}

fn crate_version() -> &'static str {
    option_env!("CARGO_PKG_VERSION").unwrap_or(FALLBACK_VERSION)
}
