//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{ArchflowError, Result};

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Exclusion set for housekeeping entries that never belong in an install
    pub fn housekeeping() -> Self {
        Self {
            exclude: vec![
                ".git".to_string(),
                ".gitkeep".to_string(),
                ".DS_Store".to_string(),
            ],
        }
    }
}

/// Copy a directory recursively with options, returning the number of files copied
///
/// Excluded entry names are skipped at every level. Intermediate directories
/// are created as needed. An existing but empty (or fully excluded) source
/// directory copies zero files and is still success; only a missing source
/// directory is an error, raised by callers before reaching here.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2, options: &CopyOptions) -> Result<usize>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    let mut copied = 0;

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if options
            .exclude
            .iter()
            .any(|excluded| file_name.to_str() == Some(excluded.as_str()))
        {
            continue;
        }

        let dst_path = dst_ref.join(&file_name);

        if entry_path.is_dir() {
            copied += copy_dir_recursive(&entry_path, &dst_path, options)?;
        } else {
            fs::copy(&entry_path, &dst_path).map_err(|e| ArchflowError::CopyFailed {
                src: entry_path.display().to_string(),
                dst: dst_path.display().to_string(),
                reason: e.to_string(),
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Create the parent directory of a path if it does not exist
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ArchflowError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
