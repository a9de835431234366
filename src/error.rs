//! Error types and handling for archflow-init
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArchflowError {
    // Payload errors
    #[error("Archflow payload not found (looked in: {searched})")]
    #[diagnostic(
        code(archflow::payload::not_found),
        help(
            "The installer expects the Archflow skills/rules payload next to the binary. Set ARCHFLOW_HOME to the payload directory to override."
        )
    )]
    PayloadNotFound { searched: String },

    #[error("Required source directory missing: {path} ({kind})")]
    #[diagnostic(
        code(archflow::payload::dir_missing),
        help("The Archflow payload is incomplete. Reinstall the archflow package.")
    )]
    SourceDirMissing { kind: String, path: String },

    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(archflow::platform::not_supported),
        help("Supported platforms: cursor, claude, windsurf, gemini, copilot")
    )]
    PlatformNotSupported { platform: String },

    // External CLI errors
    #[error("External tool '{program}' is not available")]
    #[diagnostic(
        code(archflow::cli::unavailable),
        help("Install the tool, or run the listed commands manually once it is on your PATH.")
    )]
    CliUnavailable { program: String },

    #[error("Command failed: {program} {command}")]
    #[diagnostic(
        code(archflow::cli::command_failed),
        help("Fix the reported problem, then run the remaining commands manually.")
    )]
    CliCommandFailed { program: String, command: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(archflow::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(archflow::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {src} to {dst}")]
    #[diagnostic(code(archflow::fs::copy_failed))]
    CopyFailed {
        src: String,
        dst: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(archflow::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to generate configuration: {reason}")]
    #[diagnostic(code(archflow::config::generate_failed))]
    ConfigGenerateFailed { reason: String },
}

impl From<std::io::Error> for ArchflowError {
    fn from(err: std::io::Error) -> Self {
        ArchflowError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ArchflowError {
    fn from(err: serde_yaml::Error) -> Self {
        ArchflowError::ConfigGenerateFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArchflowError {
    fn from(err: serde_json::Error) -> Self {
        ArchflowError::ConfigGenerateFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArchflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchflowError::PlatformNotSupported {
            platform: "emacs".to_string(),
        };
        assert_eq!(err.to_string(), "Platform not supported: emacs");
    }

    #[test]
    fn test_error_code() {
        let err = ArchflowError::CliUnavailable {
            program: "claude".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("archflow::cli::unavailable".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchflowError = io_err.into();
        assert!(matches!(err, ArchflowError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let err: ArchflowError = parse_result.unwrap_err().into();
        assert!(matches!(err, ArchflowError::ConfigGenerateFailed { .. }));
    }

    #[test]
    fn test_source_dir_missing_mentions_paths() {
        let err = ArchflowError::SourceDirMissing {
            kind: "skills".to_string(),
            path: "/opt/archflow/skills".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/archflow/skills"));
        assert!(msg.contains("skills"));
    }

    #[test]
    fn test_cli_command_failed_display() {
        let err = ArchflowError::CliCommandFailed {
            program: "claude".to_string(),
            command: "plugin install archflow@archflow".to_string(),
        };
        assert!(err.to_string().contains("plugin install"));
    }
}
