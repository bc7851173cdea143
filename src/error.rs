//! Error handling module for fossify
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Command-level errors (timeouts, non-zero exits) never abort a run: the
//! device channel turns them into a failed result for the affected package.

use std::time::Duration;
use thiserror::Error;

/// Exit status reported when the user cancels a run (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Main error type for fossify
#[derive(Error, Debug)]
pub enum FossifyError {
    /// No device reachable over adb
    #[error("No ADB device connected")]
    ConnectionAbsent,

    /// Unrecognised mode flag on the command line
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// The user cancelled at the confirmation prompt or with a signal
    #[error("Operation cancelled by user")]
    Interrupted,

    /// A device command exceeded its time budget
    #[error("Command `{command}` timed out after {timeout:?}")]
    CommandTimeout { command: String, timeout: Duration },

    /// A device command exited unsuccessfully
    #[error("Command `{command}` failed (exit code {code}): {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// A device command could not be started at all
    #[error("Failed to spawn `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (report files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fossify operations
pub type Result<T> = std::result::Result<T, FossifyError>;

impl FossifyError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a command failure error
    pub fn command_failed(command: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => 1,
        }
    }
}
