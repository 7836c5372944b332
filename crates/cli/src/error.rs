//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: synthesis error (bad dimensions)
//! - 11: I/O error (file write, PNG encode)
//! - 12: input error (bad hex color, bad recipe JSON)
//! - 13: serialization error

use spritegen_core::SpriteError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A synthesis-level error (invalid dimensions).
    Synth(SpriteError),
    /// An I/O error (file write, PNG encode).
    Io(String),
    /// A user input error (bad color, bad recipe file).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Synth(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Synth(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<SpriteError> for CliError {
    fn from(e: SpriteError) -> Self {
        match e {
            SpriteError::Io(msg) => CliError::Io(msg),
            SpriteError::InvalidColor(msg) => CliError::Input(msg),
            other => CliError::Synth(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
