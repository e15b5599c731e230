//! Error types for fwtool
//!
//! Domain-specific error types using thiserror. Every variant maps onto a
//! process exit status through [`LifecycleError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for failures that did not come from a subprocess
pub const GENERIC_FAILURE: i32 = 1;

/// Errors raised by the lifecycle commands
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// A required tool is not on the search path
    #[error("{tool} is required.")]
    MissingPrerequisite { tool: String },

    /// A subprocess exited with a non-zero status
    #[error("Step '{step}' failed with exit status {code}")]
    StepFailed { step: String, code: i32 },

    /// A subprocess could not be spawned at all
    #[error("Failed to execute '{program}'. Is it installed? ({error})")]
    Launch { program: String, error: String },

    /// An artifact path could not be removed
    #[error("Failed to remove '{path}': {error}")]
    RemovePath { path: PathBuf, error: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifecycleError {
    /// Process exit status for this error
    ///
    /// Subprocess failures propagate the child's own status; everything
    /// else exits with [`GENERIC_FAILURE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StepFailed { code, .. } => *code,
            Self::MissingPrerequisite { .. }
            | Self::Launch { .. }
            | Self::RemovePath { .. }
            | Self::Io(_) => GENERIC_FAILURE,
        }
    }
}

/// Convenience alias for lifecycle results
pub type Result<T, E = LifecycleError> = std::result::Result<T, E>;
