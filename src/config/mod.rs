//! Configuration and constants
//!
//! There is no configuration file. Defaults live in [`defaults`]; the only
//! runtime overrides are the toolchain executables and the project root,
//! supplied through CLI flags or environment variables.

pub mod defaults;

use std::path::PathBuf;

/// Resolved toolchain executables and project root for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// PlatformIO executable
    pub pio: String,
    /// Python interpreter used for `-m pip`
    pub python: String,
    /// pip executable (checked for presence only)
    pub pip: String,
    /// Directory subprocesses run in and artifacts are removed from
    pub project_dir: PathBuf,
}

impl Toolchain {
    /// Create a toolchain rooted at `project_dir` with the default executables
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            pio: defaults::PIO.to_string(),
            python: defaults::PYTHON.to_string(),
            pip: defaults::PIP.to_string(),
            project_dir: project_dir.into(),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(".")
    }
}
