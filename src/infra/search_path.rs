//! Executable lookup on the search path
//!
//! Tools are only located, never executed.

/// Capability to decide whether a tool is available
pub trait ToolLocator {
    /// Returns true if `name` resolves to a runnable file
    fn exists(&self, name: &str) -> bool;
}

/// Locator backed by the process `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchPath;

impl ToolLocator for SearchPath {
    fn exists(&self, name: &str) -> bool {
        command_exists(name)
    }
}

/// Check whether `name` resolves on `PATH`
///
/// Names containing a path separator are checked as paths.
pub fn command_exists(name: &str) -> bool {
    let found = which::which(name);
    tracing::debug!("lookup {name}: {:?}", found.as_ref().ok());
    found.is_ok()
}
