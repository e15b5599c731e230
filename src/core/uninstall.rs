//! Uninstall logic
//!
//! Removes build artifacts and virtual environments from the project, then
//! uninstalls PlatformIO. Nothing happens unless the user confirms.

use std::path::Path;

use crate::cli::output::Console;
use crate::config::defaults::{ARTIFACT_PATHS, PLATFORMIO_PACKAGE};
use crate::config::Toolchain;
use crate::error::Result;
use crate::infra::filesystem::{remove_path, Removal};
use crate::infra::input::LineReader;
use crate::infra::process::{Invocation, ProcessRunner};

use super::confirm::confirm;
use super::pipeline::{run_step, Step};

/// Prompt shown before anything is deleted
pub const UNINSTALL_PROMPT: &str = "Are you sure you want to uninstall and remove build artifacts?";

/// Result of removing the artifact paths
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Paths that existed and were removed
    pub removed: Vec<String>,
    /// Paths that did not exist (skipped)
    pub skipped: Vec<String>,
}

/// Remove every path in [`ARTIFACT_PATHS`] below `project_dir`
///
/// Missing paths are skipped, so a second run succeeds with everything
/// reported as skipped.
pub fn remove_artifacts(project_dir: &Path) -> Result<RemovalReport> {
    let mut report = RemovalReport::default();

    for name in ARTIFACT_PATHS {
        let path = project_dir.join(name);
        match remove_path(&path)? {
            Removal::Absent => report.skipped.push((*name).to_string()),
            removal => {
                tracing::debug!("removed {:?} {}", removal, path.display());
                report.removed.push((*name).to_string());
            }
        }
    }

    Ok(report)
}

/// `python -m pip uninstall -y platformio`
pub fn uninstall_toolchain_step(toolchain: &Toolchain) -> Step {
    Step::new(
        "uninstall-platformio",
        Invocation::new(&toolchain.python).args(["-m", "pip", "uninstall", "-y", PLATFORMIO_PACKAGE]),
    )
    .reports("PlatformIO uninstalled.")
}

/// Run the uninstall command
///
/// Declining the prompt is a successful outcome.
pub async fn uninstall<R, I>(
    toolchain: &Toolchain,
    runner: &R,
    input: &mut I,
    console: &Console,
) -> Result<()>
where
    R: ProcessRunner,
    I: LineReader,
{
    console.header("Uninstall Script");

    if !confirm(UNINSTALL_PROMPT, input, console).await {
        console.info("Uninstall cancelled.");
        return Ok(());
    }

    let report = remove_artifacts(&toolchain.project_dir)?;
    tracing::info!(
        "removed {} artifact path(s), {} already absent",
        report.removed.len(),
        report.skipped.len()
    );
    console.success("Removed build artifacts and environments.");

    run_step(&uninstall_toolchain_step(toolchain), runner, console).await
}
