//! Install logic
//!
//! Checks that Python and pip are present, installs PlatformIO through pip
//! when `pio` is not on the search path, then lets PlatformIO fetch the
//! project's dependencies for the default environment.

use crate::cli::output::Console;
use crate::config::defaults::{DEFAULT_ENVIRONMENT, PLATFORMIO_PACKAGE};
use crate::config::Toolchain;
use crate::error::{LifecycleError, Result};
use crate::infra::process::{Invocation, ProcessRunner};
use crate::infra::search_path::ToolLocator;

use super::pipeline::{run_step, Step};

/// `python -m pip install --user platformio`
pub fn install_toolchain_step(toolchain: &Toolchain) -> Step {
    Step::new(
        "install-platformio",
        Invocation::new(&toolchain.python).args(["-m", "pip", "install", "--user", PLATFORMIO_PACKAGE]),
    )
    .reports("PlatformIO installed.")
}

/// `pio run -e esp32dev`
pub fn fetch_dependencies_step(toolchain: &Toolchain) -> Step {
    Step::new(
        "install-dependencies",
        Invocation::new(&toolchain.pio).args(["run", "-e", DEFAULT_ENVIRONMENT]),
    )
    .reports("Project dependencies installed.")
}

/// Fail with [`LifecycleError::MissingPrerequisite`] unless `tool` resolves
fn require<L: ToolLocator>(locator: &L, tool: &str) -> Result<()> {
    if locator.exists(tool) {
        Ok(())
    } else {
        Err(LifecycleError::MissingPrerequisite {
            tool: tool.to_string(),
        })
    }
}

/// Run the install command
///
/// An existing `pio` is accepted as-is; its version is not checked.
pub async fn install<R, L>(
    toolchain: &Toolchain,
    runner: &R,
    locator: &L,
    console: &Console,
) -> Result<()>
where
    R: ProcessRunner,
    L: ToolLocator,
{
    console.header("Install Script");

    require(locator, &toolchain.python)?;
    require(locator, &toolchain.pip)?;

    if locator.exists(&toolchain.pio) {
        console.success("PlatformIO already installed.");
    } else {
        tracing::info!("{} not found, installing {PLATFORMIO_PACKAGE}", toolchain.pio);
        run_step(&install_toolchain_step(toolchain), runner, console).await?;
    }

    run_step(&fetch_dependencies_step(toolchain), runner, console).await
}
