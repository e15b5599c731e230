//! Build logic
//!
//! Optional clean, build, optional upload, optional serial monitor, all for
//! one PlatformIO environment and all fail-fast.

use crate::cli::output::Console;
use crate::config::defaults::DEFAULT_ENVIRONMENT;
use crate::config::Toolchain;
use crate::error::Result;
use crate::infra::process::{Invocation, ProcessRunner};

use super::pipeline::{Pipeline, Step};

/// Build options from CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// PlatformIO environment
    pub environment: String,
    /// Clean before building
    pub clean: bool,
    /// Upload after building
    pub upload: bool,
    /// Open the serial monitor last
    pub monitor: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            clean: false,
            upload: false,
            monitor: false,
        }
    }
}

fn pio_run(toolchain: &Toolchain, environment: &str) -> Invocation {
    Invocation::new(&toolchain.pio).args(["run", "-e", environment])
}

/// Assemble the steps requested by `options`
pub fn build_pipeline(toolchain: &Toolchain, options: &BuildOptions) -> Pipeline {
    let env = options.environment.as_str();

    Pipeline::new()
        .step_if(
            options.clean,
            Step::new("clean", pio_run(toolchain, env).args(["-t", "clean"]))
                .reports("Cleaned build files."),
        )
        .step(
            Step::new("build", pio_run(toolchain, env))
                .reports(format!("Built for environment: {env}")),
        )
        .step_if(
            options.upload,
            Step::new("upload", pio_run(toolchain, env).args(["-t", "upload"]))
                .reports("Uploaded to device."),
        )
        // Interactive; blocks until the user quits the monitor.
        .step_if(
            options.monitor,
            Step::new(
                "monitor",
                Invocation::new(&toolchain.pio).args(["device", "monitor", "-e", env]),
            ),
        )
}

/// Run the build command
pub async fn build<R: ProcessRunner>(
    toolchain: &Toolchain,
    options: &BuildOptions,
    runner: &R,
    console: &Console,
) -> Result<()> {
    console.header("Build Script");
    tracing::debug!("build options: {options:?}");
    build_pipeline(toolchain, options).run(runner, console).await
}
