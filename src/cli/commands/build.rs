//! CLI command implementation for `fwtool build`

use anyhow::Result;

use crate::cli::output::Console;
use crate::config::Toolchain;
use crate::core::build::{build, BuildOptions};
use crate::infra::process::SystemRunner;

/// Execute the build command
pub async fn execute(toolchain: &Toolchain, options: &BuildOptions) -> Result<()> {
    let runner = SystemRunner::new(&toolchain.project_dir);
    build(toolchain, options, &runner, &Console::stdout()).await?;
    Ok(())
}
