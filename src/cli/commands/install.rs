//! CLI command implementation for `fwtool install`

use anyhow::Result;

use crate::cli::output::Console;
use crate::config::Toolchain;
use crate::core::install::install;
use crate::infra::process::SystemRunner;
use crate::infra::search_path::SearchPath;

/// Execute the install command
pub async fn execute(toolchain: &Toolchain) -> Result<()> {
    let runner = SystemRunner::new(&toolchain.project_dir);
    install(toolchain, &runner, &SearchPath, &Console::stdout()).await?;
    Ok(())
}
