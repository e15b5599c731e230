//! CLI command implementation for `fwtool uninstall`
//!
//! Prompts on standard input; Ctrl-C at the prompt cancels.

use anyhow::Result;

use crate::cli::output::Console;
use crate::config::Toolchain;
use crate::core::uninstall::uninstall;
use crate::infra::input::StdinReader;
use crate::infra::process::SystemRunner;

/// Execute the uninstall command
pub async fn execute(toolchain: &Toolchain) -> Result<()> {
    let runner = SystemRunner::new(&toolchain.project_dir);
    let mut input = StdinReader::new()?;
    uninstall(toolchain, &runner, &mut input, &Console::stdout()).await?;
    Ok(())
}
