//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no lifecycle logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use crate::config::{defaults, Toolchain};
use commands::Commands;

/// Version reported by `--version`: package version, git sha and target triple
///
/// Falls back to `unknown` for values the build script could not determine.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        format!(
            "{} ({}, {})",
            env!("CARGO_PKG_VERSION"),
            option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
            option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown"),
        )
    })
}

/// fwtool - lifecycle tool for PlatformIO firmware projects
///
/// Installs prerequisites, builds, tests, and uninstalls the project.
#[derive(Parser, Debug)]
#[command(name = "fwtool")]
#[command(author, version = version(), about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, env = "FWTOOL_PROJECT_DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(flatten)]
    pub tools: ToolArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the external executables
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// PlatformIO executable
    #[arg(long, env = "FWTOOL_PIO", default_value = defaults::PIO, global = true)]
    pub pio: String,

    /// Python interpreter used to run pip
    #[arg(long, env = "FWTOOL_PYTHON", default_value = defaults::PYTHON, global = true)]
    pub python: String,

    /// pip executable required by `install`
    #[arg(long, env = "FWTOOL_PIP", default_value = defaults::PIP, global = true)]
    pub pip: String,
}

impl Cli {
    /// Resolve the toolchain and project root for this invocation
    pub fn toolchain(&self) -> Result<Toolchain> {
        let project_dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        Ok(Toolchain {
            pio: self.tools.pio.clone(),
            python: self.tools.python.clone(),
            pip: self.tools.pip.clone(),
            project_dir,
        })
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let toolchain = self.toolchain()?;
        self.command.run(&toolchain).await
    }
}
