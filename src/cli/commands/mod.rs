//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod install;
pub mod uninstall;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults::DEFAULT_ENVIRONMENT;
use crate::config::Toolchain;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check prerequisites, install PlatformIO and fetch project dependencies
    Install,

    /// Build the firmware
    Build {
        /// PlatformIO environment
        #[arg(short, long, env = "FWTOOL_ENV", default_value = DEFAULT_ENVIRONMENT)]
        env: String,

        /// Clean build files first
        #[arg(long)]
        clean: bool,

        /// Upload to the device after building
        #[arg(long)]
        upload: bool,

        /// Open the serial monitor after building
        #[arg(long)]
        monitor: bool,
    },

    /// Run unit tests in the native environment
    Test {
        /// Only run the named test suite
        #[arg(short, long)]
        filter: Option<String>,

        /// Verbose test output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Remove build artifacts and uninstall PlatformIO
    Uninstall,
}

impl Commands {
    /// Execute the command
    pub async fn run(self, toolchain: &Toolchain) -> Result<()> {
        match self {
            Self::Install => install::execute(toolchain).await,
            Self::Build {
                env,
                clean,
                upload,
                monitor,
            } => {
                let options = crate::core::build::BuildOptions {
                    environment: env,
                    clean,
                    upload,
                    monitor,
                };
                build::execute(toolchain, &options).await
            }
            Self::Test { filter, verbose } => {
                let options = crate::core::test::TestOptions { filter, verbose };
                test::execute(toolchain, &options).await
            }
            Self::Uninstall => uninstall::execute(toolchain).await,
        }
    }
}
