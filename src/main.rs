//! fwtool CLI - lifecycle tool for PlatformIO firmware projects
//!
//! Entry point for the fwtool command-line application.

use clap::Parser;

use fwtool::cli::output::display_error;
use fwtool::cli::Cli;
use fwtool::error::{LifecycleError, GENERIC_FAILURE};
use fwtool::infra::platform::Platform;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    tracing::debug!("fwtool {} on {}", fwtool::cli::version(), Platform::current());

    let cli = Cli::parse();

    let code = match cli.run().await {
        Ok(()) => 0,
        Err(e) => {
            display_error(&e);
            e.downcast_ref::<LifecycleError>()
                .map_or(GENERIC_FAILURE, LifecycleError::exit_code)
        }
    };

    // Exit explicitly: a cancelled stdin read would otherwise hold up runtime shutdown.
    std::process::exit(code);
}
