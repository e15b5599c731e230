//! fwtool - lifecycle tool for PlatformIO firmware projects
//!
//! Installs prerequisites, builds, tests and uninstalls an ESP32 firmware
//! project by driving PlatformIO and pip as subprocesses.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Lifecycle commands, the fail-fast pipeline and confirmation
//! - [`infra`] - Infrastructure layer (processes, search path, input, filesystem)
//! - [`config`] - Defaults and toolchain overrides
//! - [`error`] - Error types and exit status mapping

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
