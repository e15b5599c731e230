//! Lifecycle command logic
//!
//! Each command is a short composition of the shared pieces: the fail-fast
//! [`pipeline`], the [`confirm`] prompt, and the process/locator/input
//! capabilities from [`crate::infra`]. Commands never call each other.

pub mod build;
pub mod confirm;
pub mod install;
pub mod pipeline;
pub mod uninstall;
