//! Infrastructure layer
//!
//! Handles all I/O operations: the search path, external processes,
//! terminal input, and the filesystem.
//! This module is the only place where side effects occur.

pub mod filesystem;
pub mod input;
pub mod platform;
pub mod process;
pub mod search_path;
