//! Host platform detection

use std::fmt;

/// Operating system family of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    /// Any other host (BSDs, etc.)
    Other,
}

impl Platform {
    /// Platform the binary was compiled for
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Mac => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

pub fn is_windows() -> bool {
    Platform::current() == Platform::Windows
}

pub fn is_mac() -> bool {
    Platform::current() == Platform::Mac
}

pub fn is_linux() -> bool {
    Platform::current() == Platform::Linux
}
