//! Default configuration values

/// Default PlatformIO environment for builds and dependency installation
pub const DEFAULT_ENVIRONMENT: &str = "esp32dev";

/// Environment used for host-side unit tests
pub const NATIVE_ENVIRONMENT: &str = "native";

/// PlatformIO command-line executable
pub const PIO: &str = "pio";

/// Python interpreter used to run pip
pub const PYTHON: &str = "python3";

/// pip executable checked as an install prerequisite
pub const PIP: &str = "pip3";

/// Package name of the toolchain on PyPI
pub const PLATFORMIO_PACKAGE: &str = "platformio";

/// Artifact paths removed by `fwtool uninstall`, relative to the project root
pub const ARTIFACT_PATHS: &[&str] = &[".pio", ".venv", "__pycache__", "build", "dist"];
