//! Common test utilities and helpers
//!
//! Integration tests run the real `fwtool` binary against fake `pio` and
//! `python3` shell scripts that log their arguments and exit with scripted
//! statuses.

#![allow(dead_code)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Test project context
///
/// Holds a temporary project directory and a separate directory of fake
/// tools, so removing project artifacts never touches the fakes.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory containing fake tool scripts
    pub tools: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            tools: TempDir::new().expect("Failed to create tools directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        self.dir
            .child(name)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        self.dir
            .child(name)
            .create_dir_all()
            .expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Install a fake tool that logs its arguments
    ///
    /// `failures` maps an exact argument string to the exit status the
    /// tool returns for it; everything else exits 0.
    pub fn fake_tool(&self, name: &str, failures: &[(&str, i32)]) -> PathBuf {
        let path = self.tools.path().join(name);
        let log = self.log_path();

        let mut script = format!(
            "#!/bin/sh\necho \"{name} $*\" >> \"{}\"\ncase \"$*\" in\n",
            log.display()
        );
        for (args, code) in failures {
            script.push_str(&format!("  \"{args}\") exit {code} ;;\n"));
        }
        script.push_str("esac\nexit 0\n");

        std::fs::write(&path, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
        path
    }

    /// Path of a tool that does not exist
    pub fn missing_tool(&self, name: &str) -> PathBuf {
        self.tools.path().join("missing").join(name)
    }

    /// Lines logged by the fake tools, in call order
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Command for the fwtool binary, pointed at this project and the
    /// default fakes (`pio`, `python3`, `pip3`)
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fwtool"));
        cmd.current_dir(self.path())
            .env_remove("FWTOOL_PROJECT_DIR")
            .env_remove("FWTOOL_ENV")
            .env("NO_COLOR", "1")
            .env("FWTOOL_PIO", self.tools.path().join("pio"))
            .env("FWTOOL_PYTHON", self.tools.path().join("python3"))
            .env("FWTOOL_PIP", self.tools.path().join("pip3"));
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run fwtool with `args` and no stdin
pub fn run_fwtool(cmd: &mut Command, args: &[&str]) -> Output {
    cmd.args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute fwtool")
}

/// Run fwtool with `args`, feeding `input` on stdin
pub fn run_fwtool_with_input(cmd: &mut Command, args: &[&str], input: &str) -> Output {
    let mut child = cmd
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fwtool");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for fwtool")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Populate `root` with every uninstall artifact plus unrelated project files
pub fn create_artifacts(root: &Path) {
    std::fs::create_dir_all(root.join(".pio/build/esp32dev")).unwrap();
    std::fs::write(root.join(".pio/build/esp32dev/firmware.bin"), "bin").unwrap();
    std::fs::create_dir_all(root.join(".venv/lib")).unwrap();
    std::fs::create_dir_all(root.join("__pycache__")).unwrap();
    std::fs::write(root.join("__pycache__/shared.cpython-312.pyc"), "pyc").unwrap();
    std::fs::create_dir_all(root.join("build")).unwrap();
    std::fs::write(root.join("dist"), "stray file").unwrap();
}

/// Sample PlatformIO project configuration
pub const SAMPLE_PLATFORMIO_INI: &str = r"
[env:esp32dev]
platform = espressif32
board = esp32dev
framework = arduino

[env:native]
platform = native
";
