//! Subprocess execution
//!
//! Every toolchain call goes through a [`ProcessRunner`]. The system runner
//! forwards stdio to the terminal and waits for the child to exit.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use crate::error::{LifecycleError, Result, GENERIC_FAILURE};

/// One subprocess call: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add a single argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Capability to execute an invocation and wait for its exit status
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `invocation` to completion and return its exit status
    ///
    /// Only failure to spawn is an `Err`; a non-zero exit is a normal return.
    async fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Runner that spawns real processes in the project directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<i32> {
        tracing::debug!("running `{invocation}` in {}", self.working_dir.display());

        let status = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| LifecycleError::Launch {
                program: invocation.program.clone(),
                error: e.to_string(),
            })?;

        let code = exit_code(status);
        tracing::debug!("`{invocation}` exited with {code}");
        Ok(code)
    }
}

/// Map an exit status onto a process exit code
///
/// Children killed by a signal report `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    GENERIC_FAILURE
}
