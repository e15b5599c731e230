//! Fail-fast step pipeline
//!
//! A lifecycle command is a sequence of [`Step`]s. Steps run in order; the
//! first non-zero exit status stops the pipeline and becomes the error.

use crate::cli::output::Console;
use crate::error::{LifecycleError, Result};
use crate::infra::process::{Invocation, ProcessRunner};

/// A named subprocess call with an optional success report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Short name identifying the step in failures
    pub name: String,
    pub invocation: Invocation,
    /// Printed after a zero exit; `None` for steps that report nothing
    pub success_message: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>, invocation: Invocation) -> Self {
        Self {
            name: name.into(),
            invocation,
            success_message: None,
        }
    }

    #[must_use]
    pub fn reports(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

/// Ordered list of steps run with fail-fast semantics
#[derive(Debug, Default, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append `step` only when `enabled`
    #[must_use]
    pub fn step_if(self, enabled: bool, step: Step) -> Self {
        if enabled {
            self.step(step)
        } else {
            self
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failure
    pub async fn run<R: ProcessRunner>(&self, runner: &R, console: &Console) -> Result<()> {
        for step in &self.steps {
            run_step(step, runner, console).await?;
        }
        Ok(())
    }
}

/// Run a single step, reporting success or returning its failure
pub async fn run_step<R: ProcessRunner>(step: &Step, runner: &R, console: &Console) -> Result<()> {
    let code = runner.run(&step.invocation).await?;
    if code != 0 {
        tracing::debug!("step '{}' failed with {code}", step.name);
        return Err(LifecycleError::StepFailed {
            step: step.name.clone(),
            code,
        });
    }

    tracing::info!("step '{}' completed", step.name);
    if let Some(message) = &step.success_message {
        console.success(message);
    }
    Ok(())
}
