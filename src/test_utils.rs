//! Test utilities
//!
//! Fakes for the process runner, tool locator and line reader, plus
//! proptest generators.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::infra::input::{LineReader, ReadOutcome};
use crate::infra::process::{Invocation, ProcessRunner};
use crate::infra::search_path::ToolLocator;

/// Writer whose contents can be inspected after the fact
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runner that records invocations and returns scripted exit codes
///
/// Exit codes are keyed by the rendered command line; anything unscripted
/// exits 0.
#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    codes: HashMap<String, i32>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the invocation rendering as `command_line` exit with `code`
    pub fn fail(mut self, command_line: &str, code: i32) -> Self {
        self.codes.insert(command_line.to_string(), code);
        self
    }

    /// Rendered command lines, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> Result<i32> {
        let line = invocation.to_string();
        self.calls.borrow_mut().push(invocation.clone());
        Ok(self.codes.get(&line).copied().unwrap_or(0))
    }
}

/// Locator answering from a fixed set of tool names
#[derive(Default)]
pub struct FakeLocator {
    present: HashSet<String>,
}

impl FakeLocator {
    pub fn with(tools: &[&str]) -> Self {
        Self {
            present: tools.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ToolLocator for FakeLocator {
    fn exists(&self, name: &str) -> bool {
        self.present.contains(name)
    }
}

/// Reader replaying scripted outcomes, then reporting end of input
#[derive(Default)]
pub struct ScriptedInput {
    outcomes: VecDeque<ReadOutcome>,
}

impl ScriptedInput {
    pub fn lines(lines: &[&str]) -> Self {
        Self {
            outcomes: lines
                .iter()
                .map(|line| ReadOutcome::Line((*line).to_string()))
                .collect(),
        }
    }

    pub fn interrupted() -> Self {
        Self {
            outcomes: VecDeque::from([ReadOutcome::Interrupted]),
        }
    }
}

impl LineReader for ScriptedInput {
    async fn read_line(&mut self) -> std::io::Result<ReadOutcome> {
        Ok(self.outcomes.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

pub mod generators {
    use proptest::prelude::*;

    /// Generate a PlatformIO environment name
    pub fn environment_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,20}"
    }

    /// Generate a response that is not an acceptance
    pub fn declining_response() -> impl Strategy<Value = String> {
        ".{0,12}".prop_filter("must not accept", |s| s.trim().to_lowercase() != "y")
    }
}
