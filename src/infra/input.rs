//! Interactive line input
//!
//! The confirmation prompt reads through a [`LineReader`] so that tests can
//! script responses and interrupts without a terminal.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Result of reading one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line was read (without its terminator)
    Line(String),
    /// The user interrupted the read (Ctrl-C)
    Interrupted,
    /// Input is closed
    Eof,
}

/// Capability to read a single line of user input
#[allow(async_fn_in_trait)]
pub trait LineReader {
    async fn read_line(&mut self) -> std::io::Result<ReadOutcome>;
}

/// Ctrl-C listener, installed when created
struct Interrupt {
    #[cfg(unix)]
    signal: Signal,
}

impl Interrupt {
    fn install() -> std::io::Result<Self> {
        Ok(Self {
            #[cfg(unix)]
            signal: signal(SignalKind::interrupt())?,
        })
    }

    #[cfg(unix)]
    async fn wait(&mut self) -> std::io::Result<()> {
        self.signal.recv().await;
        Ok(())
    }

    #[cfg(not(unix))]
    #[allow(clippy::unused_self)]
    async fn wait(&mut self) -> std::io::Result<()> {
        tokio::signal::ctrl_c().await
    }
}

/// Reads from standard input, resolving Ctrl-C to [`ReadOutcome::Interrupted`]
///
/// The interrupt handler is installed on construction, so a Ctrl-C that
/// arrives between printing the prompt and the first read is still caught.
pub struct StdinReader {
    lines: Lines<BufReader<Stdin>>,
    interrupt: Interrupt,
}

impl StdinReader {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            interrupt: Interrupt::install()?,
        })
    }
}

impl LineReader for StdinReader {
    async fn read_line(&mut self) -> std::io::Result<ReadOutcome> {
        tokio::select! {
            line = self.lines.next_line() => Ok(match line? {
                Some(line) => ReadOutcome::Line(line),
                None => ReadOutcome::Eof,
            }),
            signal = self.interrupt.wait() => {
                signal?;
                tracing::debug!("confirmation read interrupted");
                Ok(ReadOutcome::Interrupted)
            }
        }
    }
}
