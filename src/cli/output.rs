//! Output formatting
//!
//! Banners and level-tagged status lines. The free functions print to
//! stdout; [`Console`] carries its own writer so commands can be pointed at
//! a buffer in tests.

use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

/// Width of the `=` rules around a header
const HEADER_WIDTH: usize = 40;

/// Status message tags
pub mod status {
    pub const SUCCESS: &str = "[SUCCESS]";
    pub const ERROR: &str = "[ERROR]";
    pub const INFO: &str = "[INFO]";
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

/// Format a header banner (leading blank line, rule, title, rule)
pub fn format_header(title: &str) -> String {
    let rule = "=".repeat(HEADER_WIDTH);
    format!("\n{rule}\n{title}\n{rule}")
}

/// Returns true if status tags written to `stream` should be coloured
///
/// A non-empty `NO_COLOR` or a stream that is not a terminal disables colour.
pub fn color_enabled(stream: &impl IsTerminal) -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !no_color && stream.is_terminal()
}

/// Format a status line, colouring the level tag when `color` is set
pub fn format_status(level: Level, msg: &str, color: bool) -> String {
    let tag = match level {
        Level::Success => status::SUCCESS,
        Level::Error => status::ERROR,
        Level::Info => status::INFO,
    };
    if !color {
        return format!("{tag} {msg}");
    }

    let styled = match level {
        Level::Success => tag.green(),
        Level::Error => tag.red(),
        Level::Info => tag.blue(),
    };
    format!("{styled} {msg}")
}

/// Print a header banner to stdout
pub fn print_header(title: &str) {
    Console::stdout().header(title);
}

/// Print a `[SUCCESS]` line to stdout
pub fn print_success(msg: &str) {
    Console::stdout().success(msg);
}

/// Print an `[ERROR]` line to stdout
pub fn print_error(msg: &str) {
    Console::stdout().error(msg);
}

/// Print an `[INFO]` line to stdout
pub fn print_info(msg: &str) {
    Console::stdout().info(msg);
}

/// Display an error at the CLI boundary, including its cause chain
pub fn display_error(error: &anyhow::Error) {
    let mut message = error.to_string();
    for cause in error.chain().skip(1) {
        message.push_str(&format!(": {cause}"));
    }
    let color = color_enabled(&io::stderr());
    eprintln!("{}", format_status(Level::Error, &message, color));
}

/// Destination for user-facing status output
///
/// Write failures are ignored; status output has no failure mode.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

impl Console {
    /// Console writing to standard output, coloured when it is a terminal
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let color = color_enabled(&stdout);
        Self {
            out: Mutex::new(Box::new(stdout)),
            color,
        }
    }

    /// Console writing to an arbitrary sink, without colour
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            color: false,
        }
    }

    pub fn header(&self, title: &str) {
        self.line(&format_header(title));
    }

    pub fn success(&self, msg: &str) {
        self.line(&format_status(Level::Success, msg, self.color));
    }

    pub fn error(&self, msg: &str) {
        self.line(&format_status(Level::Error, msg, self.color));
    }

    pub fn info(&self, msg: &str) {
        self.line(&format_status(Level::Info, msg, self.color));
    }

    /// Write text without a newline and flush, for prompts
    pub fn prompt(&self, text: &str) {
        self.write(text, false);
    }

    /// Write an empty line
    pub fn newline(&self) {
        self.write("", true);
    }

    fn line(&self, text: &str) {
        self.write(text, true);
    }

    fn write(&self, text: &str, newline: bool) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let _ = out.write_all(text.as_bytes());
        if newline {
            let _ = out.write_all(b"\n");
        }
        let _ = out.flush();
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}
