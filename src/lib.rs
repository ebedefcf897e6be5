//! Console logging and filesystem utilities for application servers.
//!
//! foundation-io is the small I/O layer every other component leans on for
//! diagnostics. It handles:
//!
//! - Leveled, colorized log lines (`log`, `warn`, `dev`, `err`, `debug`)
//!   and bordered key/value reports
//! - Human-readable inspection of structured values
//! - Forgiving async directory listing and file reading, plus path helpers
//!
//! Output goes through an [`OutputSink`] supplied by the application, so the
//! same code writes to stdout in production and to a capture buffer in tests.
//!
//! # Modules
//!
//! - [`mod@format`] - Pure formatting functions for lines and reports
//! - [`logging`] - OutputSink trait, [`Logger`], and the process-wide logger
//! - [`buffer`] - Per-call output accumulation
//! - [`inspect`] - Argument union and value inspection
//! - [`fs`] - Filesystem facade and text helpers
//! - [`paths`] - Lexical path helpers
//! - [`config`] - Settings shared by logger and filesystem

pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod inspect;
pub mod logging;
pub mod paths;
pub mod severity;

// Re-export commonly used types
pub use buffer::OutputBuffer;
pub use config::{ExtensionMatch, IoConfig};
pub use error::{FsError, FsResult};
pub use format::{Report, format_border, format_line, format_report};
pub use fs::{FileSystem, by_line, reduce, reduce_with};
pub use inspect::{Arg, inspect};
pub use logging::{Logger, NullSink, OutputSink, StdoutSink, install, installed, uninstall};
pub use paths::{normalize, shorten};
pub use severity::{Severity, SeverityStyle};
