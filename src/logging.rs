//! Leveled logging to an output sink.
//!
//! A [`Logger`] owns a shared [`OutputSink`] and the debugging flag from an
//! [`IoConfig`]. Each call renders its arguments into a fresh buffer and
//! writes exactly one line (or, for [`Logger::report`], one block) to the
//! sink. A call with no arguments writes nothing. Nothing is returned to the
//! caller.
//!
//! Components receive a `Logger` by injection. For code that cannot thread a
//! logger through, one can be installed process-wide with [`install`] and
//! reached through the free functions [`log`], [`warn`], [`dev`], [`err`],
//! [`debug`] and [`report`], which do nothing while no logger is installed.
//!
//! # Usage
//!
//! ```no_run
//! use foundation_io::{IoConfig, Logger, StdoutSink, args};
//! use std::sync::Arc;
//!
//! let logger = Logger::new(Arc::new(StdoutSink), &IoConfig::from_env());
//!
//! logger.log(args!["listening on", 8080]);
//! logger.warn(["cache directory missing"]);
//! ```

use std::sync::{Arc, RwLock};

use crate::config::IoConfig;
use crate::format::{Report, format_line, format_report};
use crate::inspect::Arg;
use crate::severity::Severity;

// ============================================================================
// Sinks
// ============================================================================

/// Trait for output sinks that receive rendered log output.
///
/// # Methods
///
/// * `emit` - For complete blocks that should have visual separation (trailing blank line)
/// * `emit_line` - For single log lines
pub trait OutputSink: Send + Sync {
    /// Emit a complete block with trailing blank line for visual separation.
    fn emit(&self, message: &str);
    /// Emit a single line.
    fn emit_line(&self, message: &str);
}

/// Sink writing to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, message: &str) {
        println!("{}\n", message);
    }

    fn emit_line(&self, message: &str) {
        println!("{}", message);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&self, _message: &str) {}
    fn emit_line(&self, _message: &str) {}
}

// ============================================================================
// Logger
// ============================================================================

/// Severity-tagged logging entry points writing to one sink.
///
/// Cloning is cheap; clones share the sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn OutputSink>,
    debugging: bool,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("debugging", &self.debugging)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a logger writing to `sink`, configured from `config`.
    pub fn new(sink: Arc<dyn OutputSink>, config: &IoConfig) -> Self {
        Self {
            sink,
            debugging: config.debugging,
        }
    }

    /// Whether `debug` output is emitted.
    pub fn is_debugging(&self) -> bool {
        self.debugging
    }

    /// General operational output.
    pub fn log<I, A>(&self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.write(Severity::Log, args);
    }

    /// Something unexpected that was recovered from.
    pub fn warn<I, A>(&self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.write(Severity::Warn, args);
    }

    /// Developer-facing output.
    pub fn dev<I, A>(&self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.write(Severity::Dev, args);
    }

    /// Failures.
    pub fn err<I, A>(&self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.write(Severity::Error, args);
    }

    /// Inspection output; dropped entirely unless debugging is enabled.
    pub fn debug<I, A>(&self, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        if !self.debugging {
            return;
        }
        self.write(Severity::Debug, args);
    }

    /// Write a bordered key/value block.
    pub fn report(&self, report: &Report) {
        self.sink.emit(&format_report(report));
    }

    /// Write one line at `severity`. A call with no arguments writes nothing.
    /// Debug gating is the caller's concern.
    pub fn write<I, A>(&self, severity: Severity, args: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return;
        }
        self.sink.emit_line(&format_line(severity, &args));
    }
}

// ============================================================================
// Process-wide Logger
// ============================================================================

static INSTALLED: RwLock<Option<Logger>> = RwLock::new(None);

/// Install the process-wide logger. Replaces any previous one.
pub fn install(logger: Logger) {
    if let Ok(mut guard) = INSTALLED.write() {
        *guard = Some(logger);
    }
}

/// The installed logger, if any.
pub fn installed() -> Option<Logger> {
    INSTALLED.read().ok().and_then(|guard| guard.clone())
}

/// Remove the installed logger.
pub fn uninstall() {
    if let Ok(mut guard) = INSTALLED.write() {
        *guard = None;
    }
}

pub fn log<I, A>(args: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    if let Some(logger) = installed() {
        logger.log(args);
    }
}

pub fn warn<I, A>(args: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    if let Some(logger) = installed() {
        logger.warn(args);
    }
}

pub fn dev<I, A>(args: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    if let Some(logger) = installed() {
        logger.dev(args);
    }
}

pub fn err<I, A>(args: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    if let Some(logger) = installed() {
        logger.err(args);
    }
}

pub fn debug<I, A>(args: I)
where
    I: IntoIterator<Item = A>,
    A: Into<Arg>,
{
    if let Some(logger) = installed() {
        logger.debug(args);
    }
}

pub fn report(report: &Report) {
    if let Some(logger) = installed() {
        logger.report(report);
    }
}
