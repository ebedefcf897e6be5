//! Shared test helpers for foundation-io tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use foundation_io::{IoConfig, Logger, OutputSink};
use std::sync::{Arc, Mutex};

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// This allows tests to verify text content without being affected by
/// color codes or other terminal formatting.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// RAII Guards
// =============================================================================

/// RAII guard that disables colored output for tests.
///
/// This ensures colors are disabled during the test and automatically
/// restored when the guard is dropped, even if the test panics.
pub struct DisableColors;

impl DisableColors {
    /// Create a new guard that disables colored output.
    pub fn new() -> Self {
        colored::control::set_override(false);
        Self
    }
}

impl Default for DisableColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisableColors {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// Which sink method received a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Block,
    Line,
}

/// A test sink that captures all logged output for verification.
///
/// Messages are stored ANSI-stripped, in write order, tagged with the sink
/// method that received them.
pub struct CaptureSink {
    pub captured: Arc<Mutex<Vec<(Write, String)>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle
    /// to the captured messages.
    pub fn new() -> (Self, Arc<Mutex<Vec<(Write, String)>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new().0
    }
}

impl OutputSink for CaptureSink {
    fn emit(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .push((Write::Block, strip_ansi(message)));
    }

    fn emit_line(&self, message: &str) {
        self.captured
            .lock()
            .unwrap()
            .push((Write::Line, strip_ansi(message)));
    }
}

/// Build a logger over a fresh capture sink.
pub fn capture_logger(config: &IoConfig) -> (Logger, Arc<Mutex<Vec<(Write, String)>>>) {
    let (sink, captured) = CaptureSink::new();
    (Logger::new(Arc::new(sink), config), captured)
}

/// Snapshot of the captured messages.
pub fn messages(captured: &Arc<Mutex<Vec<(Write, String)>>>) -> Vec<String> {
    captured
        .lock()
        .unwrap()
        .iter()
        .map(|(_, message)| message.clone())
        .collect()
}
