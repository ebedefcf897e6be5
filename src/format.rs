//! Pure formatting functions for log output.
//!
//! All colored/styled output is produced here. The logger only decides
//! *whether* and *where* to write; what gets written comes from these
//! helpers, which keeps rendering testable without a sink.
//!
//! # Categories
//!
//! - [`format_line`] - One severity line (`<<WARN>> message 42`)
//! - [`format_report`] - Bordered key/value block for a [`Report`]
//! - [`format_border`] - Closing border of a report block

use serde_json::{Map, Value};

use crate::buffer::OutputBuffer;
use crate::inspect::{Arg, DEFAULT_DEPTH, inspect, inspect_arg};
use crate::severity::Severity;

// ============================================================================
// Constants
// ============================================================================

/// Title used when a report has none.
pub const DEFAULT_REPORT_TITLE: &str = "reported content";

/// Description used when a report has none.
pub const DEFAULT_REPORT_DESCRIPTION: &str = "auto-generated report";

// ============================================================================
// Line Formatting
// ============================================================================

/// Format one log line for `severity`.
///
/// Every argument is inspected and pushed into a buffer styled for the
/// severity, then flushed as a single line.
///
/// # Example
///
/// ```
/// use foundation_io::{Severity, args, format_line};
///
/// colored::control::set_override(false);
/// let line = format_line(Severity::Warn, &args!["disk at", 93, "percent"]);
/// assert_eq!(line, "<<WARN>> disk at 93 percent");
/// colored::control::unset_override();
/// ```
pub fn format_line(severity: Severity, args: &[Arg]) -> String {
    let mut buffer = OutputBuffer::styled(severity);
    for rendered in inspect(args) {
        buffer.push(rendered);
    }
    buffer.flush()
}

// ============================================================================
// Report Formatting
// ============================================================================

/// A titled set of key/value pairs rendered as a bordered block.
///
/// Entries keep insertion order. Entries whose value is absent or `null` are
/// skipped when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: String,
    description: String,
    entries: Vec<(String, Arg)>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Create an empty report with the default title and description.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            description: DEFAULT_REPORT_DESCRIPTION.to_string(),
            entries: Vec::new(),
        }
    }

    /// Build a report from a JSON object, in the map's iteration order.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        map.iter()
            .fold(Self::new(), |report, (key, value)| report.entry(key, value))
    }

    /// Set the title. An empty title keeps the default.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    /// Set the description. An empty description keeps the default.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = description;
        }
        self
    }

    /// Append a key/value pair.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn title_text(&self) -> &str {
        &self.title
    }

    pub fn description_text(&self) -> &str {
        &self.description
    }

    /// Entries that will appear in the rendered block.
    pub fn visible_entries(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.entries
            .iter()
            .filter(|(_, value)| !matches!(value, Arg::Absent | Arg::Structured(Value::Null)))
            .map(|(key, value)| (key.as_str(), value))
    }
}

/// Closing border for a report: one `-` per character of the title.
pub fn format_border(title: &str) -> String {
    "-".repeat(title.chars().count())
}

/// Format a report block.
///
/// Produces a blank line, a `-- title` header, the description, one
/// `  key: value` line per visible entry, and the closing border, all in the
/// report color without a prefix.
///
/// # Example
///
/// ```
/// use foundation_io::{Report, format_report};
///
/// colored::control::set_override(false);
/// let report = Report::new().title("cache").entry("hits", 10).entry("misses", None::<u32>);
/// assert_eq!(
///     format_report(&report),
///     "\n-- cache\nauto-generated report\n  hits: 10\n-----"
/// );
/// colored::control::unset_override();
/// ```
pub fn format_report(report: &Report) -> String {
    let mut lines = vec![
        String::new(),
        format!("-- {}", report.title),
        report.description.clone(),
    ];
    lines.extend(
        report
            .visible_entries()
            .map(|(key, value)| format!("  {key}: {}", inspect_arg(value, DEFAULT_DEPTH))),
    );
    lines.push(format_border(&report.title));

    let mut buffer = OutputBuffer::styled(Severity::Report);
    buffer.push(lines.join("\n"));
    buffer.flush()
}

/// Simple ANSI stripping for unit tests (avoids dep on tests/common).
#[cfg(test)]
pub(crate) fn strip_ansi_for_test(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;


    // =========================================
    // Line formatting tests
    // =========================================

    #[test]
    fn test_format_line_prefixes() {
        let cases = [
            (Severity::Log, "<<LOG>> hi"),
            (Severity::Warn, "<<WARN>> hi"),
            (Severity::Dev, "<<DEV>> hi"),
            (Severity::Error, "<<ERROR>> hi"),
            (Severity::Debug, "<<DEBUG>> hi"),
            (Severity::Report, "hi"),
        ];
        for (severity, expected) in cases {
            let line = format_line(severity, &[Arg::from("hi")]);
            assert_eq!(strip_ansi_for_test(&line), expected);
        }
    }

    #[test]
    fn test_format_line_inspects_structures() {
        let line = format_line(
            Severity::Log,
            &crate::args!["loaded", json!({"rows": 3, "cols": ["a"]})],
        );
        assert_eq!(
            strip_ansi_for_test(&line),
            "<<LOG>> loaded { rows: 3, cols: [ 'a' ] }"
        );
    }

    #[test]
    fn test_format_line_no_args() {
        let line = format_line(Severity::Error, &[]);
        assert_eq!(strip_ansi_for_test(&line), "<<ERROR>>");
    }

    // =========================================
    // Report tests
    // =========================================

    #[test]
    fn test_report_defaults() {
        let report = Report::new();
        assert_eq!(report.title_text(), DEFAULT_REPORT_TITLE);
        assert_eq!(report.description_text(), DEFAULT_REPORT_DESCRIPTION);

        let report = Report::new().title("").description("");
        assert_eq!(report.title_text(), DEFAULT_REPORT_TITLE);
        assert_eq!(report.description_text(), DEFAULT_REPORT_DESCRIPTION);
    }

    #[test]
    fn test_report_skips_absent_values() {
        let data = json!({"a": 1, "b": null, "c": "x"});
        let report = Report::from_map(data.as_object().unwrap()).title("T");
        let block = strip_ansi_for_test(&format_report(&report));

        let lines: Vec<&str> = block.split('\n').collect();
        assert_eq!(
            lines,
            vec!["", "-- T", "auto-generated report", "  a: 1", "  c: x", "-"]
        );
        assert!(!block.contains("b:"));
    }

    #[test]
    fn test_border_matches_title_length() {
        assert_eq!(format_border("T"), "-");
        assert_eq!(format_border("reported content").len(), 16);
        assert_eq!(format_border("ünïcode"), "-------");
    }

    #[test]
    fn test_report_entry_order_and_nesting() {
        let report = Report::new()
            .title("server")
            .description("startup summary")
            .entry("port", 8080)
            .entry("hosts", json!(["a", "b"]))
            .entry("tls", false);
        let block = strip_ansi_for_test(&format_report(&report));
        assert_eq!(
            block,
            "\n-- server\nstartup summary\n  port: 8080\n  hosts: [ 'a', 'b' ]\n  tls: false\n------"
        );
    }

    #[test]
    fn test_visible_entries() {
        let report = Report::new()
            .entry("kept", "yes")
            .entry("gone", None::<&str>)
            .entry("null", json!(null));
        let keys: Vec<&str> = report.visible_entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["kept"]);
    }
}
