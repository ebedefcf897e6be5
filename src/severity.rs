//! Severity levels and their fixed terminal styling.

use std::fmt;

use colored::Color;

/// A logging level. Each level maps to exactly one [`SeverityStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Log,
    Warn,
    Dev,
    Error,
    Debug,
    Report,
}

/// Color and optional prefix label applied to a whole rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub color: Color,
    pub prefix: Option<&'static str>,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 6] = [
        Severity::Log,
        Severity::Warn,
        Severity::Dev,
        Severity::Error,
        Severity::Debug,
        Severity::Report,
    ];

    /// The styling used for this severity.
    pub const fn style(self) -> SeverityStyle {
        let (color, prefix) = match self {
            Severity::Log => (Color::BrightBlack, Some("<<LOG>>")),
            Severity::Warn => (Color::Yellow, Some("<<WARN>>")),
            Severity::Dev => (Color::Blue, Some("<<DEV>>")),
            Severity::Error => (Color::Red, Some("<<ERROR>>")),
            Severity::Debug => (Color::Blue, Some("<<DEBUG>>")),
            Severity::Report => (Color::Magenta, None),
        };
        SeverityStyle { color, prefix }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Warn => "warn",
            Severity::Dev => "dev",
            Severity::Error => "error",
            Severity::Debug => "debug",
            Severity::Report => "report",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
