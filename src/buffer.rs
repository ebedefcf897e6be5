//! Output buffer for accumulating one log line.
//!
//! An [`OutputBuffer`] collects text segments and renders them, together with
//! an optional prefix label, as a single line in one color. Buffers are cheap
//! and meant to be created per call: the logger never shares one between
//! invocations.

use colored::{Color, Colorize};

use crate::severity::Severity;

/// Buffer for accumulating text segments until a single flush.
///
/// `flush()` drains the segments. Flushing again without pushing anything new
/// in between returns the previously rendered string.
///
/// # Example
///
/// ```
/// use foundation_io::OutputBuffer;
///
/// let mut buffer = OutputBuffer::new();
/// buffer.set_prefix(Some("<<NOTE>>")).push("Hello").push("world!");
///
/// assert_eq!(buffer.flush(), "<<NOTE>> Hello world!");
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct OutputBuffer {
    segments: Vec<String>,
    color: Option<Color>,
    prefix: Option<String>,
    rendered: Option<String>,
}

impl OutputBuffer {
    /// Create a new empty buffer with no color and no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer pre-configured with a severity's color and prefix.
    #[must_use]
    pub fn styled(severity: Severity) -> Self {
        let style = severity.style();
        let mut buffer = Self::new();
        buffer.set_color(style.color).set_prefix(style.prefix);
        buffer
    }

    /// Set the color applied to the whole rendered line.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self.rendered = None;
        self
    }

    /// Set or clear the prefix label.
    pub fn set_prefix(&mut self, prefix: Option<&str>) -> &mut Self {
        self.prefix = prefix.map(str::to_string);
        self.rendered = None;
        self
    }

    /// Append a segment.
    pub fn push(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(text.into());
        self.rendered = None;
        self
    }

    /// Render prefix and segments, space-separated, in the buffer color.
    pub fn flush(&mut self) -> String {
        if let Some(rendered) = &self.rendered {
            return rendered.clone();
        }

        let segments = std::mem::take(&mut self.segments);
        let line = self
            .prefix
            .iter()
            .cloned()
            .chain(segments)
            .collect::<Vec<_>>()
            .join(" ");
        let rendered = match self.color {
            Some(color) => line.color(color).to_string(),
            None => line,
        };

        self.rendered = Some(rendered.clone());
        rendered
    }

    /// Check whether any segments are waiting to be flushed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
