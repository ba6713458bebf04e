//! Rendering of conversion errors for terminals and tools.
//!
//! ```ignore
//! use file_url_path::{convert, DiagnosticOptions};
//!
//! if let Err(err) = convert("file://hostname/path", "/") {
//!     eprintln!("{}", err.render(&DiagnosticOptions::default()));
//!     // error[ERR_INVALID_FILE_URL_HOST]: File URL host must be "localhost" or empty
//!     //   ┌─ file://hostname/path
//!     //   │         ^^^^^^^^
//!     //   = separator: "/"
//! }
//! ```

use std::fmt::Write;

use serde_json::{json, Value as JsonValue};

use crate::error::FileUrlError;

// ============================================================================
// Options
// ============================================================================

/// Display style for error output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Header, the href, and a marker under the offending part.
    #[default]
    Rich,
    /// Single line: `CODE: message (href)`.
    Short,
}

/// Options for controlling error rendering.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticOptions {
    /// Whether to use ANSI colors in output.
    ///
    /// Ignored unless the `colored-diagnostics` feature is enabled.
    pub colored: bool,
    /// Display style (rich or short).
    pub style: DisplayStyle,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            colored: true,
            style: DisplayStyle::Rich,
        }
    }
}

impl DiagnosticOptions {
    /// Create options for colored terminal output.
    pub fn colored() -> Self {
        Self::default()
    }

    /// Create options for plain text output (no ANSI colors).
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    /// Create options for the single-line format, without colors.
    pub fn short() -> Self {
        Self {
            colored: false,
            style: DisplayStyle::Short,
        }
    }

    /// Set whether to use colors.
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Set display style.
    pub fn with_style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }
}

// ============================================================================
// Gutter Characters
// ============================================================================

mod gutter {
    pub const HEADER: &str = "┌─";
    pub const BAR: &str = "│";
    pub const NOTE: &str = "=";
    pub const MARKER: &str = "^";
}

// ============================================================================
// Coloring
// ============================================================================

#[cfg(feature = "colored-diagnostics")]
fn colorize_error(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.red().to_string()
}

#[cfg(feature = "colored-diagnostics")]
fn colorize_note(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.cyan().to_string()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn colorize_error(text: &str) -> String {
    text.to_owned()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn colorize_note(text: &str) -> String {
    text.to_owned()
}

fn paint(options: &DiagnosticOptions, text: &str, f: fn(&str) -> String) -> String {
    if options.colored {
        f(text)
    } else {
        text.to_owned()
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl FileUrlError {
    /// Render this error for display.
    pub fn render(&self, options: &DiagnosticOptions) -> String {
        match options.style {
            DisplayStyle::Rich => render_rich(self, options),
            DisplayStyle::Short => render_short(self, options),
        }
    }

    /// Structured form for machine consumers.
    ///
    /// ```
    /// use file_url_path::convert;
    ///
    /// let err = convert("/whatever", "/").unwrap_err();
    /// let json = err.to_json();
    /// assert_eq!(json["code"], "ERR_INVALID_URL");
    /// assert_eq!(json["span"]["end"], 9);
    /// ```
    pub fn to_json(&self) -> JsonValue {
        let span = self.span();
        json!({
            "code": self.code(),
            "message": self.kind().message(),
            "href": self.href(),
            "separator": self.separator().as_str(),
            "span": { "start": span.start, "end": span.end },
        })
    }
}

fn render_short(err: &FileUrlError, options: &DiagnosticOptions) -> String {
    format!(
        "{}: {} ({})",
        paint(options, err.code(), colorize_error),
        err.kind(),
        err.href()
    )
}

fn render_rich(err: &FileUrlError, options: &DiagnosticOptions) -> String {
    let mut out = String::new();
    let href = err.href();
    let span = err.span();

    let header = format!("error[{}]", err.code());
    let _ = writeln!(out, "{}: {}", paint(options, &header, colorize_error), err.kind());
    let _ = writeln!(out, "  {} {href}", gutter::HEADER);

    // Column in chars, so multi-byte paths stay aligned.
    let column = href[..span.start].chars().count();
    let width = href[span.clone()].chars().count().max(1);
    let marker = gutter::MARKER.repeat(width);
    let _ = writeln!(
        out,
        "  {}  {}{}",
        gutter::BAR,
        " ".repeat(column),
        paint(options, &marker, colorize_error)
    );

    let note = format!("{} separator", gutter::NOTE);
    let _ = write!(
        out,
        "  {}: {:?}",
        paint(options, &note, colorize_note),
        err.separator().as_str()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn test_render_rich_plain() {
        let err = convert("file://hostname/path", "/").unwrap_err();
        let out = err.render(&DiagnosticOptions::plain());
        let expected = "\
error[ERR_INVALID_FILE_URL_HOST]: File URL host must be \"localhost\" or empty
  ┌─ file://hostname/path
  │         ^^^^^^^^
  = separator: \"/\"";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_rich_multibyte_column() {
        let err = convert("file:///你好.txt", "\\").unwrap_err();
        let out = err.render(&DiagnosticOptions::plain());
        let marker_line = out.lines().nth(2).unwrap();
        assert_eq!(marker_line, "  │          ^^");
    }

    #[test]
    fn test_render_empty_span_has_marker() {
        let err = convert("file:///", "\\").unwrap_err();
        let out = err.render(&DiagnosticOptions::plain());
        assert!(out.lines().nth(2).unwrap().ends_with(" ^"));
    }

    #[test]
    fn test_render_short() {
        let err = convert("c:/whatever", "\\").unwrap_err();
        assert_eq!(
            err.render(&DiagnosticOptions::short()),
            "ERR_INVALID_URL_SCHEME: The URL must be of scheme file (c:/whatever)"
        );
    }

    #[cfg(feature = "colored-diagnostics")]
    #[test]
    fn test_render_colored_has_ansi() {
        let err = convert("/whatever", "/").unwrap_err();
        let out = err.render(&DiagnosticOptions::colored());
        assert!(out.contains("\x1b["));
        assert!(!err.render(&DiagnosticOptions::plain()).contains("\x1b["));
    }

    #[test]
    fn test_options_builder() {
        let opts = DiagnosticOptions::default()
            .with_colored(false)
            .with_style(DisplayStyle::Short);
        assert!(!opts.colored);
        assert_eq!(opts.style, DisplayStyle::Short);
    }

    #[test]
    fn test_to_json() {
        let err = convert("file:/path", "\\").unwrap_err();
        let json = err.to_json();
        assert_eq!(json["code"], "ERR_INVALID_FILE_URL_PATH");
        assert_eq!(json["message"], "File URL path must be absolute");
        assert_eq!(json["href"], "file:/path");
        assert_eq!(json["separator"], "\\");
        assert_eq!(json["span"]["start"], 6);
        assert_eq!(json["span"]["end"], 8);
    }
}
