//! Conversion error type.

use std::ops::Range;

use thiserror::Error;

use crate::separator::Separator;

/// The reason a file URL could not be converted.
///
/// Each kind maps to the error code Node.js reports for the same input,
/// see [`ErrorKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The href does not contain `:/` and is not a URL at all.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The href does not start with `file:`.
    #[error("The URL must be of scheme file")]
    InvalidUrlScheme,

    /// POSIX only: the URL names a host other than `localhost`.
    #[error("File URL host must be \"localhost\" or empty")]
    InvalidFileUrlHost,

    /// Windows only: the path after the prefix does not start with a drive.
    #[error("File URL path must be absolute")]
    InvalidFileUrlPath,
}

impl ErrorKind {
    /// The Node.js compatible error code, e.g. `ERR_INVALID_URL`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidUrl => "ERR_INVALID_URL",
            Self::InvalidUrlScheme => "ERR_INVALID_URL_SCHEME",
            Self::InvalidFileUrlHost => "ERR_INVALID_FILE_URL_HOST",
            Self::InvalidFileUrlPath => "ERR_INVALID_FILE_URL_PATH",
        }
    }

    /// Human readable message. Not part of the stable contract.
    pub fn message(self) -> String {
        self.to_string()
    }
}

/// Error returned when a file URL cannot be converted to a path.
///
/// Carries the input so the failure can be reported without the caller
/// keeping it around. Branch on [`kind`](Self::kind), not on the message.
///
/// # Example
///
/// ```
/// use file_url_path::{convert, ErrorKind};
///
/// let err = convert("file://hostname/path", "/").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidFileUrlHost);
/// assert_eq!(err.code(), "ERR_INVALID_FILE_URL_HOST");
/// assert_eq!(&err.href()[err.span()], "hostname");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {href}")]
pub struct FileUrlError {
    kind: ErrorKind,
    href: String,
    separator: Separator,
    span: Range<usize>,
}

impl FileUrlError {
    /// Create an error for `href`, locating the offending part from `kind`.
    pub fn new(kind: ErrorKind, href: impl Into<String>, separator: Separator) -> Self {
        let href = href.into();
        let span = locate(kind, &href);
        Self {
            kind,
            href,
            separator,
            span,
        }
    }

    /// Create an error with an explicit byte span into `href`.
    pub(crate) fn with_span(
        kind: ErrorKind,
        href: &str,
        separator: &Separator,
        span: Range<usize>,
    ) -> Self {
        debug_assert!(span.end <= href.len());
        Self {
            kind,
            href: href.to_owned(),
            separator: separator.clone(),
            span,
        }
    }

    /// The error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The Node.js compatible error code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The href that failed to convert.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The separator the conversion was attempted with.
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Byte range of [`href`](Self::href) responsible for the failure.
    ///
    /// Always lies on char boundaries. May be empty when the offending part
    /// is missing (e.g. a path that ends right after the prefix).
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Best-effort span for errors built without conversion context.
fn locate(kind: ErrorKind, href: &str) -> Range<usize> {
    match kind {
        ErrorKind::InvalidUrl => 0..href.len(),
        ErrorKind::InvalidUrlScheme => 0..href.find(':').unwrap_or(href.len()),
        ErrorKind::InvalidFileUrlHost => match href.strip_prefix("file://") {
            Some(rest) => 7..7 + rest.find('/').unwrap_or(rest.len()),
            None => 0..href.len(),
        },
        ErrorKind::InvalidFileUrlPath => 0..href.len(),
    }
}
