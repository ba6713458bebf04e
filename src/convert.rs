//! File URL to path conversion.
//!
//! Follows the behavior of Node.js `url.fileURLToPath`, but the target
//! convention is chosen by the separator argument rather than by the host
//! platform:
//!
//! | href                      | `/`                  | `\`                      |
//! |---------------------------|----------------------|--------------------------|
//! | `file:///c:/path/`        | `/c:/path/`          | `c:\path\`               |
//! | `file://localhost/path`   | `/path`              | error (no drive)         |
//! | `file://nas/foo.txt`      | error (host)         | `\\nas\foo.txt`          |
//! | `file:/path`              | `/path`              | error (no drive)         |
//!
//! No percent-decoding is performed; the path part is copied as-is.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::config;
use crate::error::{ErrorKind, FileUrlError};
use crate::separator::Separator;

const EMPTY_HOST: &str = "file:///";
const LOCALHOST: &str = "file://localhost/";
const ANY_HOST: &str = "file://";
const NO_HOST: &str = "file:/";

/// Convert a file URL to a path using the given separator.
///
/// `"/"` yields a POSIX path, `"\\"` a Windows path. Any other separator
/// returns `href` unchanged once it passes the URL and scheme checks.
///
/// # Example
///
/// ```
/// use file_url_path::convert;
///
/// assert_eq!(convert("file:///c:/path/", "\\").unwrap(), r"c:\path\");
/// assert_eq!(convert("file://nas/foo.txt", "\\").unwrap(), r"\\nas\foo.txt");
/// assert_eq!(convert("file:///hello world", "/").unwrap(), "/hello world");
/// ```
pub fn convert(href: &str, separator: &str) -> Result<String, FileUrlError> {
    convert_with(href, &Separator::parse(separator))
}

/// Convert a file URL to a path using an already parsed [`Separator`].
pub fn convert_with(href: &str, separator: &Separator) -> Result<String, FileUrlError> {
    if !href.contains(":/") {
        return Err(FileUrlError::new(ErrorKind::InvalidUrl, href, separator.clone()));
    }
    if !href.starts_with("file:") {
        return Err(FileUrlError::new(
            ErrorKind::InvalidUrlScheme,
            href,
            separator.clone(),
        ));
    }

    match separator {
        Separator::Windows => windows_path(href, separator),
        Separator::Posix => posix_path(href, separator).map(str::to_owned),
        // Unsupported separator: nothing to rewrite.
        Separator::Other(_) => Ok(href.to_owned()),
    }
}

/// Convert a file URL using the configured separator.
///
/// The separator comes from [`config::get`], which defaults to the separator
/// of the current platform.
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use std::path::Path;
/// use file_url_path::to_native_path;
///
/// let path = to_native_path("file:///etc/hosts").unwrap();
/// assert_eq!(path, Path::new("/etc/hosts"));
/// # }
/// ```
pub fn to_native_path(href: &str) -> Result<PathBuf, FileUrlError> {
    convert_with(href, &config::get().separator).map(PathBuf::from)
}

// ============================================================================
// Windows
// ============================================================================

fn windows_path(href: &str, separator: &Separator) -> Result<String, FileUrlError> {
    let file: Cow<'_, str> = if let Some(path) = href.strip_prefix(EMPTY_HOST) {
        require_drive(href, path, separator)?.into()
    } else if let Some(path) = href.strip_prefix(LOCALHOST) {
        require_drive(href, path, separator)?.into()
    } else if let Some(host_and_path) = href.strip_prefix(ANY_HOST) {
        // Any other host becomes a UNC share.
        format!(r"\\{host_and_path}").into()
    } else if let Some(path) = href.strip_prefix(NO_HOST) {
        require_drive(href, path, separator)?.into()
    } else {
        // e.g. `file:x:/y`, no slash right after the scheme
        href.into()
    };

    Ok(file.replace('/', "\\"))
}

/// Require `path` to start with a drive, i.e. a colon as its second char.
fn require_drive<'a>(
    href: &str,
    path: &'a str,
    separator: &Separator,
) -> Result<&'a str, FileUrlError> {
    if path.chars().nth(1) == Some(':') {
        return Ok(path);
    }
    let start = href.len() - path.len();
    let len = path.char_indices().nth(2).map_or(path.len(), |(i, _)| i);
    Err(FileUrlError::with_span(
        ErrorKind::InvalidFileUrlPath,
        href,
        separator,
        start..start + len,
    ))
}

// ============================================================================
// POSIX
// ============================================================================

fn posix_path<'a>(href: &'a str, separator: &Separator) -> Result<&'a str, FileUrlError> {
    // The leading slash of the URL path is kept in every branch.
    if href.starts_with(EMPTY_HOST) {
        Ok(&href[ANY_HOST.len()..])
    } else if let Some(host_and_path) = href.strip_prefix(ANY_HOST) {
        if href.starts_with(LOCALHOST) {
            Ok(&href[LOCALHOST.len() - 1..])
        } else {
            let host_len = host_and_path.find('/').unwrap_or(host_and_path.len());
            let start = ANY_HOST.len();
            Err(FileUrlError::with_span(
                ErrorKind::InvalidFileUrlHost,
                href,
                separator,
                start..start + host_len,
            ))
        }
    } else if href.starts_with(NO_HOST) {
        Ok(&href[NO_HOST.len() - 1..])
    } else {
        Ok(href)
    }
}
