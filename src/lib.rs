//! # file-url-path
//!
//! Convert `file:` URLs into absolute filesystem paths, matching the results
//! and error codes of Node.js `url.fileURLToPath`.
//!
//! The target convention is selected by a separator argument instead of the
//! host platform, so POSIX and Windows paths can be produced (and tested)
//! from any process:
//!
//! - `"/"`: POSIX. `file:///a/b` → `/a/b`; hosts other than `localhost` are rejected.
//! - `"\\"`: Windows. `file:///c:/a` → `c:\a`; any other host gives a UNC path
//!   `\\host\share`; a path without a drive letter is rejected.
//!
//! Percent-encoded sequences are **not** decoded.
//!
//! ## Quick Start
//!
//! ```
//! use file_url_path::{convert, ErrorKind};
//!
//! assert_eq!(convert("file:///c:/path/", "\\")?, r"c:\path\");
//! assert_eq!(convert("file://localhost/etc/hosts", "/")?, "/etc/hosts");
//!
//! let err = convert("file://nas/foo.txt", "/").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidFileUrlHost);
//! # Ok::<(), file_url_path::FileUrlError>(())
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Process-wide default separator for [`to_native_path`]
//! - [`diagnostic`]: Human and JSON rendering of errors
//! - [`batch`]: Parallel conversion (feature `batch`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod diagnostic;
pub mod error;
pub mod separator;
#[cfg(feature = "batch")]
pub mod batch;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use file_url_path::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        convert, convert_with, to_native_path, DiagnosticOptions, DisplayStyle, ErrorKind,
        FileUrlError, Separator,
    };

    #[cfg(feature = "batch")]
    pub use crate::batch::{convert_batch, convert_unique};
}

// =============================================================================
// Conversion
// =============================================================================

pub use convert::{convert, convert_with, to_native_path};
pub use separator::Separator;

// =============================================================================
// Errors
// =============================================================================

pub use diagnostic::{DiagnosticOptions, DisplayStyle};
pub use error::{ErrorKind, FileUrlError};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
