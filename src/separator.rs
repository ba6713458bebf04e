//! Path separator selection.
//!
//! The separator decides which file URL convention is applied, independent of
//! the platform the process runs on.

use std::fmt;
use std::path::MAIN_SEPARATOR_STR;

/// Path segment separator used to select the conversion branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`: POSIX paths. Only `localhost` or an empty host is accepted.
    Posix,
    /// `\`: Windows paths. Drive letters are required unless a host is given,
    /// in which case a UNC path is produced.
    Windows,
    /// Any other separator. The href is returned unchanged after validation.
    Other(String),
}

impl Separator {
    /// Parse a separator string.
    ///
    /// `"/"` and `"\\"` map to their variants, everything else to [`Separator::Other`].
    pub fn parse(separator: &str) -> Self {
        match separator {
            "/" => Self::Posix,
            "\\" => Self::Windows,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The separator of the current platform.
    pub fn native() -> Self {
        Self::parse(MAIN_SEPARATOR_STR)
    }

    /// The separator as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Posix => "/",
            Self::Windows => "\\",
            Self::Other(s) => s,
        }
    }

    /// Whether this is the separator of the current platform.
    #[inline]
    pub fn is_native(&self) -> bool {
        self.as_str() == MAIN_SEPARATOR_STR
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::native()
    }
}

impl From<&str> for Separator {
    fn from(separator: &str) -> Self {
        Self::parse(separator)
    }
}

impl From<char> for Separator {
    fn from(separator: char) -> Self {
        Self::parse(separator.encode_utf8(&mut [0; 4]))
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
