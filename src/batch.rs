//! Parallel conversion of many file URLs.
//!
//! Useful when a module graph or an editor session hands over hundreds of
//! `file:` URLs at once. Each conversion is independent, so results are
//! computed on the rayon pool and returned in input order.
//!
//! # Example
//!
//! ```
//! use file_url_path::batch::convert_batch;
//!
//! let results = convert_batch(&["file:///a", "file://nas/b", "/c"], "/");
//! assert_eq!(results[0].as_deref(), Ok("/a"));
//! assert!(results[1].is_err());
//! assert!(results[2].is_err());
//! ```

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::convert::convert_with;
use crate::error::FileUrlError;
use crate::separator::Separator;

/// Convert multiple hrefs in parallel.
///
/// Returns results in the same order as `hrefs`.
pub fn convert_batch<H>(hrefs: &[H], separator: &str) -> Vec<Result<String, FileUrlError>>
where
    H: AsRef<str> + Sync,
{
    convert_batch_each(hrefs, separator, |_| {})
}

/// Convert multiple hrefs in parallel with a callback for each href.
///
/// Like [`convert_batch`], but invokes `on_each` once per href after it is
/// converted. Useful for progress tracking. Callback order is unspecified.
pub fn convert_batch_each<H, F>(
    hrefs: &[H],
    separator: &str,
    on_each: F,
) -> Vec<Result<String, FileUrlError>>
where
    H: AsRef<str> + Sync,
    F: Fn(&str) + Sync,
{
    if hrefs.is_empty() {
        return vec![];
    }

    let separator = Separator::parse(separator);
    hrefs
        .par_iter()
        .map(|href| {
            let href = href.as_ref();
            let result = convert_with(href, &separator);
            on_each(href);
            result
        })
        .collect()
}

/// Convert the distinct hrefs of `hrefs`, keyed by href.
///
/// Duplicates are converted once.
pub fn convert_unique<H>(
    hrefs: &[H],
    separator: &str,
) -> FxHashMap<String, Result<String, FileUrlError>>
where
    H: AsRef<str>,
{
    if hrefs.is_empty() {
        return FxHashMap::default();
    }

    let unique: FxHashSet<&str> = hrefs.iter().map(|href| href.as_ref()).collect();

    let separator = Separator::parse(separator);
    unique
        .into_par_iter()
        .map(|href| (href.to_owned(), convert_with(href, &separator)))
        .collect()
}
