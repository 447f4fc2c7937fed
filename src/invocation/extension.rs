//! Filename extension extraction.

use super::{InvocationError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a filename carrying a trailing permission annotation, e.g.
/// `lib.rs:ro`. The capture is the text between the last dot before the
/// colon and the colon itself.
static ANNOTATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\.(.*):.*$").expect("hard-coded pattern is valid"));

/// Matches a plain filename; the capture is everything after the last dot.
static PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\.(.*)$").expect("hard-coded pattern is valid"));

/// Extract the language extension token from a filename.
///
/// A trailing `:ro`/`:rw` style annotation is stripped first, so
/// `lib.rs:ro` yields `rs` just as `lib.rs` does. A filename ending in a
/// dot yields the empty token (which will fail image resolution later).
///
/// # Errors
///
/// Returns [`InvocationError::InvalidFilename`] when the filename contains
/// no dot at all.
pub fn source_extension(filename: &str) -> Result<&str> {
    if let Some(caps) = ANNOTATED.captures(filename) {
        if let Some(ext) = caps.get(1) {
            return Ok(ext.as_str());
        }
    }
    PLAIN
        .captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|ext| ext.as_str())
        .ok_or_else(|| InvocationError::InvalidFilename(filename.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filename() {
        assert_eq!(source_extension("main.py").unwrap(), "py");
        assert_eq!(source_extension("app.rs").unwrap(), "rs");
    }

    #[test]
    fn multiple_dots_take_the_last() {
        assert_eq!(source_extension("archive.tar.gz").unwrap(), "gz");
        assert_eq!(source_extension("a.b.c.js").unwrap(), "js");
    }

    #[test]
    fn permission_annotation_is_stripped() {
        assert_eq!(source_extension("lib.rs:ro").unwrap(), "rs");
        assert_eq!(source_extension("data.py:rw").unwrap(), "py");
    }

    #[test]
    fn annotation_colon_does_not_leak_into_token() {
        let ext = source_extension("main.py:ro").unwrap();
        assert!(!ext.contains(':'));
        assert_eq!(ext, "py");
    }

    #[test]
    fn trailing_dot_yields_empty_token() {
        assert_eq!(source_extension("weird.").unwrap(), "");
    }

    #[test]
    fn no_dot_is_an_error() {
        let err = source_extension("Makefile").unwrap_err();
        assert!(matches!(err, InvocationError::InvalidFilename(ref name) if name == "Makefile"));
    }

    #[test]
    fn empty_string_is_an_error() {
        assert!(source_extension("").is_err());
    }
}
