//! Extension-to-image resolution.
//!
//! A fixed table maps language extension tokens to the image families
//! polyrun ships under its namespace. The table is constructed once, is
//! never mutated at runtime, and offers no dynamic registration.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Registry namespace all polyrun images live under.
pub const IMAGE_NAMESPACE: &str = "polyrun";

static IMAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("c", "c"),
        ("clj", "clojure"),
        ("coffee", "coffee"),
        ("cpp", "cpp"),
        ("cs", "csharp"),
        ("d", "d"),
        ("erl", "erlang"),
        ("fs", "fsharp"),
        ("go", "go"),
        ("groovy", "groovy"),
        ("hs", "haskell"),
        ("java", "java"),
        ("lisp", "lisp"),
        ("js", "node"),
        ("m", "objc"),
        ("ml", "ocaml"),
        ("pl", "perl"),
        ("php", "php"),
        ("py", "python"),
        ("rkt", "racket"),
        ("rb", "ruby"),
        ("rs", "rust"),
        ("scala", "scala"),
        ("sh", "bash"),
    ])
});

/// Look up the image identifier for an extension token.
///
/// Exact match only; unknown tokens return `None`.
pub fn image_for_extension(extension: &str) -> Option<&'static str> {
    IMAGES.get(extension).copied()
}

/// Format the full registry reference for an image identifier.
pub fn image_reference(image: &str) -> String {
    format!("{IMAGE_NAMESPACE}/{image}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        let expected = [
            ("c", "c"),
            ("clj", "clojure"),
            ("coffee", "coffee"),
            ("cpp", "cpp"),
            ("cs", "csharp"),
            ("d", "d"),
            ("erl", "erlang"),
            ("fs", "fsharp"),
            ("go", "go"),
            ("groovy", "groovy"),
            ("hs", "haskell"),
            ("java", "java"),
            ("lisp", "lisp"),
            ("js", "node"),
            ("m", "objc"),
            ("ml", "ocaml"),
            ("pl", "perl"),
            ("php", "php"),
            ("py", "python"),
            ("rkt", "racket"),
            ("rb", "ruby"),
            ("rs", "rust"),
            ("scala", "scala"),
            ("sh", "bash"),
        ];
        for (ext, image) in expected {
            assert_eq!(image_for_extension(ext), Some(image), "extension {ext}");
        }
    }

    #[test]
    fn unknown_tokens_are_unmapped() {
        assert_eq!(image_for_extension("xyz"), None);
        assert_eq!(image_for_extension(""), None);
        // No case folding.
        assert_eq!(image_for_extension("PY"), None);
    }

    #[test]
    fn reference_includes_namespace() {
        assert_eq!(image_reference("python"), "polyrun/python");
    }
}
