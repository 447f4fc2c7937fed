//! Source and include path specifier parsing.
//!
//! A specifier has the form `name[:ro|:rw]`, where `name` is restricted to
//! the character class `[\w.-]`. Parsing is best-effort by design: when the
//! permission suffix does not match against the restricted grammar, the
//! whole input becomes the basename and no permission is recorded. This is
//! deliberately not an error.

use regex::Regex;
use std::sync::LazyLock;

/// `basename:permission` matched against the full input, with the basename
/// restricted to word characters, dots, and hyphens. Anchoring is what makes
/// `dir/sub.py:ro` degrade to a whole-string basename instead of matching
/// the `sub.py:ro` tail.
static SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w.-]+)(:(ro|rw))$").expect("hard-coded pattern is valid"));

/// Mount write-access permission carried by a path specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPermission {
    /// `:ro` — mounted read-only.
    ReadOnly,
    /// `:rw` — mounted read-write.
    ReadWrite,
}

impl MountPermission {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ro" => Some(Self::ReadOnly),
            "rw" => Some(Self::ReadWrite),
            _ => None,
        }
    }

    /// The bare suffix string, without the leading colon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "ro",
            Self::ReadWrite => "rw",
        }
    }
}

/// A parsed path specifier.
///
/// Retains the raw input alongside the decomposition: mount construction
/// reuses the raw string verbatim on the container side so that a
/// permission annotation reaches the bind option unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    raw: String,
    basename: String,
    permission: Option<MountPermission>,
}

impl PathSpec {
    /// Parse a specifier. Never fails: inputs that do not match the
    /// restricted grammar degrade to whole-string basename with no
    /// permission.
    pub fn parse(input: &str) -> Self {
        if let Some(caps) = SPEC.captures(input) {
            if let (Some(basename), Some(suffix)) = (caps.get(1), caps.get(3)) {
                if let Some(permission) = MountPermission::from_suffix(suffix.as_str()) {
                    return Self {
                        raw: input.to_string(),
                        basename: basename.as_str().to_string(),
                        permission: Some(permission),
                    };
                }
            }
        }
        Self {
            raw: input.to_string(),
            basename: input.to_string(),
            permission: None,
        }
    }

    /// The original, unmodified specifier string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The file or directory name component.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The parsed permission, if the specifier carried one.
    pub fn permission(&self) -> Option<MountPermission> {
        self.permission
    }
}
