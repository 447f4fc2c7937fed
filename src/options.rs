//! Parsed command-line option model.
//!
//! The CLI layer tokenizes arguments into an [`OptionSet`]: a mapping from
//! option kind to the ordered list of values given for that kind. The
//! invocation builder consumes the set read-only; it never mutates or
//! reorders the value lists.

use std::collections::BTreeMap;

/// The kinds of options recognized on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKind {
    /// Positional source file paths (repeatable).
    Source,
    /// Extra file or directory mounts, `-i`/`--include` (repeatable).
    Include,
    /// Build-time arguments, `-b`/`--build-arg` (repeatable).
    BuildArg,
    /// Run-time arguments, `-a`/`--arg` (repeatable).
    Arg,
    /// Working-directory override, `-C`/`--directory` (at most one).
    TargetDir,
    /// Pull the image before running, `-u`/`--update`.
    UpdateFlag,
    /// Help display, handled entirely by the CLI layer.
    HelpFlag,
    /// Version display, handled entirely by the CLI layer.
    VersionFlag,
}

/// An ordered multimap of option kind to string values.
///
/// Backed by a `BTreeMap` so that iteration order is fixed and plan
/// construction stays deterministic for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: BTreeMap<OptionKind, Vec<String>>,
}

impl OptionSet {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for the given kind, preserving insertion order.
    pub fn push<S: Into<String>>(&mut self, kind: OptionKind, value: S) {
        self.entries.entry(kind).or_default().push(value.into());
    }

    /// Record a flag kind with no associated value.
    pub fn set_flag(&mut self, kind: OptionKind) {
        self.entries.entry(kind).or_default();
    }

    /// All values given for a kind, in input order.
    pub fn values(&self, kind: OptionKind) -> &[String] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value given for a kind, if any.
    pub fn first(&self, kind: OptionKind) -> Option<&str> {
        self.values(kind).first().map(String::as_str)
    }

    /// Whether the kind was given at all (with or without values).
    pub fn is_set(&self, kind: OptionKind) -> bool {
        self.entries.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_preserve_insertion_order() {
        let mut set = OptionSet::new();
        set.push(OptionKind::Source, "main.py");
        set.push(OptionKind::Source, "util.py");
        set.push(OptionKind::Source, "extra.py");

        assert_eq!(
            set.values(OptionKind::Source),
            ["main.py", "util.py", "extra.py"]
        );
        assert_eq!(set.first(OptionKind::Source), Some("main.py"));
    }

    #[test]
    fn missing_kind_yields_empty_slice() {
        let set = OptionSet::new();
        assert!(set.values(OptionKind::Include).is_empty());
        assert_eq!(set.first(OptionKind::TargetDir), None);
        assert!(!set.is_set(OptionKind::UpdateFlag));
    }

    #[test]
    fn flag_is_set_without_values() {
        let mut set = OptionSet::new();
        set.set_flag(OptionKind::UpdateFlag);
        assert!(set.is_set(OptionKind::UpdateFlag));
        assert!(set.values(OptionKind::UpdateFlag).is_empty());
    }
}
