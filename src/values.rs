//! Named value sources for placeholder resolution
//!
//! A value source answers one question per parameter name with three
//! possible outcomes: the name is unknown, the name is known but has no
//! value, or the name has a value. Regex capture groups are the main
//! source; [`CaptureGroups`] recovers the "unknown" outcome from the
//! compiled pattern's declared group names, which `regex::Captures` alone
//! cannot tell apart from an unmatched group.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::config::ConfigError;

/// Result of looking up a parameter name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'a> {
    /// The name does not exist in the value source
    Unknown,
    /// The name exists but did not take part in the match
    Unmatched,
    /// The name has a value
    Matched(&'a str),
}

impl<'a> Capture<'a> {
    pub fn value(self) -> Option<&'a str> {
        match self {
            Capture::Matched(value) => Some(value),
            _ => None,
        }
    }
}

/// A source of named parameter values
pub trait NamedValues {
    fn capture(&self, name: &str) -> Capture<'_>;
}

impl<T: NamedValues + ?Sized> NamedValues for &T {
    fn capture(&self, name: &str) -> Capture<'_> {
        (**self).capture(name)
    }
}

impl<S: BuildHasher> NamedValues for HashMap<String, Option<String>, S> {
    fn capture(&self, name: &str) -> Capture<'_> {
        match self.get(name) {
            None => Capture::Unknown,
            Some(None) => Capture::Unmatched,
            Some(Some(value)) => Capture::Matched(value.as_str()),
        }
    }
}

impl NamedValues for BTreeMap<String, Option<String>> {
    fn capture(&self, name: &str) -> Capture<'_> {
        match self.get(name) {
            None => Capture::Unknown,
            Some(None) => Capture::Unmatched,
            Some(Some(value)) => Capture::Matched(value.as_str()),
        }
    }
}

/// Named groups of a regex match
#[derive(Debug)]
pub struct CaptureGroups<'r, 'h> {
    regex: &'r Regex,
    captures: Captures<'h>,
}

impl<'r, 'h> CaptureGroups<'r, 'h> {
    /// Wrap captures produced by `regex`
    pub fn new(regex: &'r Regex, captures: Captures<'h>) -> Self {
        Self { regex, captures }
    }

    /// Match `regex` against `haystack`, `None` if it does not match
    pub fn find(regex: &'r Regex, haystack: &'h str) -> Option<Self> {
        regex
            .captures(haystack)
            .map(|captures| Self::new(regex, captures))
    }

    /// Names of all groups declared by the pattern
    pub fn group_names(&self) -> impl Iterator<Item = &'r str> {
        self.regex.capture_names().flatten()
    }
}

impl NamedValues for CaptureGroups<'_, '_> {
    fn capture(&self, name: &str) -> Capture<'_> {
        if !self.group_names().any(|group| group == name) {
            return Capture::Unknown;
        }
        match self.captures.name(name) {
            Some(m) => Capture::Matched(m.as_str()),
            None => Capture::Unmatched,
        }
    }
}

/// Owned value source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    entries: BTreeMap<String, Option<String>>,
}

/// TOML structure for deserializing value sets
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlValueSet {
    #[serde(default)]
    values: BTreeMap<String, String>,
    #[serde(default)]
    unmatched: Vec<String>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name with a value
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a known name without a value
    pub fn with_unmatched(mut self, name: impl Into<String>) -> Self {
        self.mark_unmatched(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Some(value.into()));
    }

    /// Declare `name` as known but unmatched. An existing value is kept.
    pub fn mark_unmatched(&mut self, name: impl Into<String>) {
        self.entries.entry(name.into()).or_insert(None);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a value set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a value set from a TOML string
    ///
    /// ```toml
    /// unmatched = ["day"]
    ///
    /// [values]
    /// year = "1992"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlValueSet = toml::from_str(content)?;

        let mut set = ValueSet::new();
        for (name, value) in parsed.values {
            set.insert(name, value);
        }
        for name in parsed.unmatched {
            set.mark_unmatched(name);
        }
        Ok(set)
    }
}

impl NamedValues for ValueSet {
    fn capture(&self, name: &str) -> Capture<'_> {
        self.entries.capture(name)
    }
}

impl From<&CaptureGroups<'_, '_>> for ValueSet {
    fn from(groups: &CaptureGroups<'_, '_>) -> Self {
        let mut set = ValueSet::new();
        for name in groups.group_names() {
            match groups.capture(name).value() {
                Some(value) => set.insert(name, value),
                None => set.mark_unmatched(name),
            }
        }
        set
    }
}
