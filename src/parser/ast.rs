//! Placeholder definitions produced by the parser

use std::fmt;
use std::str::FromStr;

use crate::error::InterpolationError;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// One `name` or `name:default` entry of a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Literal fallback used when the name has no value
    pub default: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "{}:{}", self.name, default),
            None => f.write_str(&self.name),
        }
    }
}

/// Ordered, non-empty fallback chain parsed from the inside of a `{...}` block.
///
/// Candidates are tried strictly left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    candidates: Vec<Candidate>,
}

impl ParameterSpec {
    /// Create a chain with a single candidate
    pub fn new(first: Candidate) -> Self {
        Self {
            candidates: vec![first],
        }
    }

    /// Append a fallback candidate
    pub fn or(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.name.as_str())
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", candidate)?;
        }
        Ok(())
    }
}

impl FromStr for ParameterSpec {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_parameter_spec(s)
    }
}
