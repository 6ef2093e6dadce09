//! Candidate resolution for a single placeholder

use thiserror::Error;
use tracing::trace;

use crate::parser::ast::ParameterSpec;
use crate::values::{Capture, NamedValues};

/// Errors that can occur while resolving one fallback chain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Name is not known to the value source
    #[error("unrecognized parameter '{name}'")]
    UnrecognizedParameter { name: String },

    /// No candidate produced a value or a default
    #[error("could not find value for parameter(s): '{}'", names.join(", "))]
    ParameterNotFound { names: Vec<String> },
}

/// Resolve the first candidate of `spec` that yields a value.
///
/// For each candidate, in order:
/// 1. an unknown name fails immediately with `UnrecognizedParameter`;
/// 2. `process(name, value)` is called with the captured value, or `None`
///    when the group is unmatched, and a `Some` result wins;
/// 3. otherwise, if the candidate has a default, `process(name, default)`
///    is called and its result wins, falling back to the literal default;
/// 4. otherwise the next candidate is tried.
///
/// Fails with `ParameterNotFound` listing every attempted name when no
/// candidate resolves.
pub fn resolve_candidates<V, F>(
    spec: &ParameterSpec,
    values: &V,
    process: &F,
) -> Result<String, ResolveError>
where
    V: NamedValues + ?Sized,
    F: Fn(&str, Option<&str>) -> Option<String> + ?Sized,
{
    let mut attempted = Vec::with_capacity(spec.candidates().len());

    for candidate in spec.candidates() {
        let name = candidate.name.as_str();
        let captured = match values.capture(name) {
            Capture::Unknown => {
                return Err(ResolveError::UnrecognizedParameter {
                    name: name.to_string(),
                })
            }
            Capture::Unmatched => None,
            Capture::Matched(value) => Some(value),
        };

        if let Some(value) = process(name, captured) {
            return Ok(value);
        }

        if let Some(default) = &candidate.default {
            trace!(parameter = name, default = %default, "falling back to default");
            return Ok(process(name, Some(default.as_str())).unwrap_or_else(|| default.clone()));
        }

        attempted.push(name.to_string());
    }

    Err(ResolveError::ParameterNotFound { names: attempted })
}
