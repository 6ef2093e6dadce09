//! Fixed-point template interpolation
//!
//! A pass walks the template left to right. Each `{...}` placeholder is
//! replaced by its resolved value and each `(...)` section is interpolated
//! on its own in [`Mode::Optional`] and spliced back without its
//! parentheses. Replacement text is not rescanned within the same pass;
//! passes repeat until one leaves the text unchanged, so placeholders that
//! appear in values or defaults are resolved too.

use tracing::{debug, trace};

use crate::config::InterpolationConfig;
use crate::error::InterpolationError;
use crate::parser::ast::Span;
use crate::parser::{
    find_closing_brace, find_matching_parenthesis, find_next_delimiter, parse_parameter_spec,
    DelimiterKind,
};
use crate::values::NamedValues;

use super::resolver::{resolve_candidates, ResolveError};

/// How a missing parameter is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A missing parameter fails the interpolation
    Required,
    /// A missing parameter collapses the whole text to an empty string
    Optional,
}

/// Interpolates templates against a value source.
///
/// `process` is called for every candidate with its value (or `None`) and
/// may replace or veto it; see [`resolve_candidates`].
pub struct Interpolator<'v, V: ?Sized, F> {
    values: &'v V,
    process: F,
    config: InterpolationConfig,
}

impl<'v, V, F> Interpolator<'v, V, F>
where
    V: NamedValues + ?Sized,
    F: Fn(&str, Option<&str>) -> Option<String>,
{
    pub fn new(values: &'v V, process: F) -> Self {
        Self {
            values,
            process,
            config: InterpolationConfig::default(),
        }
    }

    /// Set the interpolation limits
    pub fn with_config(mut self, config: InterpolationConfig) -> Self {
        self.config = config;
        self
    }

    /// Interpolate `template`, failing on any placeholder that cannot be resolved
    /// outside an optional section.
    pub fn interpolate(&self, template: &str) -> Result<String, InterpolationError> {
        self.interpolate_in(template, Mode::Required)
    }

    /// Interpolate `template` in the given mode.
    ///
    /// In [`Mode::Optional`] an unresolvable placeholder makes the result the
    /// empty string instead of an error.
    pub fn interpolate_in(&self, template: &str, mode: Mode) -> Result<String, InterpolationError> {
        self.expand(template, mode, 0)
    }

    fn expand(&self, text: &str, mode: Mode, depth: usize) -> Result<String, InterpolationError> {
        let max_passes = self.config.max_passes.max(1);
        let mut current = text.to_string();

        for pass in 1..=max_passes {
            let next = match self.pass(&current, depth) {
                Ok(next) => next,
                Err(err) if mode == Mode::Optional && err.is_recoverable() => {
                    trace!(depth, section = %text, error = %err, "optional section collapsed");
                    return Ok(String::new());
                }
                Err(err) => return Err(err),
            };

            if next == current {
                debug!(depth, passes = pass, "fixed point reached");
                return Ok(next);
            }
            current = next;
        }

        debug!(depth, passes = max_passes, "pass limit exceeded");
        Err(InterpolationError::PassLimitExceeded { passes: max_passes })
    }

    /// Rewrite every structural delimiter of `text` once, left to right.
    ///
    /// A delimiter without a closer ends the pass; it and everything after it
    /// are kept as literal text.
    fn pass(&self, text: &str, depth: usize) -> Result<String, InterpolationError> {
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;

        while let Some(delimiter) = find_next_delimiter(&text[cursor..]) {
            let start = cursor + delimiter.offset;
            output.push_str(&text[cursor..start]);
            let rest = &text[start..];

            let close = match delimiter.kind {
                DelimiterKind::Parenthesis => find_matching_parenthesis(rest),
                DelimiterKind::Brace => find_closing_brace(rest),
            };
            let Some(close) = close else {
                trace!(offset = start, "unbalanced delimiter, keeping the rest as text");
                cursor = start;
                break;
            };

            match delimiter.kind {
                DelimiterKind::Parenthesis => {
                    output.push_str(&self.optional_section(rest, close, start, depth)?);
                }
                DelimiterKind::Brace => {
                    let span = start..start + close + 1;
                    output.push_str(&self.placeholder(&rest[1..close], span)?);
                }
            }
            cursor = start + close + 1;
        }

        output.push_str(&text[cursor..]);
        Ok(output)
    }

    /// Interpolate the inside of the section `rest[..=close]` found at `start`
    fn optional_section(
        &self,
        rest: &str,
        close: usize,
        start: usize,
        depth: usize,
    ) -> Result<String, InterpolationError> {
        if depth >= self.config.max_depth {
            return Err(InterpolationError::NestingTooDeep {
                limit: self.config.max_depth,
                span: start..start + close + 1,
            });
        }

        self.expand(&rest[1..close], Mode::Optional, depth + 1)
            .map_err(|err| err.offset_by(start + 1))
    }

    /// Resolve the placeholder body `body` spanning `span`
    fn placeholder(&self, body: &str, span: Span) -> Result<String, InterpolationError> {
        let spec = parse_parameter_spec(body).map_err(|err| err.offset_by(span.start + 1))?;

        match resolve_candidates(&spec, self.values, &self.process) {
            Ok(value) => {
                trace!(placeholder = %spec, value = %value, "placeholder resolved");
                Ok(value)
            }
            Err(ResolveError::UnrecognizedParameter { name }) => {
                Err(InterpolationError::UnrecognizedParameter { name, span })
            }
            Err(ResolveError::ParameterNotFound { names }) => {
                Err(InterpolationError::ParameterNotFound { names, span })
            }
        }
    }
}
