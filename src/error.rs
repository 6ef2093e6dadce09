//! Error types for template interpolation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::ast::Span;

/// Errors that can occur while interpolating a template.
///
/// Spans are byte ranges into the template text of the pass that failed. For
/// the first pass that is the template passed by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// A placeholder names a parameter the value source does not know at all.
    /// Always fatal, even inside an optional section.
    #[error("unrecognized parameter '{name}'")]
    UnrecognizedParameter { name: String, span: Span },

    /// Every candidate of a placeholder failed to produce a value
    #[error("could not find value for parameter(s): '{}'", names.join(", "))]
    ParameterNotFound { names: Vec<String>, span: Span },

    /// The text between `{` and `}` is not a valid candidate list
    #[error("malformed placeholder '{{{content}}}': {reason}")]
    MalformedPlaceholder {
        content: String,
        reason: String,
        span: Span,
    },

    /// Optional sections nested deeper than the configured limit
    #[error("optional sections nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },

    /// The template kept changing after the configured number of passes
    #[error("template did not settle after {passes} passes")]
    PassLimitExceeded { passes: usize },
}

impl InterpolationError {
    /// Create a malformed placeholder error
    pub fn malformed(content: impl Into<String>, reason: impl Into<String>, span: Span) -> Self {
        Self::MalformedPlaceholder {
            content: content.into(),
            reason: reason.into(),
            span,
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnrecognizedParameter { span, .. }
            | Self::ParameterNotFound { span, .. }
            | Self::MalformedPlaceholder { span, .. }
            | Self::NestingTooDeep { span, .. } => Some(span),
            Self::PassLimitExceeded { .. } => None,
        }
    }

    /// Parameter names involved in the failure, in the order they were tried
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::UnrecognizedParameter { name, .. } => vec![name.as_str()],
            Self::ParameterNotFound { names, .. } => names.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether an enclosing optional section may swallow this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ParameterNotFound { .. })
    }

    /// Shift the span by `offset` bytes, for errors raised on a substring
    pub(crate) fn offset_by(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UnrecognizedParameter { span, .. }
            | Self::ParameterNotFound { span, .. }
            | Self::MalformedPlaceholder { span, .. }
            | Self::NestingTooDeep { span, .. } => {
                *span = span.start + offset..span.end + offset;
            }
            Self::PassLimitExceeded { .. } => {}
        }
        self
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self
            .span()
            .map(|s| char_span(source, s.clone()))
            .unwrap_or(0..0);

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string());
        if self.span().is_some() {
            report = report.with_label(
                Label::new((filename, span))
                    .with_message(self.label())
                    .with_color(Color::Red),
            );
        }

        let mut buf = Vec::new();
        match report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
        {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::UnrecognizedParameter { name, .. } => {
                format!("'{}' is not a known capture group", name)
            }
            Self::ParameterNotFound { names, .. } if names.len() == 1 => {
                "no value and no default".to_string()
            }
            Self::ParameterNotFound { .. } => "no candidate has a value or default".to_string(),
            Self::MalformedPlaceholder { reason, .. } => reason.clone(),
            Self::NestingTooDeep { .. } => "nesting limit reached here".to_string(),
            Self::PassLimitExceeded { .. } => String::new(),
        }
    }
}

/// Convert a byte span into the character span ariadne labels with.
///
/// Offsets past the end of `source` are clamped to it.
fn char_span(source: &str, span: Span) -> Span {
    let chars_before = |offset: usize| {
        source
            .char_indices()
            .take_while(|(index, _)| *index < offset)
            .count()
    };
    chars_before(span.start)..chars_before(span.end)
}
