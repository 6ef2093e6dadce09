//! Placeholder body parser using chumsky
//!
//! Grammar of the text between `{` and `}`:
//!
//! ```text
//! chain     := candidate ('|' candidate)*
//! candidate := name (':' default)?
//! name      := [^:|]+
//! default   := [^|]*
//! ```
//!
//! Only the first `:` separates name and default, so `{time:12:00}` has the
//! default `12:00`.

use chumsky::error::RichReason;
use chumsky::prelude::*;

use crate::error::InterpolationError;
use crate::parser::ast::{Candidate, ParameterSpec};

/// Parse the inside of a `{...}` placeholder into its fallback chain.
///
/// Spans in the returned error are relative to `body`.
pub fn parse_parameter_spec(body: &str) -> Result<ParameterSpec, InterpolationError> {
    let candidates = chain_parser()
        .parse(body)
        .into_result()
        .map_err(|errs| match errs.first() {
            Some(err) => InterpolationError::malformed(body, describe(err), err.span().into_range()),
            None => InterpolationError::malformed(body, "invalid candidate list", 0..body.len()),
        })?;

    let mut candidates = candidates.into_iter();
    let first = candidates
        .next()
        .ok_or_else(|| InterpolationError::malformed(body, "no candidates", 0..body.len()))?;
    Ok(candidates.fold(ParameterSpec::new(first), ParameterSpec::or))
}

fn chain_parser<'a>() -> impl Parser<'a, &'a str, Vec<Candidate>, extra::Err<Rich<'a, char>>> {
    let name = none_of(":|")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|s: &str| s.to_string());

    let default = just(':')
        .ignore_then(none_of("|").repeated().to_slice())
        .map(|s: &str| s.to_string());

    name.then(default.or_not())
        .map(|(name, default)| Candidate { name, default })
        .separated_by(just('|'))
        .at_least(1)
        .collect::<Vec<_>>()
        .then_ignore(end())
}

/// Human-readable reason for a rejected placeholder body
fn describe(err: &Rich<'_, char>) -> String {
    describe_reason(err.reason())
}

fn describe_reason(reason: &RichReason<'_, char>) -> String {
    match reason {
        RichReason::ExpectedFound { found, .. } => match found {
            Some(c) => format!("expected a parameter name, found {:?}", **c),
            None => "expected a parameter name, found end of placeholder".to_string(),
        },
        RichReason::Custom(msg) => msg.to_string(),
        // Merged alternatives: the first one is the most specific
        RichReason::Many(reasons) => reasons
            .first()
            .map(describe_reason)
            .unwrap_or_else(|| "invalid candidate list".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name() {
        let spec = parse_parameter_spec("year").unwrap();
        assert_eq!(spec.candidates(), &[Candidate::new("year")]);
    }

    #[test]
    fn test_name_with_default() {
        let spec = parse_parameter_spec("p10:default0").unwrap();
        assert_eq!(spec.candidates(), &[Candidate::with_default("p10", "default0")]);
    }

    #[test]
    fn test_fallback_chain_keeps_order() {
        let spec = parse_parameter_spec("p9|p0:x|p3").unwrap();
        assert_eq!(
            spec.candidates(),
            &[
                Candidate::new("p9"),
                Candidate::with_default("p0", "x"),
                Candidate::new("p3"),
            ]
        );
    }

    #[test]
    fn test_default_splits_on_first_colon() {
        let spec = parse_parameter_spec("time:12:00").unwrap();
        assert_eq!(spec.candidates(), &[Candidate::with_default("time", "12:00")]);
    }

    #[test]
    fn test_empty_default() {
        let spec = parse_parameter_spec("day:").unwrap();
        assert_eq!(spec.candidates(), &[Candidate::with_default("day", "")]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let spec = parse_parameter_spec("a|a:x").unwrap();
        assert_eq!(spec.candidates().len(), 2);
    }

    #[test]
    fn test_empty_body_rejected() {
        let err = parse_parameter_spec("").unwrap_err();
        assert!(matches!(err, InterpolationError::MalformedPlaceholder { .. }));
    }

    #[test]
    fn test_empty_candidate_rejected() {
        assert!(parse_parameter_spec("a|").is_err());
        assert!(parse_parameter_spec("a||b").is_err());
        assert!(parse_parameter_spec(":x").is_err());
    }

    #[test]
    fn test_error_span_points_into_body() {
        let err = parse_parameter_spec("a|").unwrap_err();
        let span = err.span().unwrap();
        assert!(span.start <= 2 && span.end <= 2);
    }

    #[test]
    fn test_merged_reasons_use_first() {
        let reason: RichReason<'_, char> = RichReason::Many(vec![
            RichReason::Custom("name expected".to_string()),
            RichReason::Custom("default expected".to_string()),
        ]);
        assert_eq!(describe_reason(&reason), "name expected");

        let empty: RichReason<'_, char> = RichReason::Many(Vec::new());
        assert_eq!(describe_reason(&empty), "invalid candidate list");
    }
}
