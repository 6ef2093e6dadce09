//! Capture Template - interpolate regex named captures into text templates
//!
//! Templates contain `{name}` placeholders with optional defaults
//! (`{name:default}`), fallback chains (`{a|b}`) and optional sections
//! (`(text {name})`) that disappear when a placeholder inside cannot be
//! resolved. A caller-supplied callback can rewrite or veto every value.
//!
//! # Example
//!
//! ```rust
//! use capture_template::{interpolate_with, CaptureGroups};
//! use regex::Regex;
//!
//! let regex = Regex::new(r"(?P<year>\d{4})-(?P<month>\d{1,2})(-(?P<day>\d{1,2}))?").unwrap();
//! let groups = CaptureGroups::find(&regex, "1992-1-3").unwrap();
//!
//! let result = interpolate_with(
//!     "year: {year}, month: {month}( and maybe day: {day})",
//!     &groups,
//!     |name: &str, value: Option<&str>| match name {
//!         "month" | "day" => value.map(|v| format!("{:0>2}", v)),
//!         _ => value.map(str::to_string),
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(result, "year: 1992, month: 01 and maybe day: 03");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod template;
pub mod values;

pub use config::{ConfigError, InterpolationConfig};
pub use error::InterpolationError;
pub use parser::{
    find_closing_brace, find_matching_parenthesis, find_next_delimiter, parse_parameter_spec,
    Candidate, Delimiter, DelimiterKind, ParameterSpec, Span,
};
pub use template::{resolve_candidates, Interpolator, Mode, ResolveError};
pub use values::{Capture, CaptureGroups, NamedValues, ValueSet};

/// Interpolate a template with values used as-is
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use capture_template::interpolate;
///
/// let mut values = HashMap::new();
/// values.insert("year".to_string(), Some("1992".to_string()));
/// values.insert("day".to_string(), None);
///
/// assert_eq!(interpolate("{year}( day {day})", &values).unwrap(), "1992");
/// assert_eq!(interpolate("{day|year}", &values).unwrap(), "1992");
/// assert!(interpolate("{day}", &values).is_err());
/// ```
pub fn interpolate<V>(template: &str, values: &V) -> Result<String, InterpolationError>
where
    V: NamedValues + ?Sized,
{
    interpolate_with(template, values, keep_value)
}

/// Interpolate a template, passing every candidate value through `process`
///
/// `process(name, value)` may return a replacement, or `None` to treat the
/// value as missing.
pub fn interpolate_with<V, F>(
    template: &str,
    values: &V,
    process: F,
) -> Result<String, InterpolationError>
where
    V: NamedValues + ?Sized,
    F: Fn(&str, Option<&str>) -> Option<String>,
{
    interpolate_with_config(template, values, process, &InterpolationConfig::default())
}

/// Interpolate a template with custom limits
pub fn interpolate_with_config<V, F>(
    template: &str,
    values: &V,
    process: F,
    config: &InterpolationConfig,
) -> Result<String, InterpolationError>
where
    V: NamedValues + ?Sized,
    F: Fn(&str, Option<&str>) -> Option<String>,
{
    Interpolator::new(values, process)
        .with_config(config.clone())
        .interpolate(template)
}

/// Value callback that keeps every value unchanged
pub fn keep_value(_name: &str, value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}
