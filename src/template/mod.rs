//! Template interpolation
//!
//! Placeholder syntax:
//!
//! ```text
//! {name}              required placeholder
//! {name:default}      placeholder with a literal fallback
//! {name1|name2:x}     fallback chain, tried left to right
//! (text {name})       optional section, empty if a placeholder inside is missing
//! \{  \(              literal delimiters, kept verbatim
//! ```

mod interpolator;
mod resolver;

pub use interpolator::{Interpolator, Mode};
pub use resolver::{resolve_candidates, ResolveError};
