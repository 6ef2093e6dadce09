//! Parser for the placeholder template syntax

pub mod ast;
mod grammar;
pub mod lexer;
mod matcher;

pub use ast::*;
pub use grammar::parse_parameter_spec;
pub use lexer::{find_next_delimiter, Delimiter, DelimiterKind};
pub use matcher::{find_closing_brace, find_matching_parenthesis};
