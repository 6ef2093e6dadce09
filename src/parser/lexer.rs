//! Lexer for template text using logos
//!
//! Templates are mostly literal text; the lexer only distinguishes the
//! structural delimiters from their escaped forms so that `\{` and `\(`
//! never open a placeholder or an optional section.

use logos::Logos;

use super::ast::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Escapes (longer patterns win over the bare backslash)
    #[token("\\{")]
    EscapedBrace,
    #[token("\\(")]
    EscapedParen,

    // Structural delimiters
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    /// A backslash that does not escape a delimiter
    #[token("\\")]
    Backslash,

    /// Run of literal text
    #[regex(r"[^{}()\\]+")]
    Text,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Kind of structural delimiter found by [`find_next_delimiter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    /// `{` opening a placeholder
    Brace,
    /// `(` opening an optional section
    Parenthesis,
}

/// Position and kind of an unescaped opening delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub kind: DelimiterKind,
    /// Byte offset of the delimiter in the scanned text
    pub offset: usize,
}

/// Find the first `{` or `(` that is not immediately preceded by a backslash.
///
/// Returns `None` when the text contains no structural delimiter.
pub fn find_next_delimiter(text: &str) -> Option<Delimiter> {
    lex(text).find_map(|(token, span)| {
        let kind = match token {
            Token::BraceOpen => DelimiterKind::Brace,
            Token::ParenOpen => DelimiterKind::Parenthesis,
            _ => return None,
        };
        Some(Delimiter {
            kind,
            offset: span.start,
        })
    })
}
