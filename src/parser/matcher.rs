//! Closing-delimiter matching for optional sections and placeholders

use super::lexer::{lex, Token};

/// Find the `)` that closes the `(` at the start of `text`.
///
/// Nested pairs are skipped, so in `(a(b)c)d)` the match is the second `)`.
/// An escaped `\(` does not open a nested pair, but every `)` closes one.
/// Returns `None` if `text` does not start with an unescaped `(` or the
/// section is never closed.
pub fn find_matching_parenthesis(text: &str) -> Option<usize> {
    let mut tokens = lex(text);
    match tokens.next() {
        Some((Token::ParenOpen, span)) if span.start == 0 => {}
        _ => return None,
    }

    let mut depth = 0usize;
    for (token, span) in tokens {
        match token {
            Token::ParenOpen => depth += 1,
            Token::ParenClose if depth == 0 => return Some(span.start),
            Token::ParenClose => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Find the `}` that closes the `{` at the start of `text`.
///
/// Placeholders do not nest: the first `}` is always the match.
pub fn find_closing_brace(text: &str) -> Option<usize> {
    if !text.starts_with('{') {
        return None;
    }
    text[1..].find('}').map(|index| index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_parenthesis() {
        assert_eq!(
            find_matching_parenthesis("(text-(some) text))-some text()"),
            Some(17)
        );
    }

    #[test]
    fn test_first_close_after_nested_pair() {
        assert_eq!(find_matching_parenthesis("(text-(some) t)ext))"), Some(14));
    }

    #[test]
    fn test_unclosed_parenthesis() {
        assert_eq!(find_matching_parenthesis("(text-(some) text"), None);
    }

    #[test]
    fn test_escaped_open_parenthesis_ignored() {
        assert_eq!(find_matching_parenthesis(r"(a\(b)c"), Some(5));
    }

    #[test]
    fn test_backslash_does_not_escape_closing_parenthesis() {
        assert_eq!(find_matching_parenthesis(r"(a\)b)"), Some(3));
    }

    #[test]
    fn test_requires_leading_parenthesis() {
        assert_eq!(find_matching_parenthesis("x(a)"), None);
        assert_eq!(find_matching_parenthesis(r"\(a)"), None);
        assert_eq!(find_matching_parenthesis(""), None);
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(find_matching_parenthesis("()"), Some(1));
    }

    #[test]
    fn test_closing_brace() {
        assert_eq!(find_closing_brace("{param0}"), Some(7));
        assert_eq!(find_closing_brace("{a}{b}"), Some(2));
    }

    #[test]
    fn test_closing_brace_not_found() {
        assert_eq!(find_closing_brace("{param0"), None);
        assert_eq!(find_closing_brace("param0}"), None);
    }
}
