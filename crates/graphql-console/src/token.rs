use crate::{LineIndex, Position, Result, Span};
use apollo_parser::{cst::CstNode, Parser, SyntaxElement};

/// Column boundaries `[start, end)` of a token on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBounds {
    pub start: usize,
    pub end: usize,
}

/// Finds the token under a point, the way an editor's "token at" lookup does.
pub trait Tokenizer {
    /// Bounds of the token enclosing `position`, cut to `position.line`.
    ///
    /// Returns `None` when there is no token there (e.g. an empty document).
    fn token_at(&self, text: &str, position: Position) -> Option<TokenBounds>;
}

/// Tokenizer backed by the lossless apollo-parser syntax tree.
///
/// Whitespace, commas and comments are tokens too, so any point inside the
/// text has one. At the boundary between two tokens the one ending at the
/// cursor wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxTokenizer;

impl Tokenizer for SyntaxTokenizer {
    fn token_at(&self, text: &str, position: Position) -> Option<TokenBounds> {
        let line_index = LineIndex::new(text);
        let offset = line_index.position_to_offset(position).ok()?;

        let tree = Parser::new(text).parse();
        let tokens: Vec<Span> = tree
            .document()
            .syntax()
            .descendants_with_tokens()
            .filter_map(|element| match element {
                SyntaxElement::Token(token) => Some(Span::from(token.text_range())),
                SyntaxElement::Node(_) => None,
            })
            .filter(|span| !span.is_empty())
            .collect();

        let token = tokens
            .iter()
            .find(|span| span.start < offset && offset <= span.end)
            .or_else(|| tokens.iter().find(|span| span.start == offset))?;

        let line_start = line_index.line_start(position.line)?;
        let line_len = line_index.line_len(position.line)?;
        let start = if token.start < line_start {
            0
        } else {
            line_index.offset_to_position(token.start).character
        };
        let end_position = line_index.offset_to_position(token.end);
        let end = if end_position.line > position.line {
            line_len
        } else {
            end_position.character
        };

        Some(TokenBounds { start, end })
    }
}

/// Widen a cursor position to the span of the token under it.
///
/// With no token under the cursor the span collapses to the cursor itself.
pub fn token_span_at(text: &str, position: Position, tokenizer: &impl Tokenizer) -> Result<Span> {
    let line_index = LineIndex::new(text);
    let offset = line_index.position_to_offset(position)?;

    let Some(bounds) = tokenizer.token_at(text, position) else {
        return Ok(Span::point(offset));
    };

    let start = line_index.position_to_offset(Position::new(position.line, bounds.start))?;
    let end = line_index.position_to_offset(Position::new(position.line, bounds.end))?;
    Ok(Span::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolveError;

    fn token_text(text: &str, position: Position) -> &str {
        let span = token_span_at(text, position, &SyntaxTokenizer).unwrap();
        &text[span.start..span.end]
    }

    #[test]
    fn test_widens_to_enclosing_token() {
        let text = "query GetUser {\n  user { name }\n}";

        assert_eq!(token_text(text, Position::new(0, 8)), "GetUser");
        assert_eq!(token_text(text, Position::new(1, 4)), "user");
        assert_eq!(token_text(text, Position::new(0, 2)), "query");
    }

    #[test]
    fn test_boundary_prefers_token_left_of_cursor() {
        let text = "query GetUser { a }";

        // Column 5 is between "query" and the following space
        assert_eq!(token_text(text, Position::new(0, 5)), "query");
        // Column 0 has nothing to its left
        assert_eq!(token_text(text, Position::new(0, 0)), "query");
    }

    #[test]
    fn test_whitespace_is_a_token() {
        let text = "query A { a }\n\n   \nquery B { b }";

        let span = token_span_at(text, Position::new(2, 1), &SyntaxTokenizer).unwrap();
        // The whitespace run spans lines 0..3 but is cut to line 2
        assert_eq!(span, Span::new(15, 18));
    }

    #[test]
    fn test_multiline_token_is_cut_to_cursor_line() {
        let text = "query A {\n  a(arg: \"\"\"\n  long\n  text\n  \"\"\")\n}";

        assert_eq!(token_text(text, Position::new(2, 3)), "  long");
        assert_eq!(token_text(text, Position::new(1, 12)), "\"\"\"");
    }

    #[test]
    fn test_empty_document_collapses_to_point() {
        let span = token_span_at("", Position::new(0, 0), &SyntaxTokenizer).unwrap();
        assert_eq!(span, Span::point(0));
    }

    #[test]
    fn test_invalid_line_is_reported() {
        let result = token_span_at("query A { a }", Position::new(3, 0), &SyntaxTokenizer);
        assert!(matches!(
            result,
            Err(ResolveError::InvalidPosition { line: 3, .. })
        ));
    }

    #[test]
    fn test_custom_tokenizer_columns_are_mapped() {
        struct Fixed;

        impl Tokenizer for Fixed {
            fn token_at(&self, _text: &str, _position: Position) -> Option<TokenBounds> {
                Some(TokenBounds { start: 2, end: 5 })
            }
        }

        let span = token_span_at("abc\n  user\n", Position::new(1, 3), &Fixed).unwrap();
        assert_eq!(span, Span::new(6, 9));
    }
}
