use crate::{Diagnostic, LineIndex, Position, Range};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Why a resolution attempt was aborted.
///
/// A position outside every definition is not an error; see [`crate::Resolution::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The editor handed over a line the document does not have
    #[error("Invalid position: line {line} is out of range (document has {line_count} lines)")]
    InvalidPosition { line: usize, line_count: usize },

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

/// A single syntax error reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset the error points at
    pub offset: usize,
}

/// The document text could not be parsed into definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Document parse error: {}", summary(.errors))]
pub struct ParseFailure {
    pub errors: Vec<SyntaxError>,
}

impl ParseFailure {
    /// Failure for a document that parsed cleanly but holds no definitions
    #[must_use]
    pub fn empty_document() -> Self {
        Self {
            errors: vec![SyntaxError {
                message: "document contains no definitions".to_string(),
                offset: 0,
            }],
        }
    }

    /// Render each syntax error as a zero-width diagnostic in `text`
    #[must_use]
    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        let line_index = LineIndex::new(text);
        self.errors
            .iter()
            .map(|error| {
                let position = line_index.offset_to_position(error.offset);
                Diagnostic::error(
                    Range {
                        start: position,
                        end: position,
                    },
                    error.message.clone(),
                )
                .with_source("graphql-parser")
            })
            .collect()
    }
}

impl ResolveError {
    /// Render the error for the diagnostic channel of the editing surface
    #[must_use]
    pub fn diagnostics(&self, text: &str) -> Vec<Diagnostic> {
        match self {
            Self::InvalidPosition { line, .. } => {
                let position = Position::new(*line, 0);
                vec![Diagnostic::error(
                    Range {
                        start: position,
                        end: position,
                    },
                    self.to_string(),
                )]
            }
            Self::Parse(failure) => failure.diagnostics(text),
        }
    }
}

fn summary(errors: &[SyntaxError]) -> String {
    match errors {
        [] => "unknown syntax error".to_string(),
        [first] => format!("{} at offset {}", first.message, first.offset),
        [first, rest @ ..] => format!(
            "{} at offset {} (and {} more)",
            first.message,
            first.offset,
            rest.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_parse_failure_message() {
        let failure = ParseFailure {
            errors: vec![
                SyntaxError {
                    message: "expected a Name".to_string(),
                    offset: 6,
                },
                SyntaxError {
                    message: "expected R_CURLY".to_string(),
                    offset: 12,
                },
            ],
        };

        assert_eq!(
            ResolveError::from(failure).to_string(),
            "Document parse error: expected a Name at offset 6 (and 1 more)"
        );
    }

    #[test]
    fn test_parse_failure_diagnostics_use_line_and_column() {
        let text = "query {\n  user(\n}";
        let failure = ParseFailure {
            errors: vec![SyntaxError {
                message: "expected a Name".to_string(),
                offset: 16,
            }],
        };

        let diagnostics = failure.diagnostics(text);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].range.start, Position::new(2, 0));
        assert_eq!(diagnostics[0].source, "graphql-parser");
    }

    #[test]
    fn test_invalid_position_diagnostic() {
        let error = ResolveError::InvalidPosition {
            line: 9,
            line_count: 2,
        };

        let diagnostics = error.diagnostics("query { a }\n");
        assert_eq!(diagnostics[0].range.start.line, 9);
        assert!(diagnostics[0].message.contains("line 9"));
    }
}
