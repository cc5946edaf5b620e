use crate::{ParseFailure, ParsedDocument, Position, Resolution, Resolver, Result, Tokenizer};

/// The query being edited, together with its variables.
///
/// A document is never edited in place: every edit produces a new one via
/// [`QueryDocument::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDocument {
    text: String,
    variables: Option<String>,
}

impl QueryDocument {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variables: None,
        }
    }

    /// Attach variables, pretty-printed when they are valid JSON.
    #[must_use]
    pub fn with_variables(mut self, variables: &str) -> Self {
        self.variables = Some(format_variables(variables));
        self
    }

    /// New version of the document with `text`; variables carry over.
    #[must_use]
    pub fn replace(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variables: self.variables.clone(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn variables(&self) -> Option<&str> {
        self.variables.as_deref()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn parse(&self) -> std::result::Result<ParsedDocument, ParseFailure> {
        ParsedDocument::parse(&self.text)
    }

    /// Resolve the explorer node under `position`
    pub fn resolve_at<T: Tokenizer>(
        &self,
        resolver: &Resolver<T>,
        position: Position,
    ) -> Result<Resolution> {
        resolver.resolve(&self.text, position)
    }

    /// Names of the operations that can be run from this document.
    ///
    /// Empty when the document does not parse.
    #[must_use]
    pub fn operation_names(&self) -> Vec<String> {
        self.parse()
            .map(|parsed| parsed.operation_names().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Pretty-print a variables payload with two-space indentation.
///
/// Keys keep the order they were typed in. Invalid JSON is returned unchanged.
#[must_use]
pub fn format_variables(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| raw.to_string())
}
