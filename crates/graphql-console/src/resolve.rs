use crate::{
    classify, locate, token_span_at, DefinitionKind, ParsedDocument, Position, Result,
    SelectorBuilder, Span, SyntaxTokenizer, Tokenizer,
};
use serde::{Deserialize, Serialize};

/// The explorer node a cursor position resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub kind: DefinitionKind,
    pub name: String,
    /// Selector for the visual explorer tree
    pub selector: String,
    /// Span of the matched definition
    pub span: Span,
}

/// Outcome of a successful resolution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedTarget),
    /// The position is outside every definition (whitespace or a comment between them)
    NotFound,
}

impl Resolution {
    #[must_use]
    pub const fn target(&self) -> Option<&ResolvedTarget> {
        match self {
            Self::Found(target) => Some(target),
            Self::NotFound => None,
        }
    }
}

/// Maps cursor positions to the explorer nodes of the definitions under them.
///
/// Stateless: every call works only on the arguments it is given.
#[derive(Debug, Clone)]
pub struct Resolver<T = SyntaxTokenizer> {
    tokenizer: T,
    selectors: SelectorBuilder,
}

impl Resolver {
    #[must_use]
    pub fn new(selectors: SelectorBuilder) -> Self {
        Self::with_tokenizer(SyntaxTokenizer, selectors)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(SelectorBuilder::default())
    }
}

impl<T: Tokenizer> Resolver<T> {
    #[must_use]
    pub const fn with_tokenizer(tokenizer: T, selectors: SelectorBuilder) -> Self {
        Self {
            tokenizer,
            selectors,
        }
    }

    #[must_use]
    pub const fn selectors(&self) -> &SelectorBuilder {
        &self.selectors
    }

    /// Parse `text` and resolve `position` against it.
    ///
    /// A parse failure stops here: the position is never looked at.
    pub fn resolve(&self, text: &str, position: Position) -> Result<Resolution> {
        let parsed = ParsedDocument::parse(text).inspect_err(|failure| {
            tracing::warn!(error = %failure, "Couldn't parse query document");
        })?;

        self.resolve_parsed(text, &parsed, position)
    }

    /// Resolve `position` against a document already parsed from `text`.
    pub fn resolve_parsed(
        &self,
        text: &str,
        parsed: &ParsedDocument,
        position: Position,
    ) -> Result<Resolution> {
        let span = token_span_at(text, position, &self.tokenizer).inspect_err(|error| {
            tracing::error!(%error, ?position, "Cursor position does not match the document");
        })?;

        let Some(definition) = locate(parsed, span) else {
            tracing::debug!(?position, %span, "No definition at cursor position");
            return Ok(Resolution::NotFound);
        };

        let classification = classify(definition);
        let selector = self.selectors.build(classification.kind, &classification.name);
        tracing::debug!(%selector, ?position, "Resolved cursor position");

        Ok(Resolution::Found(ResolvedTarget {
            kind: classification.kind,
            name: classification.name,
            selector,
            // Only spanned definitions can be located
            span: definition.span().unwrap_or(span),
        }))
    }
}

/// One explorer node per spanned definition, in source order
pub fn outline(parsed: &ParsedDocument, selectors: &SelectorBuilder) -> Vec<ResolvedTarget> {
    parsed
        .definitions()
        .iter()
        .filter_map(|definition| {
            let span = definition.span()?;
            let classification = classify(definition);
            Some(ResolvedTarget {
                selector: selectors.build(classification.kind, &classification.name),
                kind: classification.kind,
                name: classification.name,
                span,
            })
        })
        .collect()
}
