use crate::{ParseFailure, Span, SyntaxError};
use apollo_parser::{
    cst::{self, CstNode},
    Parser, SyntaxElement, SyntaxNode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDefinition {
    /// Always present in a well-formed document
    pub name: Option<String>,
    pub type_condition: Option<String>,
    pub span: Option<Span>,
}

/// A top-level definition of a query document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    /// Type system definitions and extensions; never targeted by the explorer
    Other { span: Option<Span> },
}

impl Definition {
    /// Source range of the definition, if the parser attached one
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Operation(op) => op.span,
            Self::Fragment(frag) => frag.span,
            Self::Other { span } => *span,
        }
    }
}

/// A successfully parsed document: its top-level definitions in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    definitions: Vec<Definition>,
}

impl ParsedDocument {
    #[must_use]
    pub const fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Parse `text` into definitions.
    ///
    /// Any syntax error fails the whole parse, as does a document without a
    /// single definition. Every definition of a successful parse carries a span
    /// from its first to its last significant token.
    pub fn parse(text: &str) -> Result<Self, ParseFailure> {
        let tree = Parser::new(text).parse();

        let errors: Vec<SyntaxError> = tree
            .errors()
            .map(|error| SyntaxError {
                message: error.message().to_string(),
                offset: error.index(),
            })
            .collect();
        if !errors.is_empty() {
            return Err(ParseFailure { errors });
        }

        let definitions: Vec<Definition> = tree
            .document()
            .definitions()
            .map(|definition| lower_definition(&definition))
            .collect();
        if definitions.is_empty() {
            return Err(ParseFailure::empty_document());
        }

        Ok(Self { definitions })
    }

    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Names of the operations that can be run, in source order
    pub fn operation_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Operation(op) => op.name.as_deref(),
            _ => None,
        })
    }
}

fn lower_definition(definition: &cst::Definition) -> Definition {
    let span = significant_span(definition.syntax());

    match definition {
        cst::Definition::OperationDefinition(op) => {
            let operation_type = match op.operation_type() {
                Some(op_type) if op_type.mutation_token().is_some() => OperationType::Mutation,
                Some(op_type) if op_type.subscription_token().is_some() => {
                    OperationType::Subscription
                }
                // Anonymous `{ ... }` shorthand is a query
                _ => OperationType::Query,
            };

            Definition::Operation(OperationDefinition {
                operation_type,
                name: op.name().map(|name| name.text().to_string()),
                span,
            })
        }
        cst::Definition::FragmentDefinition(frag) => Definition::Fragment(FragmentDefinition {
            name: frag
                .fragment_name()
                .and_then(|fragment_name| fragment_name.name())
                .map(|name| name.text().to_string()),
            type_condition: frag
                .type_condition()
                .and_then(|type_condition| type_condition.named_type())
                .and_then(|named_type| named_type.name())
                .map(|name| name.text().to_string()),
            span,
        }),
        _ => Definition::Other { span },
    }
}

/// Span from the first to the last token of `node` that is not whitespace, a
/// comma, or a comment.
fn significant_span(node: &SyntaxNode) -> Option<Span> {
    let mut significant = node
        .descendants_with_tokens()
        .filter_map(|element| match element {
            SyntaxElement::Token(token) if !is_ignored_token(token.text()) => {
                Some(Span::from(token.text_range()))
            }
            _ => None,
        });

    let first = significant.next()?;
    let last = significant.last().unwrap_or(first);
    Some(Span::new(first.start, last.end))
}

/// Whitespace, commas and comments are insignificant in GraphQL
pub(crate) fn is_ignored_token(text: &str) -> bool {
    text.is_empty()
        || text == ","
        || text.starts_with('#')
        || text.chars().all(|ch| ch.is_whitespace() || ch == '\u{feff}')
}
