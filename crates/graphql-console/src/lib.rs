//! Cursor-to-definition resolution for GraphQL query documents.
//!
//! Given the text of a query document and a cursor position, find the
//! top-level operation or fragment under the cursor and the selector of its
//! node in the visual explorer tree:
//!
//! ```
//! use graphql_console::{Position, Resolution, Resolver};
//!
//! let text = "query GetUser {\n  user { id }\n}";
//! let resolution = Resolver::default().resolve(text, Position::new(1, 3)).unwrap();
//!
//! let Resolution::Found(target) = resolution else { panic!("expected a target") };
//! assert_eq!(target.selector, ".graphiql-explorer-root #query-GetUser");
//! ```

mod classify;
mod diagnostics;
mod document;
mod error;
mod line_index;
mod locate;
mod resolve;
mod selector;
mod span;
mod syntax;
mod token;

pub use classify::{classify, Classification, DefinitionKind, UNKNOWN_NAME};
pub use diagnostics::{Diagnostic, Position, Range, Severity};
pub use document::{format_variables, QueryDocument};
pub use error::{ParseFailure, ResolveError, Result, SyntaxError};
pub use line_index::LineIndex;
pub use locate::locate;
pub use resolve::{outline, Resolution, ResolvedTarget, Resolver};
pub use selector::{element_id, SelectorBuilder};
pub use span::Span;
pub use syntax::{
    Definition, FragmentDefinition, OperationDefinition, OperationType, ParsedDocument,
};
pub use token::{token_span_at, SyntaxTokenizer, TokenBounds, Tokenizer};

// Re-export common types from dependencies
pub use graphql_console_config::{ExplorerConfig, DEFAULT_ROOT_SELECTOR};
