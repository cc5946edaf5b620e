use crate::{Definition, OperationType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stand-in for a missing definition name
pub const UNKNOWN_NAME: &str = "unknown";

/// What kind of node the explorer shows for a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Query,
    Mutation,
    Subscription,
    Fragment,
    Unknown,
}

impl DefinitionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
            Self::Fragment => "fragment",
            Self::Unknown => "unknown",
        }
    }
}

impl From<OperationType> for DefinitionKind {
    fn from(operation_type: OperationType) -> Self {
        match operation_type {
            OperationType::Query => Self::Query,
            OperationType::Mutation => Self::Mutation,
            OperationType::Subscription => Self::Subscription,
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: DefinitionKind,
    /// Definition name, or [`UNKNOWN_NAME`]
    pub name: String,
}

/// Derive the explorer kind and name of a definition.
#[must_use]
pub fn classify(definition: &Definition) -> Classification {
    let (kind, name) = match definition {
        Definition::Operation(op) => (DefinitionKind::from(op.operation_type), op.name.as_deref()),
        // A nameless fragment only comes out of a degraded tree
        Definition::Fragment(frag) => (DefinitionKind::Fragment, frag.name.as_deref()),
        Definition::Other { .. } => (DefinitionKind::Unknown, None),
    };

    Classification {
        kind,
        name: name.unwrap_or(UNKNOWN_NAME).to_string(),
    }
}
