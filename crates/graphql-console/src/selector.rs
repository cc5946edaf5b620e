use crate::DefinitionKind;
use graphql_console_config::{ExplorerConfig, DEFAULT_ROOT_SELECTOR};

/// Builds the selectors the visual explorer tree is addressed by.
///
/// Names are embedded as-is: GraphQL names are restricted to `[_A-Za-z][_0-9A-Za-z]*`.
/// Unnamed definitions of the same kind all share the `unknown` selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBuilder {
    namespace: String,
}

impl SelectorBuilder {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.root_selector.clone())
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<namespace> #<kind>-<name>`
    #[must_use]
    pub fn build(&self, kind: DefinitionKind, name: &str) -> String {
        format!("{} #{}", self.namespace, element_id(kind, name))
    }
}

impl Default for SelectorBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_SELECTOR)
    }
}

/// Element id the explorer gives the node of a definition
#[must_use]
pub fn element_id(kind: DefinitionKind, name: &str) -> String {
    format!("{kind}-{name}")
}
