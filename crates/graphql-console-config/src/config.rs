use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root scope of the visual explorer tree when none is configured.
pub const DEFAULT_ROOT_SELECTOR: &str = ".graphiql-explorer-root";

/// Top-level console configuration.
/// Either a single project or several named projects, one per served schema variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsoleConfig {
    /// Single project configuration
    Single(ProjectConfig),
    /// Schema variants keyed by name (e.g. `simple`, `relay`)
    Multi {
        projects: BTreeMap<String, ProjectConfig>,
    },
}

impl ConsoleConfig {
    /// Iterate over all projects.
    /// A single project config yields one item named "default".
    #[must_use]
    pub fn projects(&self) -> Box<dyn Iterator<Item = (&str, &ProjectConfig)> + '_> {
        match self {
            Self::Single(config) => Box::new(std::iter::once(("default", config))),
            Self::Multi { projects } => Box::new(
                projects
                    .iter()
                    .map(|(name, config)| (name.as_str(), config)),
            ),
        }
    }

    /// Look up a project by name.
    #[must_use]
    pub fn get_project(&self, name: &str) -> Option<&ProjectConfig> {
        match self {
            Self::Single(config) if name == "default" => Some(config),
            Self::Single(_) => None,
            Self::Multi { projects } => projects.get(name),
        }
    }

    /// Pick the project to work against.
    ///
    /// With an explicit name the lookup is exact. Without one, single configs
    /// return their only project and multi configs return the first variant
    /// in name order.
    #[must_use]
    pub fn select_project(&self, name: Option<&str>) -> Option<(&str, &ProjectConfig)> {
        match name {
            Some(name) => self
                .projects()
                .find(|(project_name, _)| *project_name == name),
            None => self.projects().next(),
        }
    }

    #[must_use]
    pub const fn is_multi_project(&self) -> bool {
        matches!(self, Self::Multi { .. })
    }
}

/// Configuration for one schema variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Where the schema is served from. Passed through to the transport layer untouched.
    pub schema: SchemaConfig,

    /// Visual explorer settings
    #[serde(default)]
    pub explorer: ExplorerConfig,

    /// Tool-specific extensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

/// Schema source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaConfig {
    /// Single file path or endpoint URL
    Path(String),
    /// Multiple file paths or endpoint URLs
    Paths(Vec<String>),
}

impl SchemaConfig {
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        match self {
            Self::Path(path) => vec![path.as_str()],
            Self::Paths(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    /// Whether any source is an HTTP(S) endpoint rather than a local file
    #[must_use]
    pub fn is_served(&self) -> bool {
        self.sources()
            .iter()
            .any(|s| s.starts_with("http://") || s.starts_with("https://"))
    }
}

/// Settings shared with the visual explorer tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// CSS scope that every definition selector is rooted in
    #[serde(default = "default_root_selector")]
    pub root_selector: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            root_selector: default_root_selector(),
        }
    }
}

fn default_root_selector() -> String {
    DEFAULT_ROOT_SELECTOR.to_string()
}
