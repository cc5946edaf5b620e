mod config;
mod error;
mod loader;

pub use config::{
    ConsoleConfig, ExplorerConfig, ProjectConfig, SchemaConfig, DEFAULT_ROOT_SELECTOR,
};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
