use crate::{ConfigError, ConsoleConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".graphqlrc.yml",
    ".graphqlrc.yaml",
    ".graphqlrc.json",
    ".graphqlrc",
    "graphql.config.yml",
    "graphql.config.yaml",
    "graphql.config.json",
];

/// Find a config file by walking up the directory tree from `start_dir`.
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    for dir in start_dir.ancestors() {
        if let Some(found) = CONFIG_FILES
            .iter()
            .map(|file_name| dir.join(file_name))
            .find(|candidate| candidate.is_file())
        {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Load a config from `path`, picking the format from the file name.
pub fn load_config(path: &Path) -> Result<ConsoleConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string.
/// The path is only used for format detection and error messages.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<ConsoleConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        // .graphqlrc without extension: try YAML first, then JSON
        "" if file_name == ".graphqlrc" => {
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<ConsoleConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<ConsoleConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

fn validate_config(config: &ConsoleConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    for (project_name, project) in config.projects() {
        let sources = project.schema.sources();
        if sources.is_empty() {
            return Err(invalid(format!(
                "Project '{project_name}' has empty schema configuration"
            )));
        }

        if sources.iter().any(|source| source.trim().is_empty()) {
            return Err(invalid(format!(
                "Project '{project_name}' has empty schema path"
            )));
        }

        if project.explorer.root_selector.trim().is_empty() {
            return Err(invalid(format!(
                "Project '{project_name}' has empty explorer root selector"
            )));
        }
    }

    Ok(())
}
