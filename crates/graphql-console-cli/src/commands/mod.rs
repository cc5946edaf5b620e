pub mod inspect;
pub mod outline;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use graphql_console::{Diagnostic, SelectorBuilder};
use graphql_console_config::{find_config, load_config};
use std::path::{Path, PathBuf};

/// Build the selector builder from the config file, if there is one.
///
/// Without a config file the default explorer root is used.
pub fn load_selectors(
    config_path: Option<PathBuf>,
    project_name: Option<&str>,
) -> Result<SelectorBuilder> {
    let config_path = match config_path {
        Some(path) => Some(path),
        None => {
            let current_dir = std::env::current_dir()?;
            find_config(&current_dir).context("Failed to search for config")?
        }
    };

    let Some(config_path) = config_path else {
        if let Some(name) = project_name {
            bail!("Project '{name}' requested but no GraphQL config file was found");
        }
        tracing::debug!("No config file found, using the default explorer root");
        return Ok(SelectorBuilder::default());
    };

    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let Some((name, project)) = config.select_project(project_name) else {
        bail!("Project '{}' not found", project_name.unwrap_or("default"));
    };
    tracing::debug!(project = name, root = %project.explorer.root_selector, "Using explorer config");

    Ok(SelectorBuilder::from_config(&project.explorer))
}

pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Print diagnostics the way compilers do: `file:line:col: message`
pub fn print_diagnostics(path: &Path, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!(
            "{}:{}:{}: {} {}",
            path.display(),
            diagnostic.range.start.line + 1,
            diagnostic.range.start.character + 1,
            "error:".red().bold(),
            diagnostic.message
        );
    }
}
