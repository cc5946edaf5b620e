use super::{print_diagnostics, read_document};
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use graphql_console::{outline, ParsedDocument, SelectorBuilder};
use std::path::Path;
use std::process;

pub fn run(path: &Path, selectors: &SelectorBuilder, format: OutputFormat) -> Result<()> {
    let text = read_document(path)?;

    let parsed = match ParsedDocument::parse(&text) {
        Ok(parsed) => parsed,
        Err(failure) => {
            match format {
                OutputFormat::Human => print_diagnostics(path, &failure.diagnostics(&text)),
                OutputFormat::Json => {
                    eprintln!("{}", serde_json::json!({ "error": failure.to_string() }));
                }
            }
            process::exit(1);
        }
    };

    let entries = outline(&parsed, selectors);

    match format {
        OutputFormat::Human => {
            for entry in &entries {
                println!(
                    "{:<14} {:<24} {}",
                    entry.kind.to_string().cyan(),
                    entry.name.bold(),
                    entry.selector.dimmed()
                );
            }
            println!(
                "\n{}",
                format!("{} definitions", entries.len()).green()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
