use super::{print_diagnostics, read_document};
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use graphql_console::{Position, Resolution, Resolver, SelectorBuilder};
use std::path::Path;
use std::process;

pub fn run(
    path: &Path,
    line: usize,
    column: usize,
    selectors: SelectorBuilder,
    format: OutputFormat,
) -> Result<()> {
    let text = read_document(path)?;
    let resolver = Resolver::new(selectors);
    let position = Position::new(line, column);

    match resolver.resolve(&text, position) {
        Ok(Resolution::Found(target)) => match format {
            OutputFormat::Human => {
                println!(
                    "{} {}",
                    target.kind.to_string().cyan(),
                    target.name.bold()
                );
                println!("  selector: {}", target.selector);
                println!("  span:     {}", target.span);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "found": true, "target": target })
                );
            }
        },
        Ok(Resolution::NotFound) => match format {
            OutputFormat::Human => {
                println!(
                    "{}",
                    format!("No definition at {line}:{column}").yellow()
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "found": false }));
            }
        },
        Err(e) => {
            match format {
                OutputFormat::Human => print_diagnostics(path, &e.diagnostics(&text)),
                OutputFormat::Json => {
                    eprintln!(
                        "{}",
                        serde_json::json!({
                            "error": e.to_string(),
                            "diagnostics": e.diagnostics(&text),
                        })
                    );
                }
            }
            process::exit(1);
        }
    }

    Ok(())
}
