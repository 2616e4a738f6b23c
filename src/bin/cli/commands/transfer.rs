use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run_import(app: &App, file: &Path, format: &OutputFormat) -> Result<()> {
    let added = app
        .storage
        .import_file(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    match format {
        OutputFormat::Json => {
            let ids: Vec<u64> = added.iter().map(|w| w.id).collect();
            println!("{}", serde_json::json!({ "imported": added.len(), "ids": ids }));
        }
        OutputFormat::Plain => {
            println!("Imported {} words from {}", added.len(), file.display());
        }
    }

    Ok(())
}

pub fn run_export(app: &App, file: &Path, format: &OutputFormat) -> Result<()> {
    let count = app
        .storage
        .export(file)
        .with_context(|| format!("Failed to export to {}", file.display()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "exported": count, "path": file.to_string_lossy() }));
        }
        OutputFormat::Plain => {
            println!("Exported {} words to {}", count, file.display());
        }
    }

    Ok(())
}
