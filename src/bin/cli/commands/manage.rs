use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run_reset(app: &App, id: u64, format: &OutputFormat) -> Result<()> {
    let record = app.storage.reset_word(id).context("Failed to reset word")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            println!("Reset \"{}\" to unreviewed", record.word);
        }
    }

    Ok(())
}

pub fn run_delete(app: &App, id: u64, format: &OutputFormat) -> Result<()> {
    app.storage.delete_word(id).context("Failed to delete word")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": id }));
        }
        OutputFormat::Plain => {
            println!("Deleted word {}", id);
        }
    }

    Ok(())
}
