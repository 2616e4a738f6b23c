use anyhow::{Context, Result};
use chrono::Utc;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, limit: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = app
        .storage
        .due_words(Utc::now(), Some(limit))
        .context("Failed to load due words")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("Nothing due. Come back later.");
                return Ok(());
            }

            terminal::print_word_table(&words, use_color);
            println!("\n{} words due", words.len());
        }
    }

    Ok(())
}
