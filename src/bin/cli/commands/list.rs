use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = app.storage.list_words().context("Failed to list words")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words yet. Add some with `add` or `import`.");
                return Ok(());
            }

            terminal::print_word_table(&words, use_color);
            println!("\n{} words total", words.len());
        }
    }

    Ok(())
}

/// List never-reviewed words
pub fn run_new(app: &App, count: usize, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = app.storage.new_words(count).context("Failed to list new words")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No new words to learn.");
                return Ok(());
            }

            for w in &words {
                println!(
                    "{:>5}  {}  {}",
                    w.id,
                    terminal::paint(&w.word, terminal::Color::BOLD, use_color),
                    terminal::truncate(&w.definition, 60)
                );
            }
            println!("\n{} new words", words.len());
        }
    }

    Ok(())
}
