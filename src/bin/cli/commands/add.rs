use anyhow::{Context, Result};

use wordmaster_lib::words::{NewWord, WordContent};

use crate::app::App;
use crate::OutputFormat;

/// Fields collected from the command line
pub struct WordEntry {
    pub word: String,
    pub definition: String,
    pub phonetic: Option<String>,
    pub example: Option<String>,
    pub translation: Option<String>,
    pub image_url: Option<String>,
    pub difficulty: Option<u8>,
}

pub fn run(app: &App, entry: WordEntry, format: &OutputFormat) -> Result<()> {
    let new_word = NewWord {
        content: WordContent {
            word: entry.word,
            definition: entry.definition,
            phonetic: entry.phonetic.unwrap_or_default(),
            example: entry.example.unwrap_or_default(),
            translation: entry.translation.unwrap_or_default(),
            image_url: entry.image_url.unwrap_or_default(),
            ..Default::default()
        },
        difficulty: entry.difficulty,
    };

    let record = app.storage.add_word(new_word).context("Failed to add word")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            println!("Added \"{}\"", record.word);
            println!("  ID: {}", record.id);
            println!("  Difficulty: {}", record.difficulty);
        }
    }

    Ok(())
}
