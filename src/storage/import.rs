//! Word list import formats
//!
//! Two sources are understood:
//! - JSON word lists: `{"words": [{"word": ..., "definition": ..., ...}]}`
//! - CSV vocabulary exports with the column layout
//!   `id, word, en_phonetic, us_phonetic, desc, en_pronunciation,
//!   us_pronunciation, svg_url` and a header row

use crate::words::NewWordList;
use crate::words::{NewWord, WordContent};

use super::word_storage::{Result, StorageError};

const CSV_COLUMNS: usize = 8;

/// Parse a JSON word list
pub fn parse_json_words(content: &str) -> Result<Vec<NewWord>> {
    let list: NewWordList = serde_json::from_str(content)?;
    Ok(list
        .words
        .into_iter()
        .filter(|w| {
            let keep = !w.content.word.trim().is_empty();
            if !keep {
                log::warn!("Skipping word list entry without a word");
            }
            keep
        })
        .collect())
}

/// Parse a CSV vocabulary export
pub fn parse_csv_words(content: &str) -> Result<Vec<NewWord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut words = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Header is line 1
        let line = index + 2;

        if row.len() < CSV_COLUMNS {
            log::warn!(
                "Skipping CSV line {}: expected {} columns, found {}",
                line,
                CSV_COLUMNS,
                row.len()
            );
            continue;
        }

        let word = row[1].trim();
        if word.is_empty() {
            log::warn!("Skipping CSV line {}: empty word", line);
            continue;
        }

        let pronunciation = if row[6].trim().is_empty() { &row[5] } else { &row[6] };

        words.push(NewWord {
            content: WordContent {
                word: word.to_string(),
                phonetic: format!("UK: {}, US: {}", row[2].trim(), row[3].trim()),
                pronunciation: pronunciation.trim().to_string(),
                definition: row[4].trim().to_string(),
                example: String::new(),
                translation: String::new(),
                image_url: row[7].trim().to_string(),
            },
            difficulty: None,
        });
    }

    if words.is_empty() && content.lines().count() > 1 {
        return Err(StorageError::InvalidImport(
            "no usable rows in CSV file".to_string(),
        ));
    }

    Ok(words)
}
