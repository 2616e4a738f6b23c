mod import;
mod word_storage;

pub use import::{parse_csv_words, parse_json_words};
pub use word_storage::{Result, StorageError, WordRepository, WordStorage};
