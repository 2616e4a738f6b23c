//! JSON file storage for word records
//!
//! Directory structure:
//! ```text
//! {data-dir}/
//! ├── words.json    # {"words": [...]}, every record with its review state
//! └── config.toml   # optional scheduler thresholds
//! ```
//!
//! The store is the single source of truth for review state. It does not
//! lock: concurrent reviews of the same word must be serialized by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::words::{
    apply_review, preview_intervals, IntervalPreview, LearningStats, NewWord, Quality,
    ReviewResponse, SchedulerConfig, SchedulerError, WordContent, WordId, WordList, WordRecord,
};
use crate::words::planner;

use super::import::{parse_csv_words, parse_json_words};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Word not found: {0}")]
    WordNotFound(WordId),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid import: {0}")]
    InvalidImport(String),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// The persistence boundary the scheduler consumes
pub trait WordRepository {
    /// Every stored record, validated
    fn load_all(&self) -> Result<Vec<WordRecord>>;

    /// Insert or replace a record by id
    fn save(&self, record: &WordRecord) -> Result<()>;
}

/// Storage manager for word records
pub struct WordStorage {
    data_dir: PathBuf,
    config: SchedulerConfig,
}

impl WordRepository for WordStorage {
    fn load_all(&self) -> Result<Vec<WordRecord>> {
        let path = self.words_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let list: WordList = serde_json::from_str(&content)
            .map_err(|e| SchedulerError::invalid(format!("malformed word list: {}", e)))?;
        for record in &list.words {
            record.validate(&self.config)?;
        }
        Ok(list.words)
    }

    fn save(&self, record: &WordRecord) -> Result<()> {
        record.validate(&self.config)?;

        let mut words = self.load_all()?;
        match words.iter().position(|w| w.id == record.id) {
            Some(pos) => words[pos] = record.clone(),
            None => words.push(record.clone()),
        }
        self.write_all(words)
    }
}

impl WordStorage {
    /// Create a storage rooted at `data_dir`, creating the directory
    pub fn new(data_dir: PathBuf, config: SchedulerConfig) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir, config })
    }

    /// Default data directory (e.g. ~/.local/share/wordmaster)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("wordmaster"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    fn words_path(&self) -> PathBuf {
        self.data_dir.join("words.json")
    }

    fn write_all(&self, mut words: Vec<WordRecord>) -> Result<()> {
        words.sort_by_key(|w| w.id);
        let list = WordList { words };
        fs::write(self.words_path(), serde_json::to_string_pretty(&list)?)?;
        Ok(())
    }

    // ===== Word Operations =====

    /// List all words ordered by id
    pub fn list_words(&self) -> Result<Vec<WordRecord>> {
        let mut words = self.load_all()?;
        words.sort_by_key(|w| w.id);
        Ok(words)
    }

    /// Get a specific word
    pub fn get_word(&self, id: WordId) -> Result<WordRecord> {
        self.load_all()?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(StorageError::WordNotFound(id))
    }

    /// Add a word with the default review state
    pub fn add_word(&self, new_word: NewWord) -> Result<WordRecord> {
        let mut added = self.add_words(vec![new_word])?;
        added.pop().ok_or_else(|| {
            StorageError::InvalidImport("word was not added".to_string())
        })
    }

    /// Add several words at once, assigning consecutive ids
    pub fn add_words(&self, new_words: Vec<NewWord>) -> Result<Vec<WordRecord>> {
        let mut words = self.load_all()?;
        let mut next_id = words.iter().map(|w| w.id).max().unwrap_or(0) + 1;

        // Build everything before touching the file
        let mut added = Vec::with_capacity(new_words.len());
        for new_word in new_words {
            added.push(WordRecord::new(next_id, new_word, &self.config)?);
            next_id += 1;
        }

        words.extend(added.iter().cloned());
        self.write_all(words)?;

        log::info!("Added {} word(s)", added.len());
        Ok(added)
    }

    /// Replace the descriptive content of a word. Review state is untouched.
    pub fn update_content(&self, id: WordId, content: WordContent) -> Result<WordRecord> {
        let mut record = self.get_word(id)?;
        record.set_content(content);
        self.save(&record)?;
        Ok(record)
    }

    /// Delete a word
    pub fn delete_word(&self, id: WordId) -> Result<()> {
        let mut words = self.load_all()?;
        let before = words.len();
        words.retain(|w| w.id != id);
        if words.len() == before {
            return Err(StorageError::WordNotFound(id));
        }

        self.write_all(words)?;
        log::info!("Deleted word {}", id);
        Ok(())
    }

    /// Restore a word to the default review state, clearing learned/mastered
    pub fn reset_word(&self, id: WordId) -> Result<WordRecord> {
        let mut record = self.get_word(id)?;
        record.reset_progress(&self.config);
        self.save(&record)?;
        log::info!("Reset progress of word {}", id);
        Ok(record)
    }

    // ===== Review Operations =====

    /// Words due for review at `now`, in review order
    pub fn due_words(&self, now: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<WordRecord>> {
        let words = self.load_all()?;
        Ok(planner::due_words(&words, now, limit).cloned().collect())
    }

    /// Never-reviewed words, at most `count`
    pub fn new_words(&self, count: usize) -> Result<Vec<WordRecord>> {
        let words = self.load_all()?;
        Ok(planner::new_words_to_learn(&words, count)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Record a review. On error the stored word is left unchanged.
    pub fn submit_review(
        &self,
        id: WordId,
        response: ReviewResponse,
        now: DateTime<Utc>,
    ) -> Result<WordRecord> {
        self.submit_quality(id, response.quality(), now)
    }

    /// Record a review graded directly on the 0-5 scale
    pub fn submit_quality(&self, id: WordId, quality: Quality, now: DateTime<Utc>) -> Result<WordRecord> {
        let record = self.get_word(id)?;
        let updated = apply_review(&record, quality, now, &self.config)?;
        self.save(&updated)?;

        log::info!(
            "Reviewed word {} '{}' (q={}): next review in {} day(s)",
            updated.id,
            updated.word,
            quality,
            updated.interval
        );
        Ok(updated)
    }

    /// Intervals each response would give a word right now
    pub fn preview(&self, id: WordId, now: DateTime<Utc>) -> Result<IntervalPreview> {
        let record = self.get_word(id)?;
        Ok(preview_intervals(&record, now, &self.config)?)
    }

    /// Learning statistics over all words
    pub fn stats(&self, now: DateTime<Utc>) -> Result<LearningStats> {
        let words = self.load_all()?;
        Ok(planner::learning_stats(&words, now))
    }

    // ===== Import / Export =====

    /// Import a `.csv` vocabulary export or a JSON word list
    pub fn import_file(&self, path: &Path) -> Result<Vec<WordRecord>> {
        let content = fs::read_to_string(path)?;
        let is_csv = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

        let new_words = if is_csv {
            parse_csv_words(&content)?
        } else {
            parse_json_words(&content)?
        };

        log::info!("Importing {} word(s) from {:?}", new_words.len(), path);
        self.add_words(new_words)
    }

    /// Export every word with its review state. Returns the number exported.
    pub fn export(&self, path: &Path) -> Result<usize> {
        let words = self.list_words()?;
        let count = words.len();
        fs::write(path, serde_json::to_string_pretty(&WordList { words })?)?;

        log::info!("Exported {} word(s) to {:?}", count, path);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (WordStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            WordStorage::new(temp_dir.path().to_path_buf(), SchedulerConfig::default()).unwrap();
        (storage, temp_dir)
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_add_and_get_word() {
        let (storage, _temp) = create_test_storage();

        let first = storage.add_word(NewWord::new("benign", "gentle")).unwrap();
        let second = storage.add_word(NewWord::new("cogent", "convincing")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.is_new());

        let retrieved = storage.get_word(2).unwrap();
        assert_eq!(retrieved, second);
    }

    #[test]
    fn test_missing_word() {
        let (storage, _temp) = create_test_storage();
        assert!(matches!(storage.get_word(42), Err(StorageError::WordNotFound(42))));
        assert!(matches!(storage.delete_word(42), Err(StorageError::WordNotFound(42))));
    }

    #[test]
    fn test_ids_continue_after_delete() {
        let (storage, _temp) = create_test_storage();
        storage.add_word(NewWord::new("a", "1")).unwrap();
        storage.add_word(NewWord::new("b", "2")).unwrap();
        storage.delete_word(1).unwrap();

        let next = storage.add_word(NewWord::new("c", "3")).unwrap();
        assert_eq!(next.id, 3);
        assert_eq!(storage.list_words().unwrap().len(), 2);
    }

    #[test]
    fn test_review_loop_persists() {
        let (storage, _temp) = create_test_storage();
        let word = storage.add_word(NewWord::new("diligent", "hard-working")).unwrap();

        let mut now = t0();
        for response in [ReviewResponse::Good, ReviewResponse::Easy, ReviewResponse::Easy] {
            let updated = storage.submit_review(word.id, response, now).unwrap();
            now += Duration::days(updated.interval as i64);
        }

        let stored = storage.get_word(word.id).unwrap();
        assert_eq!(stored.review_count, 3);
        assert_eq!(stored.interval, 16);
        assert!(stored.learned);
        assert!(!stored.mastered);

        let updated = storage.submit_review(word.id, ReviewResponse::Easy, now).unwrap();
        assert!(updated.mastered);
        assert_eq!(storage.get_word(word.id).unwrap(), updated);
    }

    #[test]
    fn test_failed_review_leaves_record_unchanged() {
        let (storage, _temp) = create_test_storage();
        let word = storage.add_word(NewWord::new("erudite", "learned")).unwrap();
        let reviewed = storage.submit_review(word.id, ReviewResponse::Good, t0()).unwrap();

        let result = storage.submit_review(word.id, ReviewResponse::Good, t0() - Duration::days(3));
        assert!(matches!(
            result,
            Err(StorageError::Scheduler(SchedulerError::InvalidInput(_)))
        ));
        assert_eq!(storage.get_word(word.id).unwrap(), reviewed);
    }

    #[test]
    fn test_due_and_new_words() {
        let (storage, _temp) = create_test_storage();
        storage.add_word(NewWord::new("a", "1")).unwrap();
        storage.add_word(NewWord::new("b", "2")).unwrap();
        storage.submit_review(1, ReviewResponse::Good, t0()).unwrap();

        let due = storage.due_words(t0(), None).unwrap();
        assert_eq!(due.iter().map(|w| w.id).collect::<Vec<_>>(), vec![2]);

        let due = storage.due_words(t0() + Duration::days(1), None).unwrap();
        assert_eq!(due.len(), 2);

        let fresh = storage.new_words(10).unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, 2);
    }

    #[test]
    fn test_update_content_keeps_review_state() {
        let (storage, _temp) = create_test_storage();
        let word = storage.add_word(NewWord::new("fervent", "passionate")).unwrap();
        let reviewed = storage.submit_review(word.id, ReviewResponse::Easy, t0()).unwrap();

        let mut content = reviewed.content();
        content.example = "a fervent supporter".to_string();
        let updated = storage.update_content(word.id, content).unwrap();

        assert_eq!(updated.example, "a fervent supporter");
        assert_eq!(updated.review_count, reviewed.review_count);
        assert_eq!(updated.next_review, reviewed.next_review);
    }

    #[test]
    fn test_reset_word() {
        let (storage, _temp) = create_test_storage();
        let word = storage.add_word(NewWord::new("gregarious", "sociable")).unwrap();

        let mut now = t0();
        for _ in 0..4 {
            let updated = storage.submit_review(word.id, ReviewResponse::Easy, now).unwrap();
            now += Duration::days(updated.interval as i64);
        }
        assert!(storage.get_word(word.id).unwrap().mastered);

        let reset = storage.reset_word(word.id).unwrap();
        assert!(reset.is_new());
        assert!(!reset.mastered);
        assert_eq!(storage.get_word(word.id).unwrap(), reset);
    }

    #[test]
    fn test_load_rejects_invalid_records() {
        let (storage, temp) = create_test_storage();
        fs::write(
            temp.path().join("words.json"),
            r#"{"words": [{"id": 1, "word": "x"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            storage.load_all(),
            Err(StorageError::Scheduler(SchedulerError::InvalidInput(_)))
        ));

        let word = WordRecord::new(1, NewWord::new("x", "y"), &SchedulerConfig::default()).unwrap();
        let mut value = serde_json::to_value(&word).unwrap();
        value["difficulty"] = serde_json::json!(0);
        fs::write(
            temp.path().join("words.json"),
            serde_json::json!({ "words": [value] }).to_string(),
        )
        .unwrap();

        assert!(matches!(
            storage.load_all(),
            Err(StorageError::Scheduler(SchedulerError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_load_rejects_missing_ease_factor() {
        let (storage, temp) = create_test_storage();
        let word = WordRecord::new(1, NewWord::new("x", "y"), &SchedulerConfig::default()).unwrap();
        let mut value = serde_json::to_value(&word).unwrap();
        value.as_object_mut().unwrap().remove("easeFactor");
        fs::write(
            temp.path().join("words.json"),
            serde_json::json!({ "words": [value] }).to_string(),
        )
        .unwrap();

        assert!(matches!(
            storage.load_all(),
            Err(StorageError::Scheduler(SchedulerError::InvalidInput(_)))
        ));
        assert!(storage.get_word(1).is_err());
    }

    #[test]
    fn test_import_and_export() {
        let (storage, temp) = create_test_storage();

        let json_path = temp.path().join("list.json");
        fs::write(
            &json_path,
            r#"{"words": [{"word": "hubris", "definition": "excessive pride"}]}"#,
        )
        .unwrap();
        let csv_path = temp.path().join("list.CSV");
        fs::write(
            &csv_path,
            "id,word,en,us,desc,en_audio,us_audio,svg\n1,inept,/ɪˈnept/,/ɪˈnept/,clumsy,,,\n",
        )
        .unwrap();

        let imported = storage.import_file(&json_path).unwrap();
        assert_eq!(imported[0].id, 1);
        let imported = storage.import_file(&csv_path).unwrap();
        assert_eq!(imported[0].id, 2);
        assert_eq!(imported[0].phonetic, "UK: /ɪˈnept/, US: /ɪˈnept/");

        let export_path = temp.path().join("export.json");
        assert_eq!(storage.export(&export_path).unwrap(), 2);

        let exported: WordList =
            serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
        assert_eq!(exported.words, storage.list_words().unwrap());
    }

    #[test]
    fn test_stats() {
        let (storage, _temp) = create_test_storage();
        storage.add_word(NewWord::new("a", "1")).unwrap();
        storage.add_word(NewWord::new("b", "2")).unwrap();
        storage.submit_review(1, ReviewResponse::Good, t0()).unwrap();

        let stats = storage.stats(t0() + Duration::days(2)).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.new_words, 1);
        assert_eq!(stats.to_review, 1);
        assert_eq!(stats.learned, 0);
    }
}
