//! Data models for the vocabulary scheduler
//!
//! Timestamps crossing the storage boundary are integer epoch seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::SchedulerConfig;
use super::error::{Result, SchedulerError};

pub type WordId = u64;

/// Epoch seconds
pub type Timestamp = i64;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Upper bound on a scheduled interval (about a century)
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// Descriptive content of a word. Never read or written by the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordContent {
    pub word: String,
    pub phonetic: String,
    /// Path or URL of the pronunciation audio
    pub pronunciation: String,
    pub definition: String,
    pub example: String,
    /// Translation of the example sentence
    pub translation: String,
    pub image_url: String,
}

/// A word entering the study set, as produced by imports or manual entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    #[serde(flatten)]
    pub content: WordContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

impl NewWord {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            content: WordContent {
                word: word.into(),
                definition: definition.into(),
                ..Default::default()
            },
            difficulty: None,
        }
    }
}

/// Review state of one vocabulary item.
///
/// All fields are required when deserializing; see [`WordRecord::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: WordId,
    pub word: String,
    pub phonetic: String,
    pub pronunciation: String,
    pub definition: String,
    pub example: String,
    pub translation: String,
    pub image_url: String,
    /// Intrinsic difficulty, MIN_DIFFICULTY..=MAX_DIFFICULTY
    pub difficulty: u8,
    pub last_reviewed: Timestamp,
    pub next_review: Timestamp,
    pub review_count: u32,
    /// SM-2 ease factor
    pub ease_factor: f64,
    /// Days until the next review; 0 means not yet scheduled
    pub interval: u32,
    pub learned: bool,
    pub mastered: bool,
}

impl WordRecord {
    /// Create a record with the default review state
    pub fn new(id: WordId, new_word: NewWord, config: &SchedulerConfig) -> Result<Self> {
        let difficulty = new_word.difficulty.unwrap_or(config.default_difficulty);
        check_difficulty(difficulty)?;

        let mut record = Self {
            id,
            word: String::new(),
            phonetic: String::new(),
            pronunciation: String::new(),
            definition: String::new(),
            example: String::new(),
            translation: String::new(),
            image_url: String::new(),
            difficulty,
            last_reviewed: 0,
            next_review: 0,
            review_count: 0,
            ease_factor: config.default_ease_factor,
            interval: 0,
            learned: false,
            mastered: false,
        };
        record.set_content(new_word.content);
        Ok(record)
    }

    /// Parse a serialized record, requiring every field and checking invariants
    pub fn from_json(json: &str, config: &SchedulerConfig) -> Result<Self> {
        let record: WordRecord = serde_json::from_str(json)
            .map_err(|e| SchedulerError::invalid(format!("malformed word record: {}", e)))?;
        record.validate(config)?;
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| SchedulerError::invalid(format!("unserializable word record: {}", e)))
    }

    /// Check the review-state invariants
    pub fn validate(&self, config: &SchedulerConfig) -> Result<()> {
        check_difficulty(self.difficulty)?;

        if !self.ease_factor.is_finite() || self.ease_factor < config.minimum_ease_factor {
            return Err(SchedulerError::invalid(format!(
                "word {}: ease factor {} is below the minimum {}",
                self.id, self.ease_factor, config.minimum_ease_factor
            )));
        }
        if self.interval > MAX_INTERVAL_DAYS {
            return Err(SchedulerError::invalid(format!(
                "word {}: interval {} exceeds {} days",
                self.id, self.interval, MAX_INTERVAL_DAYS
            )));
        }
        if self.last_reviewed < 0 || self.next_review < 0 {
            return Err(SchedulerError::invalid(format!(
                "word {}: timestamps must not be negative",
                self.id
            )));
        }
        if self.review_count > 0 {
            if self.next_review < self.last_reviewed {
                return Err(SchedulerError::invalid(format!(
                    "word {}: next review precedes last review",
                    self.id
                )));
            }
            if self.interval == 0 {
                return Err(SchedulerError::invalid(format!(
                    "word {}: reviewed word has no interval",
                    self.id
                )));
            }
        }
        if self.mastered && !self.learned {
            return Err(SchedulerError::invalid(format!(
                "word {}: mastered but not learned",
                self.id
            )));
        }
        Ok(())
    }

    /// Never reviewed
    pub fn is_new(&self) -> bool {
        self.review_count == 0
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.is_new() || self.next_review <= now.timestamp()
    }

    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        if self.is_new() {
            return None;
        }
        DateTime::from_timestamp(self.next_review, 0)
    }

    pub fn last_reviewed_at(&self) -> Option<DateTime<Utc>> {
        if self.is_new() {
            return None;
        }
        DateTime::from_timestamp(self.last_reviewed, 0)
    }

    pub fn content(&self) -> WordContent {
        WordContent {
            word: self.word.clone(),
            phonetic: self.phonetic.clone(),
            pronunciation: self.pronunciation.clone(),
            definition: self.definition.clone(),
            example: self.example.clone(),
            translation: self.translation.clone(),
            image_url: self.image_url.clone(),
        }
    }

    /// Replace the descriptive content, leaving review state untouched
    pub fn set_content(&mut self, content: WordContent) {
        self.word = content.word;
        self.phonetic = content.phonetic;
        self.pronunciation = content.pronunciation;
        self.definition = content.definition;
        self.example = content.example;
        self.translation = content.translation;
        self.image_url = content.image_url;
    }

    /// Restore the default review state. This is the only way `mastered`
    /// is ever cleared.
    pub fn reset_progress(&mut self, config: &SchedulerConfig) {
        self.last_reviewed = 0;
        self.next_review = 0;
        self.review_count = 0;
        self.ease_factor = config.default_ease_factor;
        self.interval = 0;
        self.learned = false;
        self.mastered = false;
    }
}

fn check_difficulty(difficulty: u8) -> Result<()> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(SchedulerError::invalid(format!(
            "difficulty {} outside {}..={}",
            difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
        )));
    }
    Ok(())
}

/// On-disk and export container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<WordRecord>,
}

/// Import container: descriptive content only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewWordList {
    pub words: Vec<NewWord>,
}

/// Counts over a collection of words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub total: usize,
    pub learned: usize,
    pub mastered: usize,
    pub to_review: usize,
    #[serde(rename = "new")]
    pub new_words: usize,
}

/// Interval in days each response would produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalPreview {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> WordRecord {
        let mut new_word = NewWord::new("abandon", "to leave behind");
        new_word.content.phonetic = "/əˈbændən/".to_string();
        new_word.content.image_url = "https://example.com/abandon.jpg".to_string();
        WordRecord::new(7, new_word, &SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn test_new_record_default_state() {
        let record = sample_record();
        assert_eq!(record.review_count, 0);
        assert_eq!(record.interval, 0);
        assert_eq!(record.ease_factor, 2.5);
        assert_eq!(record.difficulty, 3);
        assert!(!record.learned);
        assert!(!record.mastered);
        assert!(record.is_new());
        assert!(record.next_review_at().is_none());
    }

    #[test]
    fn test_new_record_rejects_bad_difficulty() {
        let mut new_word = NewWord::new("x", "y");
        new_word.difficulty = Some(9);
        let result = WordRecord::new(1, new_word, &SchedulerConfig::default());
        assert!(matches!(result, Err(SchedulerError::InvalidInput(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let mut record = sample_record();
        record.review_count = 4;
        record.interval = 15;
        record.ease_factor = 2.36;
        record.last_reviewed = 1_700_000_000;
        record.next_review = 1_700_000_000 + 15 * SECONDS_PER_DAY;
        record.learned = true;

        let json = record.to_json().unwrap();
        let parsed = WordRecord::from_json(&json, &SchedulerConfig::default()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_json_uses_boundary_field_names() {
        let value: serde_json::Value =
            serde_json::from_str(&sample_record().to_json().unwrap()).unwrap();
        for key in [
            "id", "word", "phonetic", "pronunciation", "definition", "example",
            "translation", "imageUrl", "difficulty", "lastReviewed", "nextReview",
            "reviewCount", "easeFactor", "interval", "learned", "mastered",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_missing_field_is_invalid_input() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_record().to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("easeFactor");

        let result = WordRecord::from_json(&value.to_string(), &SchedulerConfig::default());
        assert!(matches!(result, Err(SchedulerError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_interval_is_invalid_input() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_record().to_json().unwrap()).unwrap();
        value["interval"] = serde_json::json!(-3);

        let result = WordRecord::from_json(&value.to_string(), &SchedulerConfig::default());
        assert!(matches!(result, Err(SchedulerError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_mastered_without_learned() {
        let mut record = sample_record();
        record.mastered = true;
        assert!(record.validate(&SchedulerConfig::default()).is_err());
    }

    #[test]
    fn test_validate_rejects_low_ease() {
        let mut record = sample_record();
        record.ease_factor = 1.1;
        assert!(record.validate(&SchedulerConfig::default()).is_err());
    }

    #[test]
    fn test_validate_rejects_backwards_schedule() {
        let mut record = sample_record();
        record.review_count = 1;
        record.interval = 1;
        record.last_reviewed = 2_000;
        record.next_review = 1_000;
        assert!(record.validate(&SchedulerConfig::default()).is_err());
    }

    #[test]
    fn test_reset_progress_clears_mastered() {
        let config = SchedulerConfig::default();
        let mut record = sample_record();
        record.review_count = 9;
        record.interval = 40;
        record.ease_factor = 2.8;
        record.learned = true;
        record.mastered = true;

        record.reset_progress(&config);
        assert!(record.is_new());
        assert!(!record.mastered);
        assert!(!record.learned);
        assert_eq!(record.ease_factor, config.default_ease_factor);
        assert_eq!(record.word, "abandon");
    }

    #[test]
    fn test_new_word_flattened_import_shape() {
        let json = r#"{"word":"zeal","definition":"great energy","imageUrl":"z.svg"}"#;
        let new_word: NewWord = serde_json::from_str(json).unwrap();
        assert_eq!(new_word.content.word, "zeal");
        assert_eq!(new_word.content.image_url, "z.svg");
        assert_eq!(new_word.difficulty, None);
    }
}
