//! Tunable scheduler thresholds
//!
//! Every constant the algorithm uses lives here so it can be tuned from
//! `config.toml` without touching the algorithm itself.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{MAX_DIFFICULTY, MIN_DIFFICULTY};

pub const DEFAULT_PASSING_THRESHOLD: u8 = 3;
pub const DEFAULT_MINIMUM_EASE_FACTOR: f64 = 1.3;
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const DEFAULT_LAPSE_PENALTY: f64 = 0.2;
pub const DEFAULT_RELEARN_INTERVAL_DAYS: u32 = 1;
pub const DEFAULT_FIRST_INTERVAL_DAYS: u32 = 1;
pub const DEFAULT_SECOND_INTERVAL_DAYS: u32 = 6;
pub const DEFAULT_LEARNED_REVIEW_THRESHOLD: u32 = 3;
pub const DEFAULT_MASTERED_INTERVAL_DAYS: u32 = 21;
pub const DEFAULT_DIFFICULTY: u8 = 3;
pub const DEFAULT_EASY_STREAK_INTERVAL_DAYS: u32 = 6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Lowest quality (0-5) that counts as a successful recall
    pub passing_threshold: u8,
    /// Floor for the ease factor
    pub minimum_ease_factor: f64,
    /// Ease factor given to new words; also the bar for "learned"
    pub default_ease_factor: f64,
    /// Ease factor deducted on a lapse
    pub lapse_penalty: f64,
    /// Interval after a lapse (days)
    pub relearn_interval_days: u32,
    /// Interval after the first successful review (days)
    pub first_interval_days: u32,
    /// Interval after the second successful review (days)
    pub second_interval_days: u32,
    /// Reviews required before a word can count as learned
    pub learned_review_threshold: u32,
    /// Interval at which a learned word counts as mastered (days)
    pub mastered_interval_days: u32,
    /// Difficulty assigned to imported words that carry none
    pub default_difficulty: u8,
    /// A perfect recall at or beyond this interval eases difficulty
    pub easy_streak_interval_days: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            passing_threshold: DEFAULT_PASSING_THRESHOLD,
            minimum_ease_factor: DEFAULT_MINIMUM_EASE_FACTOR,
            default_ease_factor: DEFAULT_EASE_FACTOR,
            lapse_penalty: DEFAULT_LAPSE_PENALTY,
            relearn_interval_days: DEFAULT_RELEARN_INTERVAL_DAYS,
            first_interval_days: DEFAULT_FIRST_INTERVAL_DAYS,
            second_interval_days: DEFAULT_SECOND_INTERVAL_DAYS,
            learned_review_threshold: DEFAULT_LEARNED_REVIEW_THRESHOLD,
            mastered_interval_days: DEFAULT_MASTERED_INTERVAL_DAYS,
            default_difficulty: DEFAULT_DIFFICULTY,
            easy_streak_interval_days: DEFAULT_EASY_STREAK_INTERVAL_DAYS,
        }
    }
}

impl SchedulerConfig {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SchedulerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the algorithm cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.passing_threshold) {
            return Err(ConfigError::Invalid(format!(
                "passing_threshold must be between 1 and 5, got {}",
                self.passing_threshold
            )));
        }
        if !self.minimum_ease_factor.is_finite() || self.minimum_ease_factor <= 0.0 {
            return Err(ConfigError::Invalid(
                "minimum_ease_factor must be a positive number".to_string(),
            ));
        }
        if !self.default_ease_factor.is_finite()
            || self.default_ease_factor < self.minimum_ease_factor
        {
            return Err(ConfigError::Invalid(
                "default_ease_factor must not be below minimum_ease_factor".to_string(),
            ));
        }
        if !self.lapse_penalty.is_finite() || self.lapse_penalty < 0.0 {
            return Err(ConfigError::Invalid(
                "lapse_penalty must be zero or positive".to_string(),
            ));
        }
        if self.relearn_interval_days == 0
            || self.first_interval_days == 0
            || self.second_interval_days == 0
        {
            return Err(ConfigError::Invalid(
                "scheduled intervals must be at least one day".to_string(),
            ));
        }
        if self.second_interval_days < self.first_interval_days {
            return Err(ConfigError::Invalid(
                "second_interval_days must not be shorter than first_interval_days".to_string(),
            ));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.default_difficulty) {
            return Err(ConfigError::Invalid(format!(
                "default_difficulty must be between {} and {}",
                MIN_DIFFICULTY, MAX_DIFFICULTY
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SchedulerConfig::from_toml("mastered_interval_days = 30\n").unwrap();
        assert_eq!(config.mastered_interval_days, 30);
        assert_eq!(config.passing_threshold, DEFAULT_PASSING_THRESHOLD);
        assert_eq!(config.default_ease_factor, DEFAULT_EASE_FACTOR);
    }

    #[test]
    fn test_rejects_ease_below_floor() {
        let result = SchedulerConfig::from_toml(
            "minimum_ease_factor = 2.0\ndefault_ease_factor = 1.5\n",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = SchedulerConfig::from_toml("relearn_interval_days = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = SchedulerConfig::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "lapse_penalty = 0.3\npassing_threshold = 4\n").unwrap();

        let config = SchedulerConfig::load(&path).unwrap();
        assert_eq!(config.lapse_penalty, 0.3);
        assert_eq!(config.passing_threshold, 4);
    }
}
