//! Spaced repetition scheduling for vocabulary
//!
//! This module provides:
//! - Word review state (`WordRecord`) and its boundary representation
//! - Grading of learner responses onto the SM-2 quality scale
//! - The SM-2 scheduling algorithm
//! - Due-word selection and ordering for review sessions
//! - Learned/mastered promotion
//!
//! All functions are pure: records go in, new records come out.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod grader;
pub mod models;
pub mod planner;
pub mod progress;

pub use algorithm::{apply_review, format_interval, preview_intervals, schedule};
pub use config::{ConfigError, SchedulerConfig};
pub use error::SchedulerError;
pub use grader::{grade, Quality, ReviewResponse};
pub use models::*;
pub use planner::{due_words, learning_stats, new_words_to_learn};
pub use progress::classify;
