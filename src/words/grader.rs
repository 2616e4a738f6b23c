//! Review grading
//!
//! Maps what the learner answered ("again", "hard", "good", "easy") onto the
//! classic SM-2 quality scale:
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Result, SchedulerError};

pub const MAX_QUALITY: u8 = 5;

/// A recall quality on the 0-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Out-of-range values are rejected, never clamped or wrapped
    pub fn new(value: i64) -> Result<Self> {
        if !(0..=MAX_QUALITY as i64).contains(&value) {
            return Err(SchedulerError::invalid(format!(
                "quality {} outside 0..={}",
                value, MAX_QUALITY
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Quality {
    type Error = SchedulerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the learner answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewResponse {
    /// Forgot the word
    Again,
    /// Recalled with serious difficulty
    Hard,
    /// Recalled after hesitation
    Good,
    /// Recalled instantly
    Easy,
}

impl ReviewResponse {
    pub const ALL: [ReviewResponse; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    pub fn quality(self) -> Quality {
        match self {
            Self::Again => Quality(1),
            Self::Hard => Quality(3),
            Self::Good => Quality(4),
            Self::Easy => Quality(5),
        }
    }

    /// Map a UI button rating (1-4: Again, Hard, Good, Easy)
    pub fn from_ui_rating(rating: i32) -> Result<Self> {
        match rating {
            1 => Ok(Self::Again),
            2 => Ok(Self::Hard),
            3 => Ok(Self::Good),
            4 => Ok(Self::Easy),
            _ => Err(SchedulerError::invalid(format!(
                "rating {} outside 1..=4",
                rating
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl FromStr for ReviewResponse {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => match trimmed.parse::<i32>() {
                Ok(rating) => Self::from_ui_rating(rating),
                Err(_) => Err(SchedulerError::invalid(format!(
                    "unrecognized review response '{}'",
                    s
                ))),
            },
        }
    }
}

impl fmt::Display for ReviewResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade a user-facing response category
pub fn grade(response: &str) -> Result<Quality> {
    response.parse::<ReviewResponse>().map(ReviewResponse::quality)
}
