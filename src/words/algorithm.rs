//! SM-2 Spaced Repetition Algorithm
//!
//! Computes the next review state of a word from its current state and the
//! quality of the latest recall. Everything here is a pure function of its
//! arguments; persisting the result is the caller's job.
//!
//! - A quality below the passing threshold is a lapse: the interval drops to
//!   the relearn interval and the ease factor takes a fixed penalty.
//! - Otherwise EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)) and the
//!   interval grows 1 day, 6 days, then `round(interval * EF')`.

use chrono::{DateTime, Utc};

use super::config::SchedulerConfig;
use super::error::{Result, SchedulerError};
use super::grader::{Quality, ReviewResponse, MAX_QUALITY};
use super::models::{
    IntervalPreview, WordRecord, MAX_DIFFICULTY, MAX_INTERVAL_DAYS, MIN_DIFFICULTY, SECONDS_PER_DAY,
};
use super::progress::classify;

/// Calculate the next review state of a word.
///
/// Returns an error, leaving the input untouched, when the record violates its
/// invariants or `now` is negative or earlier than the last review.
pub fn schedule(
    record: &WordRecord,
    quality: Quality,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<WordRecord> {
    let now_ts = now.timestamp();
    if now_ts < 0 {
        return Err(SchedulerError::invalid(format!(
            "review time {} precedes the epoch",
            now_ts
        )));
    }
    if !record.is_new() && now_ts < record.last_reviewed {
        return Err(SchedulerError::invalid(format!(
            "word {}: review time {} is earlier than the last review {}",
            record.id, now_ts, record.last_reviewed
        )));
    }
    record.validate(config)?;

    let q = quality.value();
    let mut next = record.clone();

    if q < config.passing_threshold {
        next.interval = config.relearn_interval_days;
        next.ease_factor = (record.ease_factor - config.lapse_penalty).max(config.minimum_ease_factor);
        next.difficulty = (record.difficulty + 1).min(MAX_DIFFICULTY);
    } else {
        let miss = (MAX_QUALITY - q) as f64;
        next.ease_factor =
            (record.ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(config.minimum_ease_factor);

        next.interval = match record.review_count {
            0 => config.first_interval_days,
            1 => config.second_interval_days,
            _ => grow_interval(record.interval, next.ease_factor),
        };

        if q == MAX_QUALITY && record.interval >= config.easy_streak_interval_days {
            next.difficulty = record.difficulty.saturating_sub(1).max(MIN_DIFFICULTY);
        }
    }

    next.review_count = record.review_count.saturating_add(1);
    next.last_reviewed = now_ts;
    next.next_review = now_ts + next.interval as i64 * SECONDS_PER_DAY;

    heal_invariants(&mut next, config);

    log::debug!(
        "Scheduled word {} (q={}): interval {} -> {}, ease {:.2} -> {:.2}",
        record.id,
        q,
        record.interval,
        next.interval,
        record.ease_factor,
        next.ease_factor
    );

    Ok(next)
}

/// Schedule a review and promote learned/mastered flags in one step
pub fn apply_review(
    record: &WordRecord,
    quality: Quality,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<WordRecord> {
    let scheduled = schedule(record, quality, now, config)?;
    Ok(classify(&scheduled, config))
}

fn grow_interval(interval: u32, ease_factor: f64) -> u32 {
    let grown = (interval as f64 * ease_factor).round();
    if grown >= MAX_INTERVAL_DAYS as f64 {
        MAX_INTERVAL_DAYS.max(interval)
    } else {
        // Never shrink on a pass
        (grown as u32).max(interval)
    }
}

/// Clamp anything that slipped outside its bounds. Should be unreachable;
/// logged rather than surfaced since the record can be repaired in place.
fn heal_invariants(record: &mut WordRecord, config: &SchedulerConfig) {
    if !record.ease_factor.is_finite() || record.ease_factor < config.minimum_ease_factor {
        log::warn!(
            "Invariant violation on word {}: ease factor {} clamped to {}",
            record.id,
            record.ease_factor,
            config.minimum_ease_factor
        );
        record.ease_factor = config.minimum_ease_factor;
    }
    if record.interval == 0 {
        log::warn!(
            "Invariant violation on word {}: zero interval after review",
            record.id
        );
        record.interval = config.relearn_interval_days.max(1);
        record.next_review = record.last_reviewed + record.interval as i64 * SECONDS_PER_DAY;
    }
    if record.difficulty < MIN_DIFFICULTY || record.difficulty > MAX_DIFFICULTY {
        log::warn!(
            "Invariant violation on word {}: difficulty {} clamped",
            record.id,
            record.difficulty
        );
        record.difficulty = record.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    }
}

/// The interval each response would produce, shown next to the answer buttons
pub fn preview_intervals(
    record: &WordRecord,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<IntervalPreview> {
    let interval_for =
        |response: ReviewResponse| schedule(record, response.quality(), now, config).map(|r| r.interval);

    Ok(IntervalPreview {
        again: interval_for(ReviewResponse::Again)?,
        hard: interval_for(ReviewResponse::Hard)?,
        good: interval_for(ReviewResponse::Good)?,
        easy: interval_for(ReviewResponse::Easy)?,
    })
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
