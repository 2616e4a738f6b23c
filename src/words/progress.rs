//! Learned/mastered promotion
//!
//! Promotions only ever go one way. `mastered` is cleared solely by
//! [`WordRecord::reset_progress`].

use super::config::SchedulerConfig;
use super::models::WordRecord;

/// Return a copy of `record` with `learned`/`mastered` promoted where earned
pub fn classify(record: &WordRecord, config: &SchedulerConfig) -> WordRecord {
    let mut next = record.clone();

    if next.mastered && !next.learned {
        log::warn!(
            "Invariant violation on word {}: mastered without learned, promoting",
            next.id
        );
        next.learned = true;
    }

    if !next.learned
        && next.review_count >= config.learned_review_threshold
        && next.ease_factor >= config.default_ease_factor
    {
        log::debug!("Word {} is now learned", next.id);
        next.learned = true;
    }

    if !next.mastered && next.learned && next.interval >= config.mastered_interval_days {
        log::debug!("Word {} is now mastered", next.id);
        next.mastered = true;
    }

    next
}
