//! Review session planning
//!
//! Works on a snapshot slice of records and recomputes everything per call;
//! nothing is cached between sessions.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::models::{LearningStats, WordRecord};

/// Words due at `now`, most overdue first, weaker words first on ties.
///
/// Never-reviewed words are always due. A `limit` of `None` or `Some(0)`
/// means no limit.
pub fn due_words<'a>(
    records: &'a [WordRecord],
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> impl Iterator<Item = &'a WordRecord> + 'a {
    let mut due: Vec<&WordRecord> = records.iter().filter(|r| r.is_due(now)).collect();
    due.sort_by(|a, b| review_order(a, b));

    let limit = match limit {
        Some(0) | None => usize::MAX,
        Some(n) => n,
    };
    due.into_iter().take(limit)
}

fn review_order(a: &WordRecord, b: &WordRecord) -> Ordering {
    a.next_review
        .cmp(&b.next_review)
        .then_with(|| a.ease_factor.total_cmp(&b.ease_factor))
        .then_with(|| a.id.cmp(&b.id))
}

/// Never-reviewed words in id order, at most `count`
pub fn new_words_to_learn(records: &[WordRecord], count: usize) -> Vec<&WordRecord> {
    let mut fresh: Vec<&WordRecord> = records.iter().filter(|r| r.is_new()).collect();
    fresh.sort_by_key(|r| r.id);
    fresh.truncate(count);
    fresh
}

/// Learning statistics over a collection
pub fn learning_stats(records: &[WordRecord], now: DateTime<Utc>) -> LearningStats {
    let mut stats = LearningStats {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        if record.learned {
            stats.learned += 1;
        }
        if record.mastered {
            stats.mastered += 1;
        }
        if record.is_new() {
            stats.new_words += 1;
        } else if record.is_due(now) {
            stats.to_review += 1;
        }
    }

    stats
}
