use chrono::{DateTime, Utc};

use wordmaster_lib::words::WordRecord;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in `color` when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Cut `text` to `width` characters, ending in "..." when shortened
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Short date for tables, "-" for never
pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Progress label for a word
pub fn status_label(record: &WordRecord) -> &'static str {
    if record.mastered {
        "mastered"
    } else if record.learned {
        "learned"
    } else if record.is_new() {
        "new"
    } else {
        "learning"
    }
}

pub fn status_color(record: &WordRecord) -> &'static str {
    match status_label(record) {
        "mastered" => Color::GREEN,
        "learned" => Color::CYAN,
        "new" => Color::YELLOW,
        _ => Color::RESET,
    }
}

/// Render a table of words: id, word, status, interval, next review
pub fn print_word_table(words: &[WordRecord], use_color: bool) {
    let word_w = words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 30);
    let id_w = 5;
    let status_w = 9;
    let interval_w = 8;

    println!(
        "{:<id_w$} {:<word_w$} {:<status_w$} {:<interval_w$} {}",
        "ID", "Word", "Status", "Interval", "Next review",
        id_w = id_w, word_w = word_w, status_w = status_w, interval_w = interval_w
    );
    println!(
        "{} {} {} {} {}",
        "\u{2500}".repeat(id_w),
        "\u{2500}".repeat(word_w),
        "\u{2500}".repeat(status_w),
        "\u{2500}".repeat(interval_w),
        "\u{2500}".repeat(11)
    );

    for w in words {
        // Pad before painting so escape codes don't break alignment
        let status = format!("{:<status_w$}", status_label(w), status_w = status_w);
        println!(
            "{:<id_w$} {:<word_w$} {} {:<interval_w$} {}",
            w.id,
            truncate(&w.word, word_w),
            paint(&status, status_color(w), use_color),
            format!("{}d", w.interval),
            format_date(w.next_review_at()),
            id_w = id_w, word_w = word_w, interval_w = interval_w
        );
    }
}
