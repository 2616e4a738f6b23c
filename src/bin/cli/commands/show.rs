use anyhow::{Context, Result};
use chrono::Utc;

use wordmaster_lib::words::format_interval;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: u64, format: &OutputFormat, use_color: bool) -> Result<()> {
    let w = app.storage.get_word(id).context("Failed to load word")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&w)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint(&w.word, Color::BOLD, use_color));
            if !w.phonetic.is_empty() {
                println!("{}", terminal::paint(&w.phonetic, Color::DIM, use_color));
            }
            println!();
            println!("{}", w.definition);
            if !w.example.is_empty() {
                println!("\n  {}", w.example);
                if !w.translation.is_empty() {
                    println!("  {}", terminal::paint(&w.translation, Color::GRAY, use_color));
                }
            }

            println!();
            println!(
                "Status: {}",
                terminal::paint(terminal::status_label(&w), terminal::status_color(&w), use_color)
            );
            println!("Reviews: {}  Ease: {:.2}  Difficulty: {}", w.review_count, w.ease_factor, w.difficulty);
            println!("Interval: {}  Last: {}  Next: {}",
                format_interval(w.interval),
                terminal::format_date(w.last_reviewed_at()),
                terminal::format_date(w.next_review_at()));
        }
    }

    Ok(())
}

/// Show what each response would schedule
pub fn run_preview(app: &App, id: u64, format: &OutputFormat) -> Result<()> {
    let preview = app
        .storage
        .preview(id, Utc::now())
        .context("Failed to preview intervals")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&preview)?);
        }
        OutputFormat::Plain => {
            println!("again  {}", format_interval(preview.again));
            println!("hard   {}", format_interval(preview.hard));
            println!("good   {}", format_interval(preview.good));
            println!("easy   {}", format_interval(preview.easy));
        }
    }

    Ok(())
}
