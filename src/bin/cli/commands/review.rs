use anyhow::{Context, Result};
use chrono::Utc;

use wordmaster_lib::words::{format_interval, ReviewResponse};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    id: u64,
    response: &str,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let response: ReviewResponse = response.parse()?;
    let before = app.storage.get_word(id).context("Failed to load word")?;
    let after = app
        .storage
        .submit_review(id, response, Utc::now())
        .context("Failed to record review")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&after)?);
        }
        OutputFormat::Plain => {
            let color = if response == ReviewResponse::Again { Color::RED } else { Color::GREEN };
            println!(
                "{} \"{}\" as {}",
                terminal::paint("Reviewed", Color::BOLD, use_color),
                after.word,
                terminal::paint(response.as_str(), color, use_color)
            );
            println!("  Next review: in {} ({})",
                format_interval(after.interval),
                terminal::format_date(after.next_review_at()));
            println!("  Ease factor: {:.2} -> {:.2}", before.ease_factor, after.ease_factor);

            if after.mastered && !before.mastered {
                println!("  {}", terminal::paint("Mastered!", Color::GREEN, use_color));
            } else if after.learned && !before.learned {
                println!("  {}", terminal::paint("Learned!", Color::CYAN, use_color));
            }
        }
    }

    Ok(())
}
