use anyhow::{Context, Result};
use chrono::Utc;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.storage.stats(Utc::now()).context("Failed to compute statistics")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Total      {}", stats.total);
            println!("New        {}", terminal::paint(&stats.new_words.to_string(), Color::YELLOW, use_color));
            println!("Learned    {}", terminal::paint(&stats.learned.to_string(), Color::CYAN, use_color));
            println!("Mastered   {}", terminal::paint(&stats.mastered.to_string(), Color::GREEN, use_color));
            println!("Due now    {}", stats.to_review);
        }
    }

    Ok(())
}
