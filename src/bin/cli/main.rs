mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordmaster-cli", about = "Spaced repetition vocabulary trainer", version)]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Scheduler config file (default: <data-dir>/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a word to the study set
    Add {
        /// The word itself
        word: String,
        /// Meaning of the word
        definition: String,
        #[arg(long)]
        phonetic: Option<String>,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
        /// Translation of the example sentence
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        /// Difficulty 1-5
        #[arg(long)]
        difficulty: Option<u8>,
    },

    /// List all words
    List,

    /// Show a word with its review state
    Show {
        id: u64,
    },

    /// List words due for review
    Due {
        /// Maximum words (0 = no limit)
        #[arg(long, default_value = "0")]
        limit: usize,
    },

    /// List never-reviewed words
    New {
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Record a review: again, hard, good or easy (or 1-4)
    Review {
        id: u64,
        response: String,
    },

    /// Show the interval each response would give
    Preview {
        id: u64,
    },

    /// Reset a word to the unreviewed state
    Reset {
        id: u64,
    },

    /// Delete a word
    Delete {
        id: u64,
    },

    /// Import words from a JSON word list or CSV export
    Import {
        file: PathBuf,
    },

    /// Export all words with their review state to JSON
    Export {
        file: PathBuf,
    },

    /// Show learning statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.data_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Command::Add {
            word,
            definition,
            phonetic,
            example,
            translation,
            image_url,
            difficulty,
        } => {
            let entry = commands::add::WordEntry {
                word,
                definition,
                phonetic,
                example,
                translation,
                image_url,
                difficulty,
            };
            commands::add::run(&app, entry, &cli.format)?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Command::Show { id } => {
            commands::show::run(&app, id, &cli.format, use_color)?;
        }
        Command::Due { limit } => {
            commands::due::run(&app, limit, &cli.format, use_color)?;
        }
        Command::New { count } => {
            commands::list::run_new(&app, count, &cli.format, use_color)?;
        }
        Command::Review { id, response } => {
            commands::review::run(&app, id, &response, &cli.format, use_color)?;
        }
        Command::Preview { id } => {
            commands::show::run_preview(&app, id, &cli.format)?;
        }
        Command::Reset { id } => {
            commands::manage::run_reset(&app, id, &cli.format)?;
        }
        Command::Delete { id } => {
            commands::manage::run_delete(&app, id, &cli.format)?;
        }
        Command::Import { file } => {
            commands::transfer::run_import(&app, &file, &cli.format)?;
        }
        Command::Export { file } => {
            commands::transfer::run_export(&app, &file, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}
