use std::path::Path;

use anyhow::{Context, Result};

use wordmaster_lib::storage::WordStorage;
use wordmaster_lib::words::SchedulerConfig;

/// Shared application state for CLI commands
pub struct App {
    pub storage: WordStorage,
}

impl App {
    /// Open the store, loading scheduler thresholds from the config file
    pub fn new(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => WordStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join("config.toml"));
        let config = SchedulerConfig::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let storage = WordStorage::new(data_dir, config)
            .context("Failed to initialize word storage")?;

        log::debug!("Using data directory {:?}", storage.data_dir());
        Ok(Self { storage })
    }
}
