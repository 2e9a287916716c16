use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::error::ScrapeError;

/// Settings for one scrape run. Defaults reproduce the stock St. Louis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Origin that root-relative links are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the first listing page
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// CSV file to write, overwritten on each run
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Pause between page requests, in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,

    /// Optional cap on fetched pages (unbounded if absent)
    #[serde(default)]
    pub max_pages: Option<usize>,
}

fn default_base_url() -> String {
    "https://stl.parium.org".to_string()
}

fn default_start_path() -> String {
    "/things-to-do?page=1".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("stl_things_to_do.csv")
}

fn default_delay_secs() -> u64 {
    1
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            start_path: default_start_path(),
            output_path: default_output_path(),
            delay_secs: default_delay_secs(),
            max_pages: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn start_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.start_path)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}
