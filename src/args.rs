use clap::Parser;
use std::path::PathBuf;
use stl_scraper_lib::{ScrapeError, ScraperConfig};

#[derive(Parser, Debug)]
#[command(name = "stl-scraper")]
#[command(about = "Scrapes the St. Louis things-to-do listing into a CSV file")]
#[command(version)]
pub struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Origin used to resolve root-relative links
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Delay between page requests in seconds
    #[arg(long)]
    pub delay_secs: Option<u64>,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Log per-page extraction details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<ScraperConfig, ScrapeError> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(delay_secs) = self.delay_secs {
            config.delay_secs = delay_secs;
        }
        if self.max_pages.is_some() {
            config.max_pages = self.max_pages;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::parse_from(["stl-scraper"]);
        assert_eq!(args.into_config().unwrap(), ScraperConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = Args::parse_from([
            "stl-scraper", "--output", "out.csv", "--delay-secs", "0", "--max-pages", "2",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.delay_secs, 0);
        assert_eq!(config.max_pages, Some(2));
        assert_eq!(config.base_url, "https://stl.parium.org");
    }

    #[test]
    fn test_verbose_flag() {
        assert!(!Args::parse_from(["stl-scraper"]).verbose);
        assert!(Args::parse_from(["stl-scraper", "-v"]).verbose);
    }
}
