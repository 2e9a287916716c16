pub mod config;
pub mod csv_writer;
pub mod delay_manager;
pub mod error;
pub mod extractor;
pub mod item;
pub mod logger;
pub mod paginator;
pub mod scraper;

// Exporting types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use extractor::Extractor;
pub use item::{ItemRecord, PageResult};
pub use paginator::{Paginator, ScrapeRun, StopReason};
pub use self::scraper::{FetchedPage, HttpFetcher, PageSource, Scraper};
