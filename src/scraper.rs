use reqwest::blocking::Client;
use reqwest::StatusCode;
use log::{info, warn};
use crate::error::ScrapeError;
use crate::extractor::Extractor;
use crate::item::PageResult;

/// Raw response for one page request.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

/// Where page HTML comes from.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<FetchedPage, ScrapeError>;
}

/// Plain unauthenticated GET with the client's default settings.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder().build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, ScrapeError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;
        Ok(FetchedPage { status, body })
    }
}

pub struct Scraper<S: PageSource> {
    source: S,
    extractor: Extractor,
}

impl<S: PageSource> Scraper<S> {
    pub fn new(source: S, extractor: Extractor) -> Self {
        Scraper { source, extractor }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and extracts one page. Any failure yields an empty page with no next link.
    pub fn scrape_page(&self, url: &str) -> PageResult {
        info!("Scraping: {}", url);

        match self.source.fetch(url) {
            Ok(page) if page.status == StatusCode::OK => self.extractor.extract_page(&page.body),
            Ok(page) => {
                warn!("Error fetching {}: status {}", url, page.status);
                PageResult::default()
            }
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                PageResult::default()
            }
        }
    }
}
