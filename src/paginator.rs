use std::time::Duration;
use log::{info, warn};
use crate::delay_manager;
use crate::item::ItemRecord;
use crate::scraper::{PageSource, Scraper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No next-page link on the last page (or its fetch failed).
    Exhausted,
    /// A record on the last page carried the end-of-list marker.
    StopMarker,
    /// The configured page cap was reached.
    PageLimit,
}

#[derive(Debug)]
pub struct ScrapeRun {
    pub items: Vec<ItemRecord>,
    pub pages_fetched: usize,
    pub stop_reason: StopReason,
}

/// Walks the listing page by page, following the next-page link.
pub struct Paginator<S: PageSource> {
    scraper: Scraper<S>,
    delay: Duration,
    max_pages: Option<usize>,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(scraper: Scraper<S>, delay: Duration, max_pages: Option<usize>) -> Self {
        Paginator { scraper, delay, max_pages }
    }

    pub fn scraper(&self) -> &Scraper<S> {
        &self.scraper
    }

    pub fn run(&self, start_url: &str) -> ScrapeRun {
        let mut items = Vec::new();
        let mut pages_fetched = 0;
        let mut page_url = Some(start_url.to_string());

        let stop_reason = loop {
            let Some(url) = page_url.take() else {
                break StopReason::Exhausted;
            };
            if self.max_pages.is_some_and(|max| pages_fetched >= max) {
                warn!("Reached page limit of {} before {}, stopping.", pages_fetched, url);
                break StopReason::PageLimit;
            }

            let page = self.scraper.scrape_page(&url);
            pages_fetched += 1;

            // records of the marker page are kept
            let found_marker = page.contains_stop_marker();
            items.extend(page.items);
            if found_marker {
                info!("Found the cathedral, stopping the scraper.");
                break StopReason::StopMarker;
            }

            page_url = page.next_page;
            if page_url.is_some() {
                delay_manager::politeness_delay(self.delay);
            }
        };

        info!(
            "Pagination finished after {} pages ({:?}), {} items collected.",
            pages_fetched,
            stop_reason,
            items.len()
        );

        ScrapeRun { items, pages_fetched, stop_reason }
    }
}
