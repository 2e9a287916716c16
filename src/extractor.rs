use scraper::{ElementRef, Html, Selector};
use url::Url;
use log::debug;
use crate::item::{ItemRecord, PageResult};

/// Tailwind classes that together identify a listing card.
const CARD_CLASSES: &[&str] = &[
    "rounded-lg", "border", "bg-card", "text-card-foreground", "shadow-sm",
    "h-52", "md:h-44", "flex", "overflow-x-scroll", "overflow-y-hidden",
];
const DESCRIPTION_CLASSES: &[&str] = &["p-6", "py-3", "px-3", "sm:px-6"];
const METADATA_CLASSES: &[&str] = &[
    "items-center", "p-6", "flex", "gap-2", "py-0", "flex-wrap", "px-3", "sm:px-6",
];
const MAP_PIN_ICON: &str = "lucide-map-pin";

pub struct Extractor {
    base_url: String,
    div: Selector,
    img: Selector,
    link: Selector,
    entry: Selector,
    icon: Selector,
    pagination: Selector,
    next_link: Selector,
}

impl Extractor {
    pub fn new(base_url: &str) -> Self {
        Extractor {
            base_url: base_url.trim_end_matches('/').to_string(),
            div: Selector::parse("div").expect("static selector"),
            img: Selector::parse("img").expect("static selector"),
            link: Selector::parse("a[href]").expect("static selector"),
            entry: Selector::parse("p").expect("static selector"),
            icon: Selector::parse("svg").expect("static selector"),
            pagination: Selector::parse(r#"nav[aria-label="pagination"]"#).expect("static selector"),
            next_link: Selector::parse(r#"a[aria-label="Go to next page"]"#).expect("static selector"),
        }
    }

    /// Parses one listing page into its cards and the next-page link.
    pub fn extract_page(&self, html: &str) -> PageResult {
        let document = Html::parse_document(html);

        let items: Vec<ItemRecord> = document
            .select(&self.div)
            .filter(|div| has_classes(div, CARD_CLASSES))
            .map(|card| self.extract_item(card))
            .collect();
        debug!("Found {} cards", items.len());

        PageResult {
            items,
            next_page: self.next_page(&document),
        }
    }

    /// Every lookup falls back to an empty value; a card never fails extraction.
    pub fn extract_item(&self, card: ElementRef) -> ItemRecord {
        let image = card
            .select(&self.img)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| resolve_url(&self.base_url, src))
            .unwrap_or_default();

        let (name, url) = match card.select(&self.link).next() {
            Some(a) => (
                element_text(a),
                a.value()
                    .attr("href")
                    .map(|href| resolve_url(&self.base_url, href))
                    .unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        let description = self
            .find_div(card, DESCRIPTION_CLASSES)
            .map(element_text)
            .unwrap_or_default();

        let mut item = ItemRecord {
            name,
            image,
            description,
            url,
            ..ItemRecord::default()
        };

        if let Some(row) = self.find_div(card, METADATA_CLASSES) {
            for entry in row.select(&self.entry) {
                let text = element_text(entry);
                if self.has_map_pin(entry) {
                    if text.chars().any(|c| c.is_ascii_digit()) {
                        item.address = text;
                    } else {
                        item.location = text;
                    }
                } else {
                    item.tags.push(text);
                }
            }
        }

        item
    }

    /// Absolute URL behind the "Go to next page" link of the pagination nav.
    pub fn next_page(&self, document: &Html) -> Option<String> {
        let nav = document.select(&self.pagination).next()?;
        let href = nav.select(&self.next_link).next()?.value().attr("href")?;
        let resolved = resolve_url(&self.base_url, href);
        match Url::parse(&resolved) {
            Ok(_) => Some(resolved),
            Err(e) => {
                debug!("Ignoring malformed next-page link {:?}: {}", href, e);
                None
            }
        }
    }

    fn find_div<'a>(&self, scope: ElementRef<'a>, classes: &[&str]) -> Option<ElementRef<'a>> {
        scope.select(&self.div).find(|div| has_classes(div, classes))
    }

    fn has_map_pin(&self, entry: ElementRef) -> bool {
        entry
            .select(&self.icon)
            .next()
            .and_then(|svg| svg.value().attr("class"))
            .is_some_and(|class| class.contains(MAP_PIN_ICON))
    }
}

/// Prepends `base` to root-relative paths; anything else passes through untouched.
pub fn resolve_url(base: &str, value: &str) -> String {
    if value.starts_with('/') {
        format!("{}{}", base, value)
    } else {
        value.to_string()
    }
}

fn has_classes(element: &ElementRef, classes: &[&str]) -> bool {
    let present: Vec<&str> = element.value().classes().collect();
    classes.iter().all(|class| present.contains(class))
}

/// Each text node is trimmed on its own, then the pieces are joined with nothing between them.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
