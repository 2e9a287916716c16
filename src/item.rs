use serde::{Serialize, Serializer};

/// Word in an item name that marks the natural end of the listing.
pub const STOP_MARKER: &str = "cathedral";

/// One card scraped from a listing page. Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub address: String,
    pub url: String,
    #[serde(serialize_with = "join_tags")]
    pub tags: Vec<String>,
}

impl ItemRecord {
    /// Case-insensitive substring match on the name. An empty name never matches.
    pub fn name_contains(&self, marker: &str) -> bool {
        !self.name.is_empty() && self.name.to_lowercase().contains(&marker.to_lowercase())
    }
}

fn join_tags<S: Serializer>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&tags.join(", "))
}

/// Items found on one page plus the absolute URL of the next page, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub items: Vec<ItemRecord>,
    pub next_page: Option<String>,
}

impl PageResult {
    pub fn contains_stop_marker(&self) -> bool {
        self.items.iter().any(|item| item.name_contains(STOP_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            ..ItemRecord::default()
        }
    }

    #[test]
    fn test_name_contains_ignores_case() {
        assert!(named("Cathedral Basilica of Saint Louis").name_contains("cathedral"));
        assert!(named("OLD CATHEDRAL").name_contains("cathedral"));
        assert!(!named("Gateway Arch").name_contains("cathedral"));
        assert!(!named("").name_contains(""));
    }

    #[test]
    fn test_page_stop_marker() {
        let page = PageResult {
            items: vec![named("Zoo"), named("The Old Cathedral")],
            next_page: Some("https://stl.parium.org/things-to-do?page=3".to_string()),
        };
        assert!(page.contains_stop_marker());
        assert!(!PageResult::default().contains_stop_marker());
    }

    #[test]
    fn test_tags_serialize_as_one_field() {
        let item = ItemRecord {
            name: "Soulard Market".to_string(),
            tags: vec!["Outdoor".to_string(), "Free".to_string()],
            ..ItemRecord::default()
        };
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
        writer.serialize(&item).unwrap();
        writer.serialize(ItemRecord::default()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(out, "Soulard Market,,,,,,\"Outdoor, Free\"\n,,,,,,\n");
    }
}
