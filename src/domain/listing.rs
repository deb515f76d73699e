use serde::{Deserialize, Serialize};

use super::constants::site;

/// One ad as shown on a search result page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: Option<String>,
    pub title: String,
    pub price: u32,
    #[serde(rename = "priceNegotiable")]
    pub price_negotiable: bool,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub location: String,
    pub link: Option<String>,
}

impl ListingSummary {
    /// Set the identifier and derive the canonical link from it
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.link = Some(site::ad_url(&id));
        self.id = Some(id);
        self
    }
}

/// A fetched search result page.
///
/// `items` keeps document order, which is the marketplace ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<ListingSummary>,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "lastPage")]
    pub last_page: u32,
    #[serde(rename = "isLastPage")]
    pub is_last_page: bool,
}

impl ListingPage {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_derives_link() {
        let summary = ListingSummary::default().with_id("42");
        assert_eq!(summary.id.as_deref(), Some("42"));
        assert_eq!(
            summary.link.as_deref(),
            Some("https://www.ebay-kleinanzeigen.de/s-anzeige/42")
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ListingSummary {
            price: 4500,
            price_negotiable: true,
            zip_code: "10119".to_string(),
            ..ListingSummary::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["priceNegotiable"], true);
        assert_eq!(json["zipCode"], "10119");
        assert_eq!(json["price"], 4500);
    }
}
