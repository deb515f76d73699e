use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::constants::site;

/// A label/value fact from the detail list of an ad (e.g. mileage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPair {
    pub label: String,
    pub value: String,
}

impl DetailPair {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Seller box of an ad detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    #[serde(rename = "activeSince")]
    pub active_since: Option<NaiveDate>,
    pub friendliness: String,
    pub rating: String,
}

/// Everything extracted from a single ad detail page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<String>,
    #[serde(rename = "listedSince")]
    pub listed_since: Option<NaiveDate>,
    pub title: String,
    pub price: u32,
    #[serde(rename = "priceNegotiable")]
    pub price_negotiable: bool,
    #[serde(rename = "zipCode")]
    pub zip_code: String,
    pub location: String,
    pub link: Option<String>,
    pub description: String,
    /// Document order, duplicate labels kept
    pub details: Vec<DetailPair>,
    pub extras: Vec<String>,
    pub seller: Seller,
}

impl Record {
    /// Set the identifier and derive the canonical link from it.
    ///
    /// `None` clears both, so `link` always embeds `id`.
    pub fn set_id(&mut self, id: Option<String>) {
        self.link = id.as_deref().map(site::ad_url);
        self.id = id;
    }

    /// Look up the first detail value with the given label
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|pair| pair.label == label)
            .map(|pair| pair.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_id_keeps_link_consistent() {
        let mut record = Record::default();
        record.set_id(Some("1708911891".to_string()));
        assert_eq!(
            record.link.as_deref(),
            Some("https://www.ebay-kleinanzeigen.de/s-anzeige/1708911891")
        );

        record.set_id(None);
        assert!(record.id.is_none());
        assert!(record.link.is_none());
    }

    #[test]
    fn test_detail_returns_first_duplicate() {
        let record = Record {
            details: vec![
                DetailPair::new("Farbe", "Blau"),
                DetailPair::new("Farbe", "Rot"),
            ],
            ..Record::default()
        };
        assert_eq!(record.detail("Farbe"), Some("Blau"));
        assert_eq!(record.detail("Marke"), None);
    }
}
