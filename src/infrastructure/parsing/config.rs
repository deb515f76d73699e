//! Parsing configuration for HTML extraction
//!
//! Centralized CSS selectors for search result and ad detail pages.

use serde::{Deserialize, Serialize};

use super::document::compile_selector;
use super::{ParsingError, ParsingResult};

/// Main parsing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Search result page selectors
    pub listing_selectors: ListingSelectors,

    /// Ad detail page selectors
    pub record_selectors: RecordSelectors,
}

impl ParsingConfig {
    /// Compile every selector once so broken configuration fails early
    pub fn validate(&self) -> ParsingResult<()> {
        self.listing_selectors
            .entries()
            .into_iter()
            .chain(self.record_selectors.entries())
            .try_for_each(|(field, selector)| {
                compile_selector(selector).map(|_| ()).map_err(|e| {
                    ParsingError::ConfigurationError {
                        message: e.to_string(),
                        field: field.to_string(),
                    }
                })
            })
    }
}

/// CSS selectors for search result pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    /// One element per ad
    pub item: String,

    /// Attribute on the item holding the ad id
    pub id_attribute: String,

    pub title: String,
    pub price: String,
    pub location: String,

    /// Page number of the current page
    pub current_page: String,

    /// Page links, the last one is the last page
    pub page_links: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            item: ".aditem".to_string(),
            id_attribute: "data-adid".to_string(),
            title: ".ellipsis".to_string(),
            price: ".aditem-main--middle--price".to_string(),
            location: ".aditem-main--top--left".to_string(),
            current_page: ".pagination-current".to_string(),
            page_links: ".pagination-page".to_string(),
        }
    }
}

impl ListingSelectors {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("item", self.item.as_str()),
            ("title", self.title.as_str()),
            ("price", self.price.as_str()),
            ("location", self.location.as_str()),
            ("current_page", self.current_page.as_str()),
            ("page_links", self.page_links.as_str()),
        ]
    }
}

/// CSS selectors for ad detail pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSelectors {
    pub title: String,
    pub price: String,
    pub location: String,

    /// Date and ad number block
    pub extra_info: String,

    pub details: String,
    pub extras: String,
    pub description: String,

    /// Seller box; seller selectors are resolved inside it
    pub seller: String,
    pub seller_name: String,
    pub seller_rating: String,
    pub seller_friendliness: String,
    pub seller_active_since: String,
}

impl Default for RecordSelectors {
    fn default() -> Self {
        Self {
            title: "#viewad-title".to_string(),
            price: "#viewad-price".to_string(),
            location: "#viewad-locality".to_string(),
            extra_info: "#viewad-extra-info".to_string(),
            details: ".addetailslist--detail".to_string(),
            extras: ".checktag".to_string(),
            description: "#viewad-description-text".to_string(),
            seller: "#viewad-contact".to_string(),
            seller_name: ".text-bold.text-bigger.text-force-linebreak".to_string(),
            seller_rating: ".userbadges-vip.userbadges-profile-rating".to_string(),
            seller_friendliness: ".userbadges-vip.userbadges-profile-friendliness".to_string(),
            seller_active_since: ".text-light.text-light-seller-info".to_string(),
        }
    }
}

impl RecordSelectors {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("price", self.price.as_str()),
            ("location", self.location.as_str()),
            ("extra_info", self.extra_info.as_str()),
            ("details", self.details.as_str()),
            ("extras", self.extras.as_str()),
            ("description", self.description.as_str()),
            ("seller", self.seller.as_str()),
            ("seller_name", self.seller_name.as_str()),
            ("seller_rating", self.seller_rating.as_str()),
            ("seller_friendliness", self.seller_friendliness.as_str()),
            ("seller_active_since", self.seller_active_since.as_str()),
        ]
    }
}
