//! Ad detail page parser
//!
//! Reads the summary fields, the listing-age block, the detail list, the
//! check tags and the seller box of a single ad. Only document level problems
//! abort the record; malformed fragments leave their field empty.

use scraper::Selector;
use tracing::{debug, warn};

use super::config::{ParsingConfig, RecordSelectors};
use super::document::compile_selector;
use super::field_parsers::{
    parse_active_since, parse_detail, parse_listing_age, parse_location, parse_price, parse_rating,
};
use super::{DocumentParser, Fragment, ParsingResult, QueryableDocument, or_default};
use crate::domain::{DetailPair, Record, Seller};

/// Parser for ad detail pages
#[derive(Debug, Clone)]
pub struct RecordParser {
    title_selector: Selector,
    price_selector: Selector,
    location_selector: Selector,
    extra_info_selector: Selector,
    detail_selector: Selector,
    extra_selector: Selector,
    description_selector: Selector,
    seller: SellerSelectors,
}

/// Seller box plus the selectors resolved inside it
#[derive(Debug, Clone)]
struct SellerSelectors {
    scope: Selector,
    name: Selector,
    rating: Selector,
    friendliness: Selector,
    active_since: Selector,
}

impl RecordParser {
    /// Create a new record parser with default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default().record_selectors)
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &RecordSelectors) -> ParsingResult<Self> {
        Ok(Self {
            title_selector: compile_selector(&selectors.title)?,
            price_selector: compile_selector(&selectors.price)?,
            location_selector: compile_selector(&selectors.location)?,
            extra_info_selector: compile_selector(&selectors.extra_info)?,
            detail_selector: compile_selector(&selectors.details)?,
            extra_selector: compile_selector(&selectors.extras)?,
            description_selector: compile_selector(&selectors.description)?,
            seller: SellerSelectors {
                scope: compile_selector(&selectors.seller)?,
                name: compile_selector(&selectors.seller_name)?,
                rating: compile_selector(&selectors.seller_rating)?,
                friendliness: compile_selector(&selectors.seller_friendliness)?,
                active_since: compile_selector(&selectors.seller_active_since)?,
            },
        })
    }

    /// Detail pairs in document order. Entries without a label/value split are skipped.
    fn extract_details<F: Fragment>(&self, root: &F) -> Vec<DetailPair> {
        let mut details = Vec::new();

        for fragment in root.select_all(&self.detail_selector) {
            match parse_detail(&fragment.trimmed_text()) {
                Ok((label, value)) => details.push(DetailPair { label, value }),
                Err(e) => warn!("Skipping detail entry: {}", e),
            }
        }

        details
    }

    fn extract_extras<F: Fragment>(&self, root: &F) -> Vec<String> {
        root.select_all(&self.extra_selector)
            .iter()
            .map(Fragment::text)
            .collect()
    }

    /// Seller fields are looked up inside the seller box, or the whole page if it is missing
    fn extract_seller<F: Fragment>(&self, root: &F) -> Seller {
        let selectors = &self.seller;
        let scope = root.select_first(&selectors.scope);
        let scope = scope.as_ref().unwrap_or(root);

        let active_since = match parse_active_since(&scope.first_text(&selectors.active_since)) {
            Ok(date) => date,
            Err(e) => {
                debug!("Seller tenure not set: {}", e);
                None
            }
        };

        Seller {
            name: scope.first_text(&selectors.name),
            active_since,
            friendliness: scope.first_text(&selectors.friendliness),
            rating: parse_rating(&scope.first_text(&selectors.rating)).to_string(),
        }
    }
}

impl DocumentParser for RecordParser {
    type Output = Record;

    fn parse_document<D: QueryableDocument>(&self, document: &D) -> ParsingResult<Record> {
        let root = document.root();
        let mut record = Record {
            title: root.first_text(&self.title_selector),
            ..Record::default()
        };

        let price = or_default("price", parse_price(&root.first_text(&self.price_selector)));
        record.price = price.amount;
        record.price_negotiable = price.negotiable;

        let location = parse_location(&root.first_text(&self.location_selector));
        record.zip_code = location.zip_code;
        record.location = location.place;

        let age = parse_listing_age(&root.first_text(&self.extra_info_selector));
        record.listed_since = age.listed_since;
        record.set_id(age.id);

        record.details = self.extract_details(&root);
        record.extras = self.extract_extras(&root);
        record.seller = self.extract_seller(&root);
        record.description = root.first_text(&self.description_selector);

        debug!(
            "Extracted record {:?} with {} details and {} extras",
            record.id,
            record.details.len(),
            record.extras.len()
        );
        Ok(record)
    }
}
