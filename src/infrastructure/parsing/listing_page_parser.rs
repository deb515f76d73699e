//! Search result page parser
//!
//! Turns every ad item of a result page into a `ListingSummary` and reads the
//! pagination block to tell whether more pages follow.

use scraper::Selector;
use tracing::{debug, trace};

use super::config::{ListingSelectors, ParsingConfig};
use super::document::compile_selector;
use super::field_parsers::{parse_location, parse_price};
use super::{DocumentParser, Fragment, ParsingError, ParsingResult, QueryableDocument, or_default};
use crate::domain::{ListingPage, ListingSummary};

/// Parser for search result pages
#[derive(Debug, Clone)]
pub struct ListingPageParser {
    /// Attribute on the item holding the ad id
    id_attribute: String,

    /// Compiled CSS selectors for different page elements
    item_selector: Selector,
    title_selector: Selector,
    price_selector: Selector,
    location_selector: Selector,
    current_page_selector: Selector,
    page_link_selector: Selector,
}

impl ListingPageParser {
    /// Create a new listing parser with default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default().listing_selectors)
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &ListingSelectors) -> ParsingResult<Self> {
        Ok(Self {
            id_attribute: selectors.id_attribute.clone(),
            item_selector: compile_selector(&selectors.item)?,
            title_selector: compile_selector(&selectors.title)?,
            price_selector: compile_selector(&selectors.price)?,
            location_selector: compile_selector(&selectors.location)?,
            current_page_selector: compile_selector(&selectors.current_page)?,
            page_link_selector: compile_selector(&selectors.page_links)?,
        })
    }

    fn extract_summary<F: Fragment>(&self, item: &F) -> ListingSummary {
        let mut summary = match item.attr(&self.id_attribute).filter(|id| !id.is_empty()) {
            Some(id) => ListingSummary::default().with_id(id),
            None => ListingSummary::default(),
        };

        summary.title = item.first_text(&self.title_selector);

        let price = or_default("price", parse_price(&item.first_text(&self.price_selector)));
        summary.price = price.amount;
        summary.price_negotiable = price.negotiable;

        let location = parse_location(&item.first_text(&self.location_selector));
        summary.zip_code = location.zip_code;
        summary.location = location.place;

        trace!("Extracted listing {:?}", summary.id);
        summary
    }

    /// Read (current page, last page). Without page links the current page is the last one.
    fn extract_pagination<F: Fragment>(&self, root: &F) -> ParsingResult<(u32, u32)> {
        let current_page = match root.select_first(&self.current_page_selector) {
            Some(indicator) => parse_page_number("current_page", &indicator.trimmed_text())?,
            None => 1,
        };

        let last_page = match root.select_all(&self.page_link_selector).last() {
            Some(indicator) => parse_page_number("last_page", &indicator.trimmed_text())?,
            None => current_page,
        };

        Ok((current_page, last_page))
    }
}

fn parse_page_number(indicator: &str, text: &str) -> ParsingResult<u32> {
    text.parse::<u32>()
        .map_err(|_| ParsingError::InvalidPaginationIndicator {
            indicator: indicator.to_string(),
            value: text.to_string(),
        })
}

impl DocumentParser for ListingPageParser {
    type Output = ListingPage;

    fn parse_document<D: QueryableDocument>(&self, document: &D) -> ParsingResult<ListingPage> {
        let root = document.root();

        let items: Vec<ListingSummary> = root
            .select_all(&self.item_selector)
            .iter()
            .map(|item| self.extract_summary(item))
            .collect();

        let (current_page, last_page) = self.extract_pagination(&root)?;

        debug!(
            "Extracted {} listings from page {} of {}",
            items.len(),
            current_page,
            last_page
        );

        Ok(ListingPage {
            items,
            current_page,
            last_page,
            is_last_page: current_page >= last_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::HtmlDocument;

    fn page(items: &str, pagination: &str) -> HtmlDocument {
        HtmlDocument::parse_str(&format!(
            r#"<html><body><ul id="srchrslt-adtable">{items}</ul>
               <div class="pagination">{pagination}</div></body></html>"#
        ))
    }

    const ITEM: &str = r#"
        <li class="ad-listitem"><article class="aditem" data-adid="2001">
          <div class="aditem-main--top--left">
            10119 Mitte
          </div>
          <h2 class="text-module-begin"><a class="ellipsis" href="/s-anzeige/golf/2001"> Golf IV </a></h2>
          <p class="aditem-main--middle--price">
            1.200 € VB
          </p>
        </article></li>"#;

    #[test]
    fn test_parser_creation() {
        assert!(ListingPageParser::new().is_ok());
    }

    #[test]
    fn test_parser_rejects_invalid_selector() {
        let selectors = ListingSelectors {
            title: ">>".to_string(),
            ..ListingSelectors::default()
        };
        assert!(ListingPageParser::with_config(&selectors).is_err());
    }

    #[test]
    fn test_extracts_summary_fields() {
        let parser = ListingPageParser::new().unwrap();
        let result = parser.parse_document(&page(ITEM, "")).unwrap();

        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.id.as_deref(), Some("2001"));
        assert_eq!(
            item.link.as_deref(),
            Some("https://www.ebay-kleinanzeigen.de/s-anzeige/2001")
        );
        assert_eq!(item.title, "Golf IV");
        assert_eq!(item.price, 1200);
        assert!(item.price_negotiable);
        assert_eq!(item.zip_code, "10119");
        assert_eq!(item.location, "Mitte");
    }

    #[test]
    fn test_missing_fragments_leave_fields_empty() {
        let parser = ListingPageParser::new().unwrap();
        let result = parser
            .parse_document(&page(r#"<article class="aditem"></article>"#, ""))
            .unwrap();

        assert_eq!(result.items, vec![ListingSummary::default()]);
    }

    #[test]
    fn test_malformed_price_does_not_abort_page() {
        let parser = ListingPageParser::new().unwrap();
        let item = r#"<article class="aditem" data-adid="1">
            <p class="aditem-main--middle--price">Zu verschenken</p></article>"#;
        let result = parser.parse_document(&page(item, "")).unwrap();

        assert_eq!(result.items[0].price, 0);
        assert!(!result.items[0].price_negotiable);
    }

    #[test]
    fn test_without_pagination_is_last_page() {
        let parser = ListingPageParser::new().unwrap();
        let result = parser.parse_document(&page(ITEM, "")).unwrap();

        assert_eq!(result.current_page, 1);
        assert_eq!(result.last_page, 1);
        assert!(result.is_last_page);
    }

    #[test]
    fn test_pagination_with_following_pages() {
        let parser = ListingPageParser::new().unwrap();
        let pagination = r#"<span class="pagination-current">2</span>
            <a class="pagination-page" href="/seite:1">1</a>
            <a class="pagination-page" href="/seite:3">3</a>
            <a class="pagination-page" href="/seite:4">4</a>"#;
        let result = parser.parse_document(&page(ITEM, pagination)).unwrap();

        assert_eq!(result.current_page, 2);
        assert_eq!(result.last_page, 4);
        assert!(!result.is_last_page);
    }

    #[test]
    fn test_pagination_on_final_page() {
        let parser = ListingPageParser::new().unwrap();
        let pagination = r#"<a class="pagination-page" href="/seite:3">3</a>
            <a class="pagination-page" href="/seite:4">4</a>
            <span class="pagination-current">5</span>"#;
        let result = parser.parse_document(&page(ITEM, pagination)).unwrap();

        assert!(result.is_last_page);
    }

    #[test]
    fn test_empty_ad_id_counts_as_missing() {
        let parser = ListingPageParser::new().unwrap();
        let item = r#"<article class="aditem" data-adid=""><a class="ellipsis">Golf</a></article>"#;
        let result = parser.parse_document(&page(item, "")).unwrap();

        assert_eq!(result.items[0].id, None);
        assert_eq!(result.items[0].link, None);
        assert_eq!(result.items[0].title, "Golf");
    }

    #[test]
    fn test_invalid_last_page_number_aborts_page() {
        let parser = ListingPageParser::new().unwrap();
        let pagination = r#"<span class="pagination-current">1</span>
            <a class="pagination-page" href="/seite:2">2</a>
            <a class="pagination-page" href="/seite:3">…</a>"#;
        let err = parser.parse_document(&page(ITEM, pagination)).unwrap_err();

        assert_eq!(
            err,
            ParsingError::InvalidPaginationIndicator {
                indicator: "last_page".to_string(),
                value: "…".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_page_number_aborts_page() {
        let parser = ListingPageParser::new().unwrap();
        let pagination = r#"<span class="pagination-current">zwei</span>"#;
        let err = parser.parse_document(&page(ITEM, pagination)).unwrap_err();

        assert!(matches!(
            err,
            ParsingError::InvalidPaginationIndicator { ref indicator, .. } if indicator == "current_page"
        ));
    }
}
