//! Search use cases
//!
//! Pages through the results of one search and optionally pulls the detail
//! page of every listing found.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{ListingSummary, Record, SearchParam};
use crate::infrastructure::{CrawlConfig, MarketplaceCollector};

/// Everything collected for one search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub pages_visited: u32,
    pub listings: Vec<ListingSummary>,
    pub records: Vec<Record>,
}

pub struct SearchUseCases {
    collector: MarketplaceCollector,
    crawl: CrawlConfig,
}

impl SearchUseCases {
    pub fn new(collector: MarketplaceCollector, crawl: CrawlConfig) -> Self {
        Self { collector, crawl }
    }

    /// Walk result pages until the last one or the page limit
    pub async fn collect_listings(&self, search: &SearchParam) -> Result<(u32, Vec<ListingSummary>)> {
        let mut search = search.clone();
        let mut listings = Vec::new();
        let mut pages_visited = 0;

        loop {
            let page = self.collector.fetch_listing_page(&search).await?;
            pages_visited += 1;
            listings.extend(page.items);

            if !should_continue(page.is_last_page, pages_visited, self.crawl.max_pages) {
                break;
            }
            search.next_page();
        }

        info!("Collected {} listings from {} pages", listings.len(), pages_visited);
        Ok((pages_visited, listings))
    }

    /// Run the whole search. Detail pages that fail are logged and skipped.
    pub async fn run(&self, search: &SearchParam) -> Result<SearchOutcome> {
        let (pages_visited, listings) = self.collect_listings(search).await?;

        let mut records = Vec::new();
        if self.crawl.fetch_records {
            for link in listings.iter().filter_map(|listing| listing.link.as_deref()) {
                if self.collector.cancellation_token().is_cancelled() {
                    warn!("Cancelled after {} records", records.len());
                    break;
                }

                match self.collector.fetch_record(link).await {
                    Ok(record) => records.push(record),
                    Err(e) => warn!("Skipping {}: {:#}", link, e),
                }
            }
        }

        Ok(SearchOutcome {
            pages_visited,
            listings,
            records,
        })
    }
}

/// A limit of 0 means no limit
fn should_continue(is_last_page: bool, pages_visited: u32, max_pages: u32) -> bool {
    !is_last_page && (max_pages == 0 || pages_visited < max_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, 1, 10, false)]
    #[case(false, 1, 10, true)]
    #[case(false, 10, 10, false)]
    #[case(false, 50, 0, true)]
    fn test_should_continue(
        #[case] is_last_page: bool,
        #[case] pages_visited: u32,
        #[case] max_pages: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(should_continue(is_last_page, pages_visited, max_pages), expected);
    }

    #[test]
    fn test_outcome_serializes_records() {
        let outcome = SearchOutcome {
            pages_visited: 1,
            ..SearchOutcome::default()
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["pagesVisited"], 1);
        assert!(json["records"].as_array().unwrap().is_empty());
    }
}
