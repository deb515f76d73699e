//! Domain module - marketplace entities and value objects
//!
//! Plain values produced by the parsers and consumed by callers. Nothing in
//! here performs I/O.

pub mod constants;
pub mod listing;
pub mod record;
pub mod search;

// Re-export commonly used items
pub use listing::{ListingPage, ListingSummary};
pub use record::{DetailPair, Record, Seller};
pub use search::{Category, LocationId, OfferType, ParamName, Provider, Radius, SearchParam};
