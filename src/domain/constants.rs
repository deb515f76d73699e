//! Marketplace characteristics and domain constants
//!
//! Fixed strings of the Kleinanzeigen markup and URL scheme. These are a
//! compatibility contract with the site and must not be reformatted.

/// Site level constants
pub mod site {
    /// Site base URL
    pub const BASE_URL: &str = "https://www.ebay-kleinanzeigen.de";

    /// Path segment preceding an ad identifier in a canonical ad URL
    pub const AD_PATH: &str = "/s-anzeige/";

    /// Build the canonical URL of an ad from its identifier
    pub fn ad_url(id: &str) -> String {
        format!("{BASE_URL}{AD_PATH}{id}")
    }
}

/// Literal markers found inside text fragments
pub mod markers {
    /// Negotiable price marker ("Verhandlungsbasis")
    pub const NEGOTIABLE: &str = "VB";

    /// Prefix of the ad number inside the listing-age block
    pub const AD_NUMBER_PREFIX: &str = "Anzeigennr.: ";

    /// Prefix of the seller tenure fragment
    pub const ACTIVE_SINCE_PREFIX: &str = "Aktiv seit ";

    /// Prefix of the seller satisfaction badge
    pub const RATING_PREFIX: &str = "Zufriedenheit: ";

    /// Date layout used by every date-bearing fragment (DD.MM.YYYY)
    pub const DATE_FORMAT: &str = "%d.%m.%Y";
}
