//! Search filters and the search result URL they map to
//!
//! The URL grammar is positional: every filter contributes one segment and the
//! segments are concatenated in a fixed order, e.g.
//! `https://www.ebay-kleinanzeigen.de/preis:1000:4000/c216l3331r50+autos.marke_s:bmw`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::site::BASE_URL;

/// Category id, e.g. `216` for cars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn cars() -> Self {
        Self("216".to_string())
    }
}

/// Location id as returned by the site's location suggestion endpoint
/// (`/s-ort-empfehlungen.json?query=Berlin`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

/// Private or commercial seller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "privat")]
    Private,
    #[serde(rename = "gewerblich")]
    Commercial,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "privat",
            Self::Commercial => "gewerblich",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferType {
    #[serde(rename = "angebote")]
    Offer,
    #[serde(rename = "gesuche")]
    Wanted,
}

impl OfferType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offer => "angebote",
            Self::Wanted => "gesuche",
        }
    }
}

/// Distance around the location in km. No radius means the whole place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Radius {
    FiveKm,
    TenKm,
    TwentyKm,
    ThirtyKm,
    FiftyKm,
    OneHundredKm,
    OneHundredFiftyKm,
    TwoHundredKm,
}

impl Radius {
    pub fn km(self) -> u32 {
        match self {
            Self::FiveKm => 5,
            Self::TenKm => 10,
            Self::TwentyKm => 20,
            Self::ThirtyKm => 30,
            Self::FiftyKm => 50,
            Self::OneHundredKm => 100,
            Self::OneHundredFiftyKm => 150,
            Self::TwoHundredKm => 200,
        }
    }
}

impl From<Radius> for u32 {
    fn from(radius: Radius) -> Self {
        radius.km()
    }
}

impl TryFrom<u32> for Radius {
    type Error = String;

    fn try_from(km: u32) -> Result<Self, Self::Error> {
        match km {
            5 => Ok(Self::FiveKm),
            10 => Ok(Self::TenKm),
            20 => Ok(Self::TwentyKm),
            30 => Ok(Self::ThirtyKm),
            50 => Ok(Self::FiftyKm),
            100 => Ok(Self::OneHundredKm),
            150 => Ok(Self::OneHundredFiftyKm),
            200 => Ok(Self::TwoHundredKm),
            other => Err(format!("unsupported radius: {other} km")),
        }
    }
}

/// Category specific filter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParamName {
    #[serde(rename = "autos.marke_s")]
    CarManufacturer,
    #[serde(rename = "autos.model_s")]
    CarModel,
    #[serde(rename = "autos.km_i")]
    CarKm,
    #[serde(rename = "autos.ez_i")]
    CarYearOfRegistration,
    #[serde(rename = "autos.power_i")]
    CarHp,
    #[serde(rename = "autos.tuevy_i")]
    CarTuev,
}

impl ParamName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CarManufacturer => "autos.marke_s",
            Self::CarModel => "autos.model_s",
            Self::CarKm => "autos.km_i",
            Self::CarYearOfRegistration => "autos.ez_i",
            Self::CarHp => "autos.power_i",
            Self::CarTuev => "autos.tuevy_i",
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All filters of a search. Zero prices and page 0 mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParam {
    pub category: Option<Category>,
    pub provider: Option<Provider>,
    pub offer_type: Option<OfferType>,
    pub location: Option<LocationId>,
    pub radius: Option<Radius>,
    pub specific_parameters: BTreeMap<ParamName, String>,
    /// Which result page to request
    pub page: u32,
    /// Price from in euro
    pub price_from: u32,
    /// Price to in euro
    pub price_to: u32,
}

impl SearchParam {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_parameter(mut self, name: ParamName, value: impl Into<String>) -> Self {
        self.specific_parameters.insert(name, value.into());
        self
    }

    /// Advance to the following result page. Page 0 is the first page.
    pub fn next_page(&mut self) {
        self.page = self.page.max(1) + 1;
    }

    fn fmt_category(&self) -> String {
        self.category
            .as_ref()
            .map(|category| format!("/c{}", category.0))
            .unwrap_or_default()
    }

    fn fmt_price(&self) -> String {
        match (self.price_from, self.price_to) {
            (0, 0) => String::new(),
            (0, to) => format!("/preis::{to}"),
            (from, 0) => format!("/preis:{from}:"),
            (from, to) => format!("/preis:{from}:{to}"),
        }
    }

    fn fmt_page(&self) -> String {
        if self.page > 0 {
            format!("/seite:{}", self.page)
        } else {
            String::new()
        }
    }

    fn fmt_provider(&self) -> String {
        self.provider
            .map(|provider| format!("/anbieter:{}", provider.as_str()))
            .unwrap_or_default()
    }

    fn fmt_offer_type(&self) -> String {
        self.offer_type
            .map(|offer| format!("/anzeige:{}", offer.as_str()))
            .unwrap_or_default()
    }

    fn fmt_location(&self) -> String {
        self.location
            .as_ref()
            .map(|location| format!("l{}", location.0))
            .unwrap_or_default()
    }

    fn fmt_radius(&self) -> String {
        self.radius
            .map(|radius| format!("r{}", radius.km()))
            .unwrap_or_default()
    }

    fn fmt_specific_parameters(&self) -> String {
        self.specific_parameters
            .iter()
            .map(|(name, value)| format!("+{name}:{value}"))
            .collect()
    }

    /// Build the search result URL for these filters
    pub fn to_url(&self) -> String {
        let params = [
            self.fmt_offer_type(),
            self.fmt_price(),
            self.fmt_provider(),
            self.fmt_page(),
            self.fmt_category(),
            self.fmt_location(),
            self.fmt_radius(),
            self.fmt_specific_parameters(),
        ]
        .concat();

        format!("{BASE_URL}/{}", params.trim_matches('/'))
    }
}
