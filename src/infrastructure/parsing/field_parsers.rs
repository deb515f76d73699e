//! Field level parsers for Kleinanzeigen text fragments
//!
//! Pure functions turning a single trimmed text fragment into a typed value.
//! Malformed input is reported as a recoverable `FieldParseFailed`, never a
//! panic; the extractors decide what to do with it.

use chrono::NaiveDate;
use tracing::trace;

use super::{ParsingError, ParsingResult};
use crate::domain::constants::markers::{
    ACTIVE_SINCE_PREFIX, AD_NUMBER_PREFIX, DATE_FORMAT, NEGOTIABLE, RATING_PREFIX,
};

/// Price in whole euros plus the "VB" flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Price {
    pub amount: u32,
    pub negotiable: bool,
}

/// Zip code and place name of a location fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub zip_code: String,
    pub place: String,
}

/// Date and ad number read from the listing-age block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingAge {
    pub listed_since: Option<NaiveDate>,
    pub id: Option<String>,
}

/// Parse a price fragment such as `"4.500 € VB"`, `"4.500 €"` or `"VB"`.
///
/// Shapes other than amount + currency [+ VB] give a zero price. Only an
/// unparseable amount is an error.
pub fn parse_price(text: &str) -> ParsingResult<Price> {
    let tokens: Vec<&str> = text.split(' ').collect();
    let amount = tokens[0].replace('.', "");

    if amount == NEGOTIABLE {
        return Ok(Price {
            amount: 0,
            negotiable: true,
        });
    }

    if !matches!(tokens.len(), 2 | 3) {
        return Ok(Price::default());
    }

    let amount = amount
        .parse::<u32>()
        .map_err(|e| ParsingError::field_parse_failed("price", text, e))?;

    Ok(Price {
        amount,
        negotiable: tokens.len() == 3,
    })
}

/// Split `"16540 Hohen Neuendorf\n(13km)"` into zip and place.
///
/// A distance annotation after the first newline is dropped. Input without
/// a space gives an empty location.
pub fn parse_location(text: &str) -> Location {
    let Some((zip_code, rest)) = text.trim().split_once(' ') else {
        return Location::default();
    };

    let place = rest.split('\n').next().unwrap_or_default().trim_end();

    Location {
        zip_code: zip_code.to_string(),
        place: place.to_string(),
    }
}

fn parse_date(field: &str, text: &str) -> ParsingResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| ParsingError::field_parse_failed(field, text, e))
}

/// Parse the listing-age block, e.g. `"22.03.2021\n Anzeigennr.: 1708911891"`.
///
/// An invalid date still yields the ad number.
pub fn parse_listing_age(text: &str) -> ListingAge {
    let text = text.replace('\n', "");
    let Some((date, rest)) = text.split_once(' ') else {
        return ListingAge::default();
    };

    let rest = rest.trim();
    let id = rest.strip_prefix(AD_NUMBER_PREFIX).unwrap_or(rest);

    let listed_since = match parse_date("listed_since", date) {
        Ok(date) => Some(date),
        Err(e) => {
            trace!("Ignoring listing date: {}", e);
            None
        }
    };

    ListingAge {
        listed_since,
        id: Some(id.to_string()).filter(|id| !id.is_empty()),
    }
}

/// Parse the seller tenure fragment `"Aktiv seit 06.10.2012"`.
///
/// Empty input means the page has no tenure and is not an error.
pub fn parse_active_since(text: &str) -> ParsingResult<Option<NaiveDate>> {
    if text.is_empty() {
        return Ok(None);
    }

    let Some(index) = text.find(ACTIVE_SINCE_PREFIX) else {
        return Err(ParsingError::field_parse_failed(
            "active_since",
            text,
            format!("missing prefix {ACTIVE_SINCE_PREFIX:?}"),
        ));
    };

    let date = text[index + ACTIVE_SINCE_PREFIX.len()..]
        .split('\n')
        .next()
        .unwrap_or_default();

    parse_date("active_since", date).map(Some)
}

/// Split a `"label\nvalue"` detail fragment into its trimmed parts
pub fn parse_detail(text: &str) -> ParsingResult<(String, String)> {
    let (label, value) = text.split_once('\n').ok_or_else(|| {
        ParsingError::field_parse_failed("detail", text, "no newline between label and value")
    })?;

    Ok((label.trim().to_string(), value.trim().to_string()))
}

/// Strip the `"Zufriedenheit: "` prefix from the seller rating badge
pub fn parse_rating(text: &str) -> &str {
    text.strip_prefix(RATING_PREFIX).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, DATE_FORMAT).unwrap()
    }

    #[rstest]
    #[case::only_negotiable("VB", 0, true)]
    #[case::only_price("4.500 €", 4500, false)]
    #[case::price_and_negotiable("4.500 € VB", 4500, true)]
    #[case::small_price("80 €", 80, false)]
    #[case::empty("", 0, false)]
    #[case::single_token("4.500", 0, false)]
    #[case::too_many_tokens("1 2 3 4", 0, false)]
    fn test_parse_price(#[case] text: &str, #[case] amount: u32, #[case] negotiable: bool) {
        let price = parse_price(text).unwrap();
        assert_eq!(price, Price { amount, negotiable });
    }

    #[test]
    fn test_parse_price_reports_bad_amount() {
        let err = parse_price("Zu verschenken").unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, ParsingError::FieldParseFailed { ref field, .. } if field == "price"));
    }

    #[rstest]
    #[case::zip_and_location("10119 Mitte", "10119", "Mitte")]
    #[case::trailing_tab("10119 Mitte\t", "10119", "Mitte")]
    #[case::multi_word("16540 Hohen Neuendorf", "16540", "Hohen Neuendorf")]
    #[case::with_distance("16540 Hohen Neuendorf\n(13km)", "16540", "Hohen Neuendorf")]
    #[case::indented_distance("16540 Hohen Neuendorf\n      (13 km)", "16540", "Hohen Neuendorf")]
    #[case::only_location("onlylocation", "", "")]
    #[case::empty("", "", "")]
    fn test_parse_location(#[case] text: &str, #[case] zip: &str, #[case] place: &str) {
        let location = parse_location(text);
        assert_eq!(location.zip_code, zip);
        assert_eq!(location.place, place);
    }

    #[test]
    fn test_parse_listing_age() {
        let age = parse_listing_age("22.03.2021\n Anzeigennr.: 1708911891");
        assert_eq!(age.listed_since, Some(date("22.03.2021")));
        assert_eq!(age.id.as_deref(), Some("1708911891"));
    }

    #[test]
    fn test_parse_listing_age_keeps_id_on_bad_date() {
        let age = parse_listing_age("gestern Anzeigennr.: 1708911891");
        assert_eq!(age.listed_since, None);
        assert_eq!(age.id.as_deref(), Some("1708911891"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::date_only("22.03.2021")]
    fn test_parse_listing_age_without_split(#[case] text: &str) {
        assert_eq!(parse_listing_age(text), ListingAge::default());
    }

    #[rstest]
    #[case::km("Kilometerstand\n38.600 km", "Kilometerstand", "38.600 km")]
    #[case::doors("Anzahl Türen\n2/3", "Anzahl Türen", "2/3")]
    #[case::spaces_value(
        "Fahrzeugzustand\nUnbeschädigtes Fahrzeug",
        "Fahrzeugzustand",
        "Unbeschädigtes Fahrzeug"
    )]
    #[case::indented_value("Erstzulassung\n        Mai 2009", "Erstzulassung", "Mai 2009")]
    fn test_parse_detail(#[case] text: &str, #[case] label: &str, #[case] value: &str) {
        let (key, val) = parse_detail(text).unwrap();
        assert_eq!(key, label);
        assert_eq!(val, value);
    }

    #[test]
    fn test_parse_detail_without_newline() {
        let err = parse_detail("Kilometerstand").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[rstest]
    #[case::empty("", "")]
    #[case::top("Zufriedenheit: TOP", "TOP")]
    #[case::no_prefix("OK", "OK")]
    fn test_parse_rating(#[case] text: &str, #[case] rating: &str) {
        assert_eq!(parse_rating(text), rating);
    }

    #[test]
    fn test_parse_active_since() {
        assert_eq!(
            parse_active_since("Aktiv seit 06.10.2012").unwrap(),
            Some(date("06.10.2012"))
        );
        assert_eq!(
            parse_active_since("Privater Nutzer\nAktiv seit 06.10.2012\n").unwrap(),
            Some(date("06.10.2012"))
        );
        assert_eq!(parse_active_since("").unwrap(), None);
    }

    #[rstest]
    #[case::missing_prefix("Seit 06.10.2012")]
    #[case::bad_date("Aktiv seit gestern")]
    fn test_parse_active_since_errors(#[case] text: &str) {
        let err = parse_active_since(text).unwrap_err();
        assert!(err.is_recoverable());
    }

    proptest! {
        #[test]
        fn prop_parse_price_never_panics(text in "\\PC*") {
            let _ = parse_price(&text);
        }

        #[test]
        fn prop_formatted_prices_round_trip(amount in 0u32..10_000_000, negotiable: bool) {
            let mut digits = amount.to_string();
            let mut grouped = String::new();
            while digits.len() > 3 {
                let tail = digits.split_off(digits.len() - 3);
                grouped = format!(".{tail}{grouped}");
            }
            let mut text = format!("{digits}{grouped} €");
            if negotiable {
                text.push_str(" VB");
            }
            prop_assert_eq!(parse_price(&text).unwrap(), Price { amount, negotiable });
        }

        #[test]
        fn prop_zip_never_contains_space(text in "\\PC*") {
            let location = parse_location(&text);
            prop_assert!(!location.zip_code.contains(' '));
            prop_assert!(!location.place.contains('\n'));
        }
    }
}
