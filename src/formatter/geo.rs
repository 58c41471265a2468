use crate::models::Fields;
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

/// Accepted geolocation shapes:
/// 1. bare `lat,lng` (whole text)
/// 2. `geo:lat,lng` URI prefix
/// 3. Google Maps link prefix
static GEO_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^-?[0-9]+\.?[0-9]*\s*,\s*-?[0-9]+\.?[0-9]*$",
        r"(?i)^geo:-?[0-9]+\.?[0-9]*,-?[0-9]+\.?[0-9]*",
        r"(?i)^https?://(maps\.google|www\.google\.com/maps|goo\.gl/maps)",
    ])
    .unwrap()
});

/// First coordinate pair anywhere in the text
static COORDINATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?[0-9]+\.?[0-9]*)\s*,\s*(-?[0-9]+\.?[0-9]*)").unwrap());

/// True when the text looks like a location
pub fn is_geo_location(text: &str) -> bool {
    GEO_PATTERNS.is_match(text)
}

/// Extract the first coordinate pair as a single unlabeled field
///
/// Yields no fields when the text carries no coordinates (a short map link,
/// for instance).
pub fn parse_geo(location: &str) -> Fields {
    let location = location
        .strip_prefix("geo:")
        .or_else(|| location.strip_prefix("GEO:"))
        .unwrap_or(location)
        .trim();

    let mut fields = Fields::new();
    if let Some(caps) = COORDINATES.captures(location) {
        let lat = caps[1].trim();
        let lng = caps[2].trim();
        fields.insert("", format!("{lat}, {lng}"));
    }
    fields
}
