//! Payload format recognizers and field extractors
//!
//! Each submodule owns one payload format:
//! - URL cleaning and link prefixes
//! - vCard contact cards
//! - `WIFI:` network strings
//! - Phone numbers and `tel:` URIs
//! - Coordinates, `geo:` URIs and map links

/// Geolocation detection and coordinate extraction
pub mod geo;
/// Phone number heuristic
pub mod phone;
/// URL cleaning
pub mod url;
/// vCard field extraction
pub mod vcard;
/// Wi-Fi network string parsing
pub mod wifi;

pub use geo::{is_geo_location, parse_geo};
pub use phone::{is_phone_number, is_tel_uri};
pub use url::{clean_url, is_link};
pub use vcard::{is_vcard, parse_vcard};
pub use wifi::{is_wifi, parse_wifi};

/// ASCII case-insensitive prefix test
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Strip an ASCII prefix regardless of case
pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if starts_with_ignore_case(text, prefix) {
        // The matched bytes are ASCII, so the cut lands on a char boundary.
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
