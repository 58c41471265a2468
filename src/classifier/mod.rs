//! Payload classification
//!
//! Two entry points share the [`ContentRecord`] result type:
//! - [`classify_raw`] infers the type from the text alone
//! - [`classify_structured`] trusts the decoder's own value-type tag
//!
//! Rules run in a fixed priority order and the first match wins:
//! link → vCard → Wi-Fi → `tel:` → phone heuristic → geolocation → text.

/// Structured decoder record adapter
pub mod structured;

pub use structured::classify_structured;

use crate::config;
use crate::formatter::{
    clean_url, is_geo_location, is_link, is_phone_number, is_tel_uri, is_vcard, is_wifi,
    parse_geo, parse_vcard, parse_wifi,
};
use crate::models::{ContentRecord, ContentType, Fields};
use rayon::prelude::*;

/// Classify a raw payload string
///
/// The input is trimmed first; the trimmed text becomes the record's raw value.
/// Never fails: text matching no rule is `Text`.
pub fn classify_raw(text: &str) -> ContentRecord {
    let text = text.trim();

    let record = if is_link(text) {
        log::trace!("rule matched: link prefix");
        let mut fields = Fields::new();
        fields.insert("URL", clean_url(text));
        ContentRecord::new(ContentType::Link, text, fields)
    } else if is_vcard(text) {
        log::trace!("rule matched: vCard");
        ContentRecord::new(ContentType::Contact, text, parse_vcard(text))
    } else if is_wifi(text) {
        log::trace!("rule matched: Wi-Fi string");
        ContentRecord::new(ContentType::WiFi, text, parse_wifi(text))
    } else if is_tel_uri(text) {
        log::trace!("rule matched: tel: URI");
        ContentRecord::bare(ContentType::Phone, text)
    } else if is_phone_number(text) {
        log::trace!("rule matched: phone heuristic");
        ContentRecord::bare(ContentType::Phone, text)
    } else if is_geo_location(text) {
        log::trace!("rule matched: geolocation");
        ContentRecord::new(ContentType::GeoLocation, text, parse_geo(text))
    } else {
        ContentRecord::bare(ContentType::Text, text)
    };

    log::debug!(
        "classified {} byte payload as {} ({} fields)",
        text.len(),
        record.content_type(),
        record.fields().len()
    );
    record
}

/// Classify many payloads; output order matches input order
///
/// Batches at or above `QRCRAFT_PARALLEL_THRESHOLD` are spread across the rayon
/// thread pool.
pub fn classify_batch<S>(payloads: &[S]) -> Vec<ContentRecord>
where
    S: AsRef<str> + Sync,
{
    if payloads.len() >= config::parallel_batch_threshold() {
        log::debug!("classifying {} payloads in parallel", payloads.len());
        payloads.par_iter().map(|p| classify_raw(p.as_ref())).collect()
    } else {
        payloads.iter().map(|p| classify_raw(p.as_ref())).collect()
    }
}
