//! Payload creation and canonical encoding
//!
//! [`PayloadRequest`] models the "create QR" forms: each variant validates its
//! inputs and produces the exact string handed to the QR image encoder.
//! [`canonical_payload`] goes the other way, rebuilding an encodable string
//! from an already classified record.

use crate::error::PayloadError;
use crate::formatter::{geo, strip_prefix_ignore_case, url, wifi};
use crate::models::{ContentRecord, ContentType, RenderRequest};
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_COORDINATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+\.?[0-9]*$").unwrap());

/// User input for one of the QR creation forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadRequest {
    /// Free text
    Text {
        /// Text to encode
        text: String,
    },
    /// Web link; a missing scheme becomes `https://`
    Link {
        /// Address as typed
        url: String,
    },
    /// Phone number, encoded as a `tel:` URI
    Phone {
        /// Number as typed
        number: String,
    },
    /// Coordinates, encoded as a `geo:` URI
    Geo {
        /// Latitude in decimal degrees
        latitude: String,
        /// Longitude in decimal degrees
        longitude: String,
    },
    /// Wi-Fi network, encoded as a `WIFI:` string
    WiFi {
        /// Network name
        ssid: String,
        /// Pre-shared key, may be empty
        password: String,
        /// Security token (`WPA`, `WEP`, `nopass`), may be empty
        encryption: String,
    },
    /// Contact card, encoded as vCard 3.0
    Contact {
        /// Full name
        name: String,
        /// Email address
        email: String,
        /// Phone number
        phone: String,
    },
}

impl PayloadRequest {
    /// Content type the form creates
    pub fn content_type(&self) -> ContentType {
        match self {
            PayloadRequest::Text { .. } => ContentType::Text,
            PayloadRequest::Link { .. } => ContentType::Link,
            PayloadRequest::Phone { .. } => ContentType::Phone,
            PayloadRequest::Geo { .. } => ContentType::GeoLocation,
            PayloadRequest::WiFi { .. } => ContentType::WiFi,
            PayloadRequest::Contact { .. } => ContentType::Contact,
        }
    }

    /// Produce the canonical payload string
    pub fn encode(&self) -> Result<String, PayloadError> {
        match self {
            PayloadRequest::Text { text } => Ok(required("text", text)?.to_string()),
            PayloadRequest::Link { url } => {
                let url = required("url", url)?;
                if url.starts_with("http://") || url.starts_with("https://") {
                    Ok(url.to_string())
                } else {
                    Ok(format!("https://{url}"))
                }
            }
            PayloadRequest::Phone { number } => {
                Ok(format!("tel:{}", required("phone number", number)?))
            }
            PayloadRequest::Geo {
                latitude,
                longitude,
            } => {
                let lat = coordinate("latitude", latitude)?;
                let lng = coordinate("longitude", longitude)?;
                Ok(format!("geo:{lat},{lng}"))
            }
            PayloadRequest::WiFi {
                ssid,
                password,
                encryption,
            } => {
                let ssid = required("ssid", ssid)?;
                Ok(format!(
                    "WIFI:T:{};S:{};P:{};;",
                    encryption.trim(),
                    ssid,
                    password.trim()
                ))
            }
            PayloadRequest::Contact { name, email, phone } => {
                let card = build_vcard(&[
                    ("FN", name.trim()),
                    ("EMAIL", email.trim()),
                    ("TEL", phone.trim()),
                ]);
                card.ok_or(PayloadError::EmptyContact)
            }
        }
    }

    /// Encode and pair the payload with environment-default render options
    pub fn render_request(&self) -> Result<RenderRequest, PayloadError> {
        Ok(RenderRequest::new(self.encode()?))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, PayloadError> {
    let value = value.trim();
    if value.is_empty() {
        Err(PayloadError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn coordinate<'a>(field: &'static str, value: &'a str) -> Result<&'a str, PayloadError> {
    let value = required(field, value)?;
    if DECIMAL_COORDINATE.is_match(value) {
        Ok(value)
    } else {
        Err(PayloadError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
    }
}

/// vCard 3.0 with one line per non-empty property; `None` when all are empty
fn build_vcard(properties: &[(&str, &str)]) -> Option<String> {
    if properties.iter().all(|(_, value)| value.is_empty()) {
        return None;
    }
    let mut card = String::from("BEGIN:VCARD\nVERSION:3.0\n");
    for (name, value) in properties.iter().filter(|(_, v)| !v.is_empty()) {
        card.push_str(name);
        card.push(':');
        card.push_str(value);
        card.push('\n');
    }
    card.push_str("END:VCARD");
    Some(card)
}

/// Rebuild an encodable payload from a classified record
///
/// Re-classifying the result yields the record's type for Wi-Fi, phone and
/// geolocation records. `Unknown` records have no canonical form, and neither
/// does a geolocation record without coordinates whose raw value would not
/// classify as a location again (a short map link, for instance).
pub fn canonical_payload(record: &ContentRecord) -> Option<String> {
    let fields = record.fields();
    let raw = record.raw_value();

    match record.content_type() {
        ContentType::WiFi => {
            let ssid = fields.get("SSID").unwrap_or("");
            let password = fields.get("Password").unwrap_or("");
            let label = fields
                .get(wifi::ENCRYPTION_LABEL)
                .or_else(|| fields.get(crate::classifier::structured::ENCRYPTION_LABEL))
                .unwrap_or("Open");
            Some(format!(
                "WIFI:T:{};S:{ssid};P:{password};;",
                wifi::security_token(label)
            ))
        }
        ContentType::Phone => {
            let number = fields
                .get("Number")
                .unwrap_or_else(|| strip_prefix_ignore_case(raw, "tel:").unwrap_or(raw));
            let number = strip_prefix_ignore_case(number, "tel:").unwrap_or(number);
            Some(format!("tel:{}", number.trim()))
        }
        ContentType::GeoLocation => match fields.get("") {
            Some(pair) => Some(format!("geo:{}", pair.replace(", ", ","))),
            None if geo::is_geo_location(raw.trim()) && !url::is_link(raw.trim()) => {
                Some(raw.trim().to_string())
            }
            None => None,
        },
        ContentType::Link => Some(fields.get("URL").unwrap_or(raw).to_string()),
        ContentType::Contact => {
            let address = fields
                .get("Address")
                .map(|a| format!(";;{a}"))
                .unwrap_or_default();
            let card = build_vcard(&[
                ("FN", fields.get("Name").unwrap_or("")),
                ("TEL", fields.get("Phone").unwrap_or("")),
                ("EMAIL", fields.get("Email").unwrap_or("")),
                ("ORG", fields.get("Organization").unwrap_or("")),
                ("ADR", address.as_str()),
                ("URL", fields.get("Website").unwrap_or("")),
            ]);
            Some(card.unwrap_or_else(|| raw.to_string()))
        }
        ContentType::Text => Some(raw.to_string()),
        ContentType::Unknown => None,
    }
}
