use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a QR payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// Free-form text
    Text,
    /// Web link
    Link,
    /// Contact card (vCard or decoder contact info)
    Contact,
    /// Phone number or `tel:` URI
    Phone,
    /// Coordinate pair, `geo:` URI or map link
    GeoLocation,
    /// Wi-Fi network credentials
    WiFi,
    /// Anything the decoder could not type
    Unknown,
}

impl ContentType {
    /// Every variant, in display order
    pub const ALL: [ContentType; 7] = [
        ContentType::Text,
        ContentType::Link,
        ContentType::Contact,
        ContentType::Phone,
        ContentType::GeoLocation,
        ContentType::WiFi,
        ContentType::Unknown,
    ];

    /// Human-readable label shown above the extracted fields
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Text => "Text",
            ContentType::Link => "Link",
            ContentType::Contact => "Contact",
            ContentType::Phone => "Phone Number",
            ContentType::GeoLocation => "Geolocation",
            ContentType::WiFi => "Wi-Fi",
            ContentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
