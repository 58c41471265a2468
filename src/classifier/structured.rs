use crate::formatter::clean_url;
use crate::models::{
    BarcodeRecord, BarcodeValue, ContactInfo, ContentRecord, ContentType, Fields, GeoPoint,
    PhoneEntry, UrlBookmark, WifiCredentials, WifiEncryption,
};

/// Label of the security field produced from decoder Wi-Fi records
pub const ENCRYPTION_LABEL: &str = "Encryption Type";

/// Convert a decoder-typed record into a [`ContentRecord`]
///
/// The decoder's own sub-field extraction is used as-is; missing sub-records
/// produce fewer fields, never an error.
pub fn classify_structured(record: &BarcodeRecord) -> ContentRecord {
    let raw = record.raw_value.as_deref().unwrap_or("");

    match &record.value {
        BarcodeValue::Url(bookmark) => {
            ContentRecord::new(ContentType::Link, raw, url_fields(bookmark.as_ref(), raw))
        }
        BarcodeValue::Phone(phone) => {
            ContentRecord::new(ContentType::Phone, raw, phone_fields(phone.as_ref(), raw))
        }
        BarcodeValue::Wifi(wifi) => {
            ContentRecord::new(ContentType::WiFi, raw, wifi_fields(wifi.as_ref()))
        }
        BarcodeValue::Geo(point) => {
            ContentRecord::new(ContentType::GeoLocation, raw, geo_fields(point.as_ref()))
        }
        BarcodeValue::ContactInfo(contact) => {
            ContentRecord::new(ContentType::Contact, raw, contact_fields(contact.as_ref()))
        }
        BarcodeValue::Text => ContentRecord::bare(ContentType::Text, raw),
        BarcodeValue::Other => {
            log::debug!("decoder reported an unmodelled value type");
            ContentRecord::bare(ContentType::Unknown, raw)
        }
    }
}

fn url_fields(bookmark: Option<&UrlBookmark>, raw: &str) -> Fields {
    let url = bookmark.and_then(|b| b.url.as_deref()).unwrap_or(raw);
    let title = bookmark.and_then(|b| b.title.as_deref()).unwrap_or("");

    let mut fields = Fields::new();
    fields.insert("URL", clean_url(url));
    fields.insert("Title", title);
    fields
}

fn phone_fields(phone: Option<&PhoneEntry>, raw: &str) -> Fields {
    let number = phone.and_then(|p| p.number.as_deref()).unwrap_or(raw);
    let kind = phone.map(|p| p.kind.label()).unwrap_or("");

    let mut fields = Fields::new();
    fields.insert("Number", number);
    fields.insert("Type", kind);
    fields
}

fn wifi_fields(wifi: Option<&WifiCredentials>) -> Fields {
    if wifi.is_none() {
        log::warn!("Wi-Fi barcode without credentials");
    }
    let ssid = wifi.and_then(|w| w.ssid.as_deref()).unwrap_or("");
    let password = wifi.and_then(|w| w.password.as_deref()).unwrap_or("");
    let encryption = wifi.map(|w| w.encryption).unwrap_or(WifiEncryption::Unknown);

    let mut fields = Fields::new();
    fields.insert("SSID", ssid);
    fields.insert("Password", password);
    fields.insert(ENCRYPTION_LABEL, encryption.label());
    fields
}

fn geo_fields(point: Option<&GeoPoint>) -> Fields {
    let mut fields = Fields::new();
    match point {
        Some(point) if point.lat.is_finite() && point.lng.is_finite() => fields.insert(
            "",
            format!(
                "{}, {}",
                format_coordinate(point.lat),
                format_coordinate(point.lng)
            ),
        ),
        Some(point) => log::warn!("geo barcode with non-finite point {point:?}"),
        None => log::warn!("geo barcode without a point"),
    }
    fields
}

/// Plain decimal notation, always with a fractional part (`37.0`)
fn format_coordinate(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn contact_fields(contact: Option<&ContactInfo>) -> Fields {
    let mut fields = Fields::new();
    let Some(contact) = contact else {
        log::warn!("contact barcode without contact info");
        return fields;
    };

    if let Some(name) = &contact.name {
        let first = name.first.as_deref().unwrap_or("");
        let last = name.last.as_deref().unwrap_or("");
        fields.insert("Name", format!("{first} {last}").trim());
    }
    if let Some(number) = contact.phones.first().and_then(|p| p.number.as_deref()) {
        fields.insert("Phone", number);
    }
    if let Some(org) = &contact.organization {
        fields.insert("Organization", org.as_str());
    }
    if let Some(address) = contact.addresses.first() {
        let lines: Vec<&str> = address
            .lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect();
        fields.insert("Address", lines.join(", "));
    }
    fields
}
