//! Structured records supplied by an external barcode decoder
//!
//! Decoders that understand payload formats hand over a value-type tag plus
//! pre-parsed sub-records. Any sub-record may be missing; missing data is
//! treated as absent, never as an error.

/// Decoder output for one scanned symbol
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarcodeRecord {
    /// Raw payload string, if the decoder produced one
    pub raw_value: Option<String>,
    /// Value-type tag with its pre-parsed sub-record
    pub value: BarcodeValue,
}

impl BarcodeRecord {
    /// Create a record from a raw value and typed value
    pub fn new(raw_value: impl Into<String>, value: BarcodeValue) -> Self {
        Self {
            raw_value: Some(raw_value.into()),
            value,
        }
    }
}

/// Value-type tag reported by the decoder
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BarcodeValue {
    /// URL bookmark
    Url(Option<UrlBookmark>),
    /// Phone number
    Phone(Option<PhoneEntry>),
    /// Wi-Fi credentials
    Wifi(Option<WifiCredentials>),
    /// Geographic point
    Geo(Option<GeoPoint>),
    /// Contact card
    ContactInfo(Option<ContactInfo>),
    /// Plain text
    Text,
    /// Any tag this engine does not model (ISBN, SMS, calendar event, ...)
    #[default]
    Other,
}

/// URL with optional title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBookmark {
    /// Link target
    pub url: Option<String>,
    /// Page title, if encoded
    pub title: Option<String>,
}

/// Kind of phone line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneKind {
    /// Not reported
    #[default]
    Unknown,
    /// Work line
    Work,
    /// Home line
    Home,
    /// Mobile line
    Mobile,
    /// Fax line
    Fax,
}

impl PhoneKind {
    /// Display label; empty for `Unknown`
    pub fn label(&self) -> &'static str {
        match self {
            PhoneKind::Work => "Work",
            PhoneKind::Home => "Home",
            PhoneKind::Mobile => "Mobile",
            PhoneKind::Fax => "Fax",
            PhoneKind::Unknown => "",
        }
    }
}

/// Phone number with line kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneEntry {
    /// Dialable number
    pub number: Option<String>,
    /// Line kind
    pub kind: PhoneKind,
}

/// Wi-Fi security reported by the decoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WifiEncryption {
    /// No password
    Open,
    /// WPA/WPA2 personal
    Wpa,
    /// Legacy WEP
    Wep,
    /// Not reported
    #[default]
    Unknown,
}

impl WifiEncryption {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            WifiEncryption::Open => "Open",
            WifiEncryption::Wpa => "WPA2",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::Unknown => "Unknown",
        }
    }
}

/// Wi-Fi network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiCredentials {
    /// Network name
    pub ssid: Option<String>,
    /// Pre-shared key
    pub password: Option<String>,
    /// Security type
    pub encryption: WifiEncryption,
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Structured personal name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    /// Given name
    pub first: Option<String>,
    /// Family name
    pub last: Option<String>,
}

/// Postal address as display lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Address lines, top to bottom
    pub lines: Vec<String>,
}

/// Contact card fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    /// Person name
    pub name: Option<PersonName>,
    /// Phone numbers, preferred first
    pub phones: Vec<PhoneEntry>,
    /// Company or organization
    pub organization: Option<String>,
    /// Postal addresses, preferred first
    pub addresses: Vec<Address>,
}
