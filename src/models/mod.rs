pub mod barcode;
pub mod content_type;
pub mod record;
pub mod render;

pub use barcode::{
    Address, BarcodeRecord, BarcodeValue, ContactInfo, GeoPoint, PersonName, PhoneEntry,
    PhoneKind, UrlBookmark, WifiCredentials, WifiEncryption,
};
pub use content_type::ContentType;
pub use record::{ContentRecord, Fields};
pub use render::{ECLevel, RenderOptions, RenderRequest};
