//! QRCraft - QR payload classification and formatting
//!
//! Takes the string decoded from a QR symbol (or a decoder's typed record),
//! decides what kind of content it carries and extracts the fields a user
//! wants to see. It also builds the canonical payload strings used when
//! creating new codes.
//!
//! ```
//! use qrcraft::ContentType;
//!
//! let record = qrcraft::classify_raw("WIFI:T:WPA;S:MyNet;P:secret;;");
//! assert_eq!(record.content_type(), ContentType::WiFi);
//! assert_eq!(record.fields().get("SSID"), Some("MyNet"));
//! ```
//!
//! Classification is pure and infallible: every input maps to a record, with
//! `Text` as the fallback. Image capture, barcode decoding and QR rendering
//! live outside this crate.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Raw-text and structured-record classification
pub mod classifier;
/// Environment-driven defaults
pub mod config;
/// Error types
pub mod error;
/// Format recognizers and field extractors
pub mod formatter;
/// Core data structures (ContentType, ContentRecord, decoder records, render options)
pub mod models;
/// Payload creation and canonical encoding
pub mod payload;
/// Payload-file helpers for the command-line tools
pub mod tools;

pub use classifier::{classify_batch, classify_raw, classify_structured};
pub use error::PayloadError;
pub use formatter::clean_url;
pub use models::{
    BarcodeRecord, BarcodeValue, ContentRecord, ContentType, ECLevel, Fields, RenderOptions,
    RenderRequest,
};
pub use payload::{PayloadRequest, canonical_payload};
