use crate::config;
use serde::{Deserialize, Serialize};

/// Error correction level requested from the QR image encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Parse a level letter (case-insensitive)
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "L" => Some(ECLevel::L),
            "M" => Some(ECLevel::M),
            "Q" => Some(ECLevel::Q),
            "H" => Some(ECLevel::H),
            _ => None,
        }
    }

    /// Approximate share of damaged codewords the level can recover, in percent
    pub fn recovery_percent(&self) -> u8 {
        match self {
            ECLevel::L => 7,
            ECLevel::M => 15,
            ECLevel::Q => 25,
            ECLevel::H => 30,
        }
    }
}

/// Rendering parameters handed to the QR image encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Output edge length in pixels (the image is square)
    pub size: u32,
    /// Quiet-zone width in modules
    pub margin: u32,
    /// Error correction level
    pub error_correction: ECLevel,
}

impl RenderOptions {
    /// Options from `QRCRAFT_RENDER_*` environment defaults
    pub fn from_env() -> Self {
        Self {
            size: config::render_size(),
            margin: config::render_margin(),
            error_correction: config::render_error_correction(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 400,
            margin: 2,
            error_correction: ECLevel::M,
        }
    }
}

/// Canonical payload plus rendering parameters: the encoder's input contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Canonical encoded string
    pub payload: String,
    /// Rendering parameters
    pub options: RenderOptions,
}

impl RenderRequest {
    /// Create a request with environment-default options
    pub fn new(payload: impl Into<String>) -> Self {
        Self::with_options(payload, RenderOptions::from_env())
    }

    /// Create a request with explicit options
    pub fn with_options(payload: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            payload: payload.into(),
            options,
        }
    }
}
