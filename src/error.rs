//! Error types for payload creation

/// Reasons a "create QR" form cannot produce a payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// A required input was empty after trimming
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A contact needs at least one of name, email or phone
    #[error("contact needs a name, email or phone number")]
    EmptyContact,

    /// A coordinate is not a plain decimal number
    #[error("{field} is not a decimal coordinate: {value:?}")]
    InvalidCoordinate {
        /// Which coordinate failed
        field: &'static str,
        /// The rejected input
        value: String,
    },
}
