/// Result type alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong talking to a fan.
///
/// Failing to establish a connection is not in here: [`crate::FanClient::connect`]
/// reports that as `false` so the caller can decide when to try again.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured device model is not one this crate knows how to drive.
    #[error("Unsupported device model: {0}")]
    UnsupportedModel(String),

    /// A caller supplied value lies outside what the fan accepts. Raised before any I/O.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// The device returned a payload whose size does not match the characteristic layout.
    #[error("{characteristic}: expected {expected} bytes, got {actual}")]
    PayloadLength {
        characteristic: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A text characteristic did not contain valid text.
    #[error("{characteristic}: payload is not valid text: {payload}")]
    InvalidText {
        characteristic: &'static str,
        payload: String,
    },

    /// A read or write was attempted without a connection handle.
    #[error("Not connected")]
    NotConnected,

    /// The platform Bluetooth stack failed a read or write.
    #[error("Transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
