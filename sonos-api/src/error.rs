use soap_client::SoapError;
use thiserror::Error;

/// High-level API errors for Sonos operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The speaker could not be reached or the connection dropped
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The speaker answered, but not in the shape the operation expects
    ///
    /// Covers the SOAP envelope as well as nested documents such as
    /// ZoneGroupState or DIDL-Lite results.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// UPnP fault returned by the device, e.g. 701 "transition not available"
    #[error("SOAP fault: error code {0}")]
    SoapFault(u16),

    /// An operation parameter is outside what the device accepts
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<SoapError> for ApiError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => ApiError::NetworkError(msg),
            SoapError::Parse(msg) => ApiError::ParseError(msg),
            SoapError::Fault(code) => ApiError::SoapFault(code),
        }
    }
}
