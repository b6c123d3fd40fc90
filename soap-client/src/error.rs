use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoapError {
    /// Connection, timeout or non-SOAP HTTP failure
    #[error("request to speaker failed: {0}")]
    Network(String),

    /// The body is not a usable SOAP envelope
    #[error("malformed SOAP response: {0}")]
    Parse(String),

    /// UPnP error code from a `<s:Fault>` body
    #[error("UPnP fault {0}")]
    Fault(u16),
}
