//! Error types for the discovery system.

use thiserror::Error;

/// Error type for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Socket setup, multicast send or description fetch failed
    #[error("Network error: {0}")]
    NetworkError(String),
    /// SSDP datagram or device description could not be understood
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The responder is not a Sonos speaker
    #[error("Invalid device: {0}")]
    InvalidDevice(String),
}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
