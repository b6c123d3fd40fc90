//! Sonos device discovery library
//!
//! Finds Sonos speakers on the local network with an SSDP M-SEARCH and reads
//! each responder's UPnP device description.
//!
//! ```no_run
//! use sonos_discovery::get;
//!
//! for device in get() {
//!     println!("Found {} at {}", device.name, device.ip_address);
//! }
//! ```
//!
//! When any one speaker will do, stop at the first response instead of
//! waiting out the timeout:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! if let Some(device) = sonos_discovery::first_with_timeout(Duration::from_secs(3)) {
//!     println!("Asking {} for the household topology", device.ip_address);
//! }
//! ```

pub mod device;
mod discovery;
mod error;
mod ssdp;

use std::time::Duration;

use tracing::warn;

pub use discovery::DiscoveryIterator;
pub use error::{DiscoveryError, Result};

/// Default time to wait for SSDP responses
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// A discovered Sonos speaker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// UDN without the `uuid:` prefix, e.g. "RINCON_000E58A0123456"
    pub id: String,
    /// Room name, or the friendly name when the speaker reports none
    pub name: String,
    pub ip_address: String,
    /// Port the description was served from (1400 on real speakers)
    pub port: u16,
    pub model_name: String,
}

/// Discover all speakers within [`DEFAULT_TIMEOUT`]
pub fn get() -> Vec<Device> {
    get_with_timeout(DEFAULT_TIMEOUT)
}

/// Discover all speakers answering within `timeout`
pub fn get_with_timeout(timeout: Duration) -> Vec<Device> {
    get_iter_with_timeout(timeout).collect()
}

/// First speaker to answer, or `None` if none does within `timeout`
pub fn first_with_timeout(timeout: Duration) -> Option<Device> {
    get_iter_with_timeout(timeout).next()
}

/// Streaming discovery; socket failures yield an empty iterator
pub fn get_iter_with_timeout(timeout: Duration) -> DiscoveryIterator {
    DiscoveryIterator::new(timeout).unwrap_or_else(|e| {
        warn!(error = %e, "SSDP search could not be started");
        DiscoveryIterator::empty()
    })
}

/// Read the description at a known LOCATION URL without searching
pub fn fetch_device(location: &str, timeout: Duration) -> Result<Device> {
    let client = discovery::http_client(timeout)?;
    discovery::describe(&client, location)
}
