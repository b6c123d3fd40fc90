//! Streaming discovery iterator.
//!
//! Each call to `next` waits on the SSDP socket only until a new Sonos
//! responder shows up, fetches its description and yields it. Callers that
//! need just one speaker can stop after the first item.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, warn};

use crate::device::DeviceDescription;
use crate::error::{DiscoveryError, Result};
use crate::ssdp::{SsdpSocket, ZONE_PLAYER_TARGET};
use crate::Device;

/// Iterator over Sonos speakers answering an M-SEARCH
///
/// Responses are deduplicated by LOCATION. Responders that are not Sonos, or
/// whose description cannot be fetched, are skipped.
pub struct DiscoveryIterator {
    socket: Option<SsdpSocket>,
    seen_locations: HashSet<String>,
    http_client: reqwest::blocking::Client,
}

impl DiscoveryIterator {
    /// Send the search and return an iterator bounded by `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let socket = SsdpSocket::open(timeout)?;
        socket.search(ZONE_PLAYER_TARGET)?;

        Ok(Self {
            socket: Some(socket),
            seen_locations: HashSet::new(),
            http_client: http_client(timeout)?,
        })
    }

    /// An iterator that yields nothing, used when the socket cannot be set up
    pub(crate) fn empty() -> Self {
        Self {
            socket: None,
            seen_locations: HashSet::new(),
            http_client: reqwest::blocking::Client::new(),
        }
    }
}

impl Iterator for DiscoveryIterator {
    type Item = Device;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let response = self.socket.as_mut()?.next_response();
            let Some(response) = response else {
                self.socket = None;
                return None;
            };

            if !self.seen_locations.insert(response.location.clone()) {
                continue;
            }
            if !response.looks_like_sonos() {
                debug!(location = %response.location, "ignoring non-Sonos responder");
                continue;
            }

            match describe(&self.http_client, &response.location) {
                Ok(device) => {
                    debug!(name = %device.name, ip = %device.ip_address, "discovered speaker");
                    return Some(device);
                }
                Err(e) => warn!(location = %response.location, error = %e, "skipping responder"),
            }
        }
    }
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to create HTTP client: {}", e)))
}

/// Fetch the description at `location` and turn it into a [`Device`]
pub(crate) fn describe(http_client: &reqwest::blocking::Client, location: &str) -> Result<Device> {
    let xml = http_client
        .get(location)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| DiscoveryError::NetworkError(format!("Failed to fetch device description: {}", e)))?;

    let description = DeviceDescription::from_xml(&xml)?;
    if !description.is_sonos_device() {
        return Err(DiscoveryError::InvalidDevice(format!(
            "{} is not a Sonos device",
            description.friendly_name
        )));
    }
    description.into_device(location)
}
