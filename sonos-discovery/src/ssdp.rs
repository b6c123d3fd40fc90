//! SSDP M-SEARCH over UDP multicast
//!
//! Internal to the crate. A search is bounded by a single deadline: every
//! `recv` is given only the time that is left, so a chatty network cannot
//! stretch discovery beyond the configured timeout.

use std::net::UdpSocket;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::{DiscoveryError, Result};

/// Search target Sonos speakers answer to
pub(crate) const ZONE_PLAYER_TARGET: &str = "urn:schemas-upnp-org:device:ZonePlayer:1";

const MULTICAST_ADDR: &str = "239.255.255.250:1900";

/// The headers of one SSDP search response that discovery cares about
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub search_target: String,
    pub usn: String,
    pub server: Option<String>,
}

impl SsdpResponse {
    /// Parse an HTTP-over-UDP response; `None` unless LOCATION, ST and USN are all present
    pub fn parse(datagram: &str) -> Option<Self> {
        let mut location = None;
        let mut search_target = None;
        let mut usn = None;
        let mut server = None;

        for (name, value) in datagram.lines().filter_map(header) {
            let slot = match name.to_ascii_uppercase().as_str() {
                "LOCATION" => &mut location,
                "ST" => &mut search_target,
                "USN" => &mut usn,
                "SERVER" => &mut server,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }

        Some(Self {
            location: location?,
            search_target: search_target?,
            usn: usn?,
            server,
        })
    }

    /// Cheap pre-filter before paying for an HTTP description fetch
    pub fn looks_like_sonos(&self) -> bool {
        self.search_target.contains("ZonePlayer")
            || self.usn.contains("RINCON")
            || self
                .server
                .as_deref()
                .map(|s| s.to_ascii_lowercase().contains("sonos"))
                .unwrap_or(false)
    }
}

/// Split `Name: value`; the status line and blank lines yield `None`
fn header(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(' ') {
        return None;
    }
    Some((name, value.trim()))
}

/// A UDP socket with one outstanding M-SEARCH
pub(crate) struct SsdpSocket {
    socket: UdpSocket,
    deadline: Instant,
    buffer: [u8; 2048],
}

impl SsdpSocket {
    /// Bind an ephemeral port; responses are accepted until `timeout` elapses
    pub fn open(timeout: Duration) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e)))?;
        socket
            .set_multicast_loop_v4(true)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

        Ok(Self {
            socket,
            deadline: Instant::now() + timeout,
            buffer: [0; 2048],
        })
    }

    /// Multicast an M-SEARCH for `search_target`
    pub fn search(&self, search_target: &str) -> Result<()> {
        let request = format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: {}\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 1\r\n\
             ST: {}\r\n\
             USER-AGENT: sonosbar/0.2 UPnP/1.0\r\n\
             \r\n",
            MULTICAST_ADDR, search_target
        );

        self.socket
            .send_to(request.as_bytes(), MULTICAST_ADDR)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;
        Ok(())
    }

    /// Wait for the next well-formed response, or `None` once the deadline passes
    pub fn next_response(&mut self) -> Option<SsdpResponse> {
        loop {
            let remaining = self.deadline.checked_duration_since(Instant::now())?;
            if remaining.is_zero() || self.socket.set_read_timeout(Some(remaining)).is_err() {
                return None;
            }

            let size = match self.socket.recv_from(&mut self.buffer) {
                Ok((size, from)) => {
                    trace!(%from, size, "SSDP datagram");
                    size
                }
                Err(_) => return None,
            };

            if let Some(response) = std::str::from_utf8(&self.buffer[..size])
                .ok()
                .and_then(SsdpResponse::parse)
            {
                return Some(response);
            }
        }
    }
}
