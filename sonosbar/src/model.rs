//! Household data as the remote sees it

use std::fmt;

pub use sonos_api::operations::av_transport::{PlayMode, PlayState as TransportState};

/// A visible speaker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Speaker {
    /// RINCON identifier
    pub uuid: String,
    /// Zone name shown in the Sonos app
    pub name: String,
    /// IPv4 address the speaker's UPnP endpoints answer on
    pub address: String,
}

impl Speaker {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

impl From<sonos_discovery::Device> for Speaker {
    fn from(device: sonos_discovery::Device) -> Self {
        Self {
            uuid: device.id,
            name: device.name,
            address: device.ip_address,
        }
    }
}

/// Speakers playing in sync; `members` includes the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub coordinator: Speaker,
    pub members: Vec<Speaker>,
}

impl Group {
    pub fn contains(&self, speaker: &Speaker) -> bool {
        self.members.iter().any(|m| m.uuid == speaker.uuid)
    }
}

/// Speaker volume, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: u8 = 100;

    /// Clamp any integer into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Volume {
    fn from(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved Sonos playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    /// Content directory id, `SQ:<n>`
    pub id: String,
    pub uri: String,
}

/// A favourite radio station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioStation {
    pub title: String,
    /// Stream URI, e.g. `x-sonosapi-stream:s25111?sid=254&flags=32`
    pub uri: String,
}
