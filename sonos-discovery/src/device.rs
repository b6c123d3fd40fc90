//! Device description parsing and validation.
//!
//! A speaker's SSDP response only carries a LOCATION; the name, UDN and model
//! live in the UPnP description document behind it.

use serde::Deserialize;
use url::Url;

use crate::error::{DiscoveryError, Result};
use crate::Device;

#[derive(Debug, Deserialize)]
struct Root {
    device: DeviceDescription,
}

/// The subset of a UPnP device description a Sonos speaker is identified by
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescription {
    pub device_type: String,
    pub friendly_name: String,
    pub manufacturer: String,
    pub model_name: String,
    #[serde(rename = "UDN")]
    pub udn: String,
    pub room_name: Option<String>,
}

impl DeviceDescription {
    /// Parse the `<root><device>` document served at a speaker's LOCATION
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root: Root = quick_xml::de::from_str(xml)
            .map_err(|e| DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e)))?;
        Ok(root.device)
    }

    /// Sonos by manufacturer, or by advertising the ZonePlayer device type
    pub fn is_sonos_device(&self) -> bool {
        self.manufacturer.to_lowercase().contains("sonos") || self.device_type.contains("ZonePlayer")
    }

    /// Combine with the LOCATION the description was fetched from
    pub fn into_device(self, location: &str) -> Result<Device> {
        let (ip_address, port) = host_and_port(location)
            .ok_or_else(|| DiscoveryError::InvalidDevice(format!("No host in location '{}'", location)))?;

        Ok(Device {
            id: self.udn.trim_start_matches("uuid:").to_string(),
            name: self.room_name.unwrap_or(self.friendly_name),
            ip_address,
            port,
            model_name: self.model_name,
        })
    }
}

/// Host and port of a LOCATION URL, e.g. `http://192.168.1.100:1400/xml/device_description.xml`
pub fn host_and_port(location: &str) -> Option<(String, u16)> {
    let url = Url::parse(location).ok()?;
    let host = url.host_str()?.to_string();
    let port = url.port_or_known_default()?;
    Some((host, port))
}
