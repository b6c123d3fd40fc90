//! ZoneGroupState document model
//!
//! Current firmware wraps the groups as `<ZoneGroupState><ZoneGroups>…`,
//! older firmware sends `<ZoneGroups>` as the root. Both parse into the same
//! [`ZoneGroupState`].

use serde::Deserialize;
use sonos_discovery::device::host_and_port;

use crate::ApiError;

/// All groups in the household, in the order the speaker reported them
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ZoneGroupState {
    #[serde(rename = "ZoneGroup", default)]
    pub groups: Vec<ZoneGroup>,
}

#[derive(Debug, Deserialize)]
struct StateDocument {
    #[serde(rename = "ZoneGroups", default)]
    zone_groups: Option<ZoneGroupState>,
    #[serde(rename = "ZoneGroup", default)]
    legacy_groups: Vec<ZoneGroup>,
}

/// Speakers playing in sync under one coordinator
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneGroup {
    #[serde(rename = "@Coordinator")]
    pub coordinator: String,

    #[serde(rename = "@ID")]
    pub id: String,

    #[serde(rename = "ZoneGroupMember", default)]
    pub members: Vec<ZoneGroupMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneGroupMember {
    /// RINCON identifier
    #[serde(rename = "@UUID")]
    pub uuid: String,

    /// Device description URL, the only place the member's address appears
    #[serde(rename = "@Location")]
    pub location: String,

    #[serde(rename = "@ZoneName")]
    pub zone_name: String,

    /// "1" for bonded satellites and subwoofers
    #[serde(rename = "@Invisible", default)]
    pub invisible: Option<String>,
}

impl ZoneGroupState {
    pub fn from_xml(xml: &str) -> Result<Self, ApiError> {
        let document: StateDocument = quick_xml::de::from_str(xml)
            .map_err(|e| ApiError::ParseError(format!("Failed to parse ZoneGroupState: {}", e)))?;

        Ok(match document.zone_groups {
            Some(state) => state,
            None => ZoneGroupState {
                groups: document.legacy_groups,
            },
        })
    }
}

impl ZoneGroup {
    /// Members that are speakers in their own right, in topology order
    pub fn visible_members(&self) -> impl Iterator<Item = &ZoneGroupMember> {
        self.members.iter().filter(|m| !m.is_invisible())
    }

    pub fn coordinator_member(&self) -> Option<&ZoneGroupMember> {
        self.members.iter().find(|m| m.uuid == self.coordinator)
    }
}

impl ZoneGroupMember {
    pub fn is_invisible(&self) -> bool {
        self.invisible.as_deref() == Some("1")
    }

    /// Host part of [`Self::location`]
    pub fn ip_address(&self) -> Option<String> {
        host_and_port(&self.location).map(|(host, _)| host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = r#"<ZoneGroupState>
  <ZoneGroups>
    <ZoneGroup Coordinator="RINCON_LIVING01400" ID="RINCON_LIVING01400:2311">
      <ZoneGroupMember UUID="RINCON_LIVING01400" Location="http://192.168.1.10:1400/xml/device_description.xml" ZoneName="Living Room" SoftwareVersion="70.3-35220">
        <Satellite UUID="RINCON_SUB01400" Location="http://192.168.1.13:1400/xml/device_description.xml" ZoneName="Living Room" Invisible="1"/>
      </ZoneGroupMember>
      <ZoneGroupMember UUID="RINCON_DINING01400" Location="http://192.168.1.11:1400/xml/device_description.xml" ZoneName="Dining Room"/>
      <ZoneGroupMember UUID="RINCON_BONDED01400" Location="http://192.168.1.14:1400/xml/device_description.xml" ZoneName="Dining Room" Invisible="1"/>
    </ZoneGroup>
    <ZoneGroup Coordinator="RINCON_KITCHEN01400" ID="RINCON_KITCHEN01400:77">
      <ZoneGroupMember UUID="RINCON_KITCHEN01400" Location="http://192.168.1.12:1400/xml/device_description.xml" ZoneName="Kitchen"/>
    </ZoneGroup>
  </ZoneGroups>
  <VanishedDevices/>
</ZoneGroupState>"#;

    const LEGACY: &str = r#"<ZoneGroups>
  <ZoneGroup Coordinator="RINCON_KITCHEN01400" ID="RINCON_KITCHEN01400:77">
    <ZoneGroupMember UUID="RINCON_KITCHEN01400" Location="http://192.168.1.12:1400/xml/device_description.xml" ZoneName="Kitchen"/>
  </ZoneGroup>
  <ZoneGroup Coordinator="RINCON_OFFICE01400" ID="RINCON_OFFICE01400:5">
    <ZoneGroupMember UUID="RINCON_OFFICE01400" Location="http://192.168.1.15:1400/xml/device_description.xml" ZoneName="Office"/>
  </ZoneGroup>
</ZoneGroups>"#;

    #[test]
    fn test_current_firmware_layout() {
        let state = ZoneGroupState::from_xml(CURRENT).unwrap();

        assert_eq!(state.groups.len(), 2);
        let living = &state.groups[0];
        assert_eq!(living.coordinator, "RINCON_LIVING01400");
        assert_eq!(living.members.len(), 3);

        let visible: Vec<&str> = living.visible_members().map(|m| m.zone_name.as_str()).collect();
        assert_eq!(visible, vec!["Living Room", "Dining Room"]);
        assert_eq!(
            living.coordinator_member().and_then(|m| m.ip_address()).as_deref(),
            Some("192.168.1.10")
        );
    }

    #[test]
    fn test_legacy_root() {
        let state = ZoneGroupState::from_xml(LEGACY).unwrap();

        let names: Vec<&str> = state
            .groups
            .iter()
            .flat_map(|g| g.visible_members())
            .map(|m| m.zone_name.as_str())
            .collect();
        assert_eq!(names, vec!["Kitchen", "Office"]);
    }

    #[test]
    fn test_empty_household() {
        let state = ZoneGroupState::from_xml("<ZoneGroupState><ZoneGroups></ZoneGroups></ZoneGroupState>").unwrap();
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_malformed_state() {
        assert!(matches!(
            ZoneGroupState::from_xml("<ZoneGroupState><ZoneGroups>"),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn test_member_without_parseable_location() {
        let member = ZoneGroupMember {
            uuid: "RINCON_X".to_string(),
            location: "nowhere".to_string(),
            zone_name: "X".to_string(),
            invisible: None,
        };
        assert_eq!(member.ip_address(), None);
        assert!(!member.is_invisible());
    }
}
