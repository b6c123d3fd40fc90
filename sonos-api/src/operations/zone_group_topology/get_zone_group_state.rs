//! GetZoneGroupState operation for ZoneGroupTopology service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use super::ZoneGroupState;
use crate::operation::child_text;
use crate::{ApiError, Service, SonosOperation};

pub struct GetZoneGroupStateOperation;

#[derive(Serialize, Default)]
pub struct GetZoneGroupStateRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct GetZoneGroupStateResponse {
    pub zone_group_state: ZoneGroupState,
}

impl SonosOperation for GetZoneGroupStateOperation {
    type Request = GetZoneGroupStateRequest;
    type Response = GetZoneGroupStateResponse;

    const SERVICE: Service = Service::ZoneGroupTopology;
    const ACTION: &'static str = "GetZoneGroupState";

    fn build_payload(_request: &Self::Request) -> String {
        String::new()
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        // The state is a whole XML document carried as escaped text
        let document = child_text(xml, "ZoneGroupState")?;
        Ok(GetZoneGroupStateResponse {
            zone_group_state: ZoneGroupState::from_xml(&document)?,
        })
    }
}
