//! SetVolume operation for RenderingControl service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

/// SetVolume operation
pub struct SetVolumeOperation;

/// Request for SetVolume operation
#[derive(Serialize)]
pub struct SetVolumeRequest {
    pub instance_id: u32,
    pub channel: String,
    pub desired_volume: u8,
}

impl SetVolumeRequest {
    /// Master channel volume; values above 100 are capped
    pub fn master(desired_volume: u8) -> Self {
        Self {
            instance_id: 0,
            channel: "Master".to_string(),
            desired_volume: desired_volume.min(100),
        }
    }
}

/// Response for SetVolume operation
#[derive(Deserialize)]
pub struct SetVolumeResponse;

impl SonosOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = SetVolumeResponse;

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "SetVolume";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><Channel>{}</Channel><DesiredVolume>{}</DesiredVolume>",
            request.instance_id, request.channel, request.desired_volume
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SetVolumeResponse)
    }
}
