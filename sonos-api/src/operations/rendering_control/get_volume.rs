//! GetVolume operation for RenderingControl service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::child_text;
use crate::{ApiError, Service, SonosOperation};

/// GetVolume operation
pub struct GetVolumeOperation;

/// Request for GetVolume operation
#[derive(Serialize)]
pub struct GetVolumeRequest {
    pub instance_id: u32,
    pub channel: String,
}

impl Default for GetVolumeRequest {
    fn default() -> Self {
        Self {
            instance_id: 0,
            channel: "Master".to_string(),
        }
    }
}

/// Response for GetVolume operation
#[derive(Debug, Deserialize)]
pub struct GetVolumeResponse {
    pub current_volume: u8,
}

impl SonosOperation for GetVolumeOperation {
    type Request = GetVolumeRequest;
    type Response = GetVolumeResponse;

    const SERVICE: Service = Service::RenderingControl;
    const ACTION: &'static str = "GetVolume";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><Channel>{}</Channel>",
            request.instance_id, request.channel
        )
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let text = child_text(xml, "CurrentVolume")?;
        let current_volume = text
            .trim()
            .parse::<u8>()
            .map_err(|e| ApiError::ParseError(format!("Invalid CurrentVolume '{}': {}", text, e)))?;

        Ok(GetVolumeResponse {
            current_volume: current_volume.min(100),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<GetVolumeResponse, ApiError> {
        GetVolumeOperation::parse_response(&Element::parse(xml.as_bytes()).unwrap())
    }

    #[test]
    fn test_get_volume_payload() {
        assert_eq!(
            GetVolumeOperation::build_payload(&GetVolumeRequest::default()),
            "<InstanceID>0</InstanceID><Channel>Master</Channel>"
        );
    }

    #[test]
    fn test_get_volume_response() {
        let response = parse("<GetVolumeResponse><CurrentVolume>35</CurrentVolume></GetVolumeResponse>").unwrap();
        assert_eq!(response.current_volume, 35);
    }

    #[test]
    fn test_get_volume_rejects_garbage() {
        let result = parse("<GetVolumeResponse><CurrentVolume>loud</CurrentVolume></GetVolumeResponse>");
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }
}
