//! Next and Previous operations for AVTransport service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

/// Request shared by the track skip operations
#[derive(Serialize, Default)]
pub struct SkipRequest {
    pub instance_id: u32,
}

/// Response shared by the track skip operations
#[derive(Deserialize)]
pub struct SkipResponse;

/// Skip to the next track in the queue
pub struct NextOperation;

impl SonosOperation for NextOperation {
    type Request = SkipRequest;
    type Response = SkipResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "Next";

    fn build_payload(request: &Self::Request) -> String {
        format!("<InstanceID>{}</InstanceID>", request.instance_id)
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SkipResponse)
    }
}

/// Go back to the previous track in the queue
pub struct PreviousOperation;

impl SonosOperation for PreviousOperation {
    type Request = SkipRequest;
    type Response = SkipResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "Previous";

    fn build_payload(request: &Self::Request) -> String {
        format!("<InstanceID>{}</InstanceID>", request.instance_id)
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SkipResponse)
    }
}
