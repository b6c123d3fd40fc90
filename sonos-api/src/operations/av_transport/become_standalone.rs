//! BecomeCoordinatorOfStandaloneGroup operation for AVTransport service
//!
//! Takes a speaker out of whatever group it is in.

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

pub struct BecomeCoordinatorOfStandaloneGroupOperation;

#[derive(Serialize, Default)]
pub struct BecomeCoordinatorOfStandaloneGroupRequest {
    pub instance_id: u32,
}

#[derive(Deserialize)]
pub struct BecomeCoordinatorOfStandaloneGroupResponse;

impl SonosOperation for BecomeCoordinatorOfStandaloneGroupOperation {
    type Request = BecomeCoordinatorOfStandaloneGroupRequest;
    type Response = BecomeCoordinatorOfStandaloneGroupResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "BecomeCoordinatorOfStandaloneGroup";

    fn build_payload(request: &Self::Request) -> String {
        format!("<InstanceID>{}</InstanceID>", request.instance_id)
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(BecomeCoordinatorOfStandaloneGroupResponse)
    }
}
