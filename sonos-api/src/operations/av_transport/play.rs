//! `Play`: start or resume the transport

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

pub struct PlayOperation;

#[derive(Serialize)]
pub struct PlayRequest {
    pub instance_id: u32,
    /// Playback speed; Sonos only accepts `"1"`
    pub speed: String,
}

impl Default for PlayRequest {
    fn default() -> Self {
        Self {
            instance_id: 0,
            speed: "1".to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct PlayResponse;

impl SonosOperation for PlayOperation {
    type Request = PlayRequest;
    type Response = PlayResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "Play";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><Speed>{}</Speed>",
            request.instance_id, request.speed
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(PlayResponse)
    }
}
