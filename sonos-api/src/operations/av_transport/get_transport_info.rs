//! GetTransportInfo operation for AVTransport service

use std::fmt;

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::child_text;
use crate::{ApiError, Service, SonosOperation};

/// GetTransportInfo operation
pub struct GetTransportInfoOperation;

/// Request for GetTransportInfo operation
#[derive(Serialize, Default)]
pub struct GetTransportInfoRequest {
    pub instance_id: u32,
}

/// Transport state as reported by the speaker
///
/// Firmware occasionally reports states outside the UPnP set, so those are
/// kept verbatim instead of failing the call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum PlayState {
    Playing,
    Paused,
    Stopped,
    Transitioning,
    Other(String),
}

impl PlayState {
    pub fn from_transport_state(state: &str) -> Self {
        match state {
            "PLAYING" => PlayState::Playing,
            "PAUSED_PLAYBACK" => PlayState::Paused,
            "STOPPED" => PlayState::Stopped,
            "TRANSITIONING" => PlayState::Transitioning,
            other => PlayState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayState::Playing => "PLAYING",
            PlayState::Paused => "PAUSED_PLAYBACK",
            PlayState::Stopped => "STOPPED",
            PlayState::Transitioning => "TRANSITIONING",
            PlayState::Other(state) => state,
        }
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response for GetTransportInfo operation
#[derive(Debug, Clone, Deserialize)]
pub struct GetTransportInfoResponse {
    pub current_transport_state: PlayState,
    pub current_transport_status: String,
    pub current_speed: String,
}

impl SonosOperation for GetTransportInfoOperation {
    type Request = GetTransportInfoRequest;
    type Response = GetTransportInfoResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "GetTransportInfo";

    fn build_payload(request: &Self::Request) -> String {
        format!("<InstanceID>{}</InstanceID>", request.instance_id)
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let state = child_text(xml, "CurrentTransportState")?;

        let current_transport_status = xml
            .get_child("CurrentTransportStatus")
            .and_then(|e| e.get_text())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "OK".to_string());

        let current_speed = xml
            .get_child("CurrentSpeed")
            .and_then(|e| e.get_text())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "1".to_string());

        Ok(GetTransportInfoResponse {
            current_transport_state: PlayState::from_transport_state(state.trim()),
            current_transport_status,
            current_speed,
        })
    }
}
