//! SetPlayMode operation for AVTransport service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

/// Queue play modes understood by Sonos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayMode {
    Normal,
    RepeatAll,
    RepeatOne,
    ShuffleNoRepeat,
    Shuffle,
    ShuffleRepeatOne,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Normal => "NORMAL",
            PlayMode::RepeatAll => "REPEAT_ALL",
            PlayMode::RepeatOne => "REPEAT_ONE",
            PlayMode::ShuffleNoRepeat => "SHUFFLE_NOREPEAT",
            PlayMode::Shuffle => "SHUFFLE",
            PlayMode::ShuffleRepeatOne => "SHUFFLE_REPEAT_ONE",
        }
    }
}

/// SetPlayMode operation
pub struct SetPlayModeOperation;

#[derive(Serialize)]
pub struct SetPlayModeRequest {
    pub instance_id: u32,
    pub new_play_mode: PlayMode,
}

#[derive(Deserialize)]
pub struct SetPlayModeResponse;

impl SonosOperation for SetPlayModeOperation {
    type Request = SetPlayModeRequest;
    type Response = SetPlayModeResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "SetPlayMode";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><NewPlayMode>{}</NewPlayMode>",
            request.instance_id,
            request.new_play_mode.as_str()
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SetPlayModeResponse)
    }
}
