//! Queue operations for AVTransport service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::escape;
use crate::{ApiError, Service, SonosOperation};

/// Empty the speaker's queue
pub struct RemoveAllTracksFromQueueOperation;

#[derive(Serialize, Default)]
pub struct RemoveAllTracksFromQueueRequest {
    pub instance_id: u32,
}

#[derive(Deserialize)]
pub struct RemoveAllTracksFromQueueResponse;

impl SonosOperation for RemoveAllTracksFromQueueOperation {
    type Request = RemoveAllTracksFromQueueRequest;
    type Response = RemoveAllTracksFromQueueResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "RemoveAllTracksFromQueue";

    fn build_payload(request: &Self::Request) -> String {
        format!("<InstanceID>{}</InstanceID>", request.instance_id)
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(RemoveAllTracksFromQueueResponse)
    }
}

/// Append a track or container (such as a saved playlist) to the queue
pub struct AddURIToQueueOperation;

#[derive(Serialize)]
pub struct AddURIToQueueRequest {
    pub instance_id: u32,
    pub enqueued_uri: String,
    /// Unescaped DIDL-Lite document describing the URI
    pub enqueued_uri_meta_data: String,
    /// 0 appends at the end
    pub desired_first_track_number_enqueued: u32,
    pub enqueue_as_next: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddURIToQueueResponse {
    pub first_track_number_enqueued: u32,
    pub num_tracks_added: u32,
    pub new_queue_length: u32,
}

impl SonosOperation for AddURIToQueueOperation {
    type Request = AddURIToQueueRequest;
    type Response = AddURIToQueueResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "AddURIToQueue";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            concat!(
                "<InstanceID>{}</InstanceID>",
                "<EnqueuedURI>{}</EnqueuedURI>",
                "<EnqueuedURIMetaData>{}</EnqueuedURIMetaData>",
                "<DesiredFirstTrackNumberEnqueued>{}</DesiredFirstTrackNumberEnqueued>",
                "<EnqueueAsNext>{}</EnqueueAsNext>"
            ),
            request.instance_id,
            escape(&request.enqueued_uri),
            escape(&request.enqueued_uri_meta_data),
            request.desired_first_track_number_enqueued,
            u8::from(request.enqueue_as_next)
        )
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let number = |name: &str| {
            xml.get_child(name)
                .and_then(|e| e.get_text())
                .and_then(|t| t.trim().parse::<u32>().ok())
                .unwrap_or(0)
        };

        Ok(AddURIToQueueResponse {
            first_track_number_enqueued: number("FirstTrackNumberEnqueued"),
            num_tracks_added: number("NumTracksAdded"),
            new_queue_length: number("NewQueueLength"),
        })
    }
}
