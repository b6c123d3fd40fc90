//! SetAVTransportURI operation for AVTransport service
//!
//! Besides starting streams, this is how a speaker joins a group: pointing
//! its transport at `x-rincon:<coordinator uuid>` makes it follow that
//! coordinator.

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::operation::escape;
use crate::{ApiError, Service, SonosOperation};

/// SetAVTransportURI operation
pub struct SetAVTransportURIOperation;

#[derive(Serialize)]
pub struct SetAVTransportURIRequest {
    pub instance_id: u32,
    pub current_uri: String,
    /// Unescaped DIDL-Lite document, or empty
    pub current_uri_meta_data: String,
}

impl SetAVTransportURIRequest {
    /// Follow the group coordinated by the speaker with `coordinator_uuid`
    pub fn join(coordinator_uuid: &str) -> Self {
        Self {
            instance_id: 0,
            current_uri: format!("x-rincon:{}", coordinator_uuid),
            current_uri_meta_data: String::new(),
        }
    }

    /// Play from the speaker's own queue
    pub fn queue(speaker_uuid: &str) -> Self {
        Self {
            instance_id: 0,
            current_uri: format!("x-rincon-queue:{}#0", speaker_uuid),
            current_uri_meta_data: String::new(),
        }
    }
}

#[derive(Deserialize)]
pub struct SetAVTransportURIResponse;

impl SonosOperation for SetAVTransportURIOperation {
    type Request = SetAVTransportURIRequest;
    type Response = SetAVTransportURIResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "SetAVTransportURI";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><CurrentURI>{}</CurrentURI><CurrentURIMetaData>{}</CurrentURIMetaData>",
            request.instance_id,
            escape(&request.current_uri),
            escape(&request.current_uri_meta_data)
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SetAVTransportURIResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request() {
        let payload = SetAVTransportURIOperation::build_payload(&SetAVTransportURIRequest::join(
            "RINCON_000E58A0123456",
        ));
        assert_eq!(
            payload,
            "<InstanceID>0</InstanceID><CurrentURI>x-rincon:RINCON_000E58A0123456</CurrentURI><CurrentURIMetaData></CurrentURIMetaData>"
        );
    }

    #[test]
    fn test_queue_request() {
        let request = SetAVTransportURIRequest::queue("RINCON_ABC");
        assert_eq!(request.current_uri, "x-rincon-queue:RINCON_ABC#0");
    }

    #[test]
    fn test_metadata_and_uri_are_escaped() {
        let payload = SetAVTransportURIOperation::build_payload(&SetAVTransportURIRequest {
            instance_id: 0,
            current_uri: "x-sonosapi-stream:s1234?sid=254&flags=32".to_string(),
            current_uri_meta_data: "<DIDL-Lite></DIDL-Lite>".to_string(),
        });

        assert!(payload.contains("sid=254&amp;flags=32"));
        assert!(payload.contains("&lt;DIDL-Lite&gt;&lt;/DIDL-Lite&gt;"));
    }
}
