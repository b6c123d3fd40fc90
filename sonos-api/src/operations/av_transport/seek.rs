//! Seek operation for AVTransport service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::{ApiError, Service, SonosOperation};

/// What a seek target is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeekUnit {
    /// 1-based position in the queue
    TrackNr,
    /// `H:MM:SS` into the current track
    RelTime,
}

impl SeekUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeekUnit::TrackNr => "TRACK_NR",
            SeekUnit::RelTime => "REL_TIME",
        }
    }
}

pub struct SeekOperation;

#[derive(Serialize)]
pub struct SeekRequest {
    pub instance_id: u32,
    pub unit: SeekUnit,
    pub target: String,
}

impl SeekRequest {
    pub fn track(number: u32) -> Self {
        Self {
            instance_id: 0,
            unit: SeekUnit::TrackNr,
            target: number.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct SeekResponse;

impl SonosOperation for SeekOperation {
    type Request = SeekRequest;
    type Response = SeekResponse;

    const SERVICE: Service = Service::AVTransport;
    const ACTION: &'static str = "Seek";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<InstanceID>{}</InstanceID><Unit>{}</Unit><Target>{}</Target>",
            request.instance_id,
            request.unit.as_str(),
            request.target
        )
    }

    fn parse_response(_xml: &Element) -> Result<Self::Response, ApiError> {
        Ok(SeekResponse)
    }
}
