//! Browse operation for ContentDirectory service

use serde::{Deserialize, Serialize};
use xmltree::Element;

use super::didl::{self, DidlObject};
use crate::operation::{child_text, escape};
use crate::{ApiError, Service, SonosOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrowseFlag {
    BrowseMetadata,
    BrowseDirectChildren,
}

impl BrowseFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowseFlag::BrowseMetadata => "BrowseMetadata",
            BrowseFlag::BrowseDirectChildren => "BrowseDirectChildren",
        }
    }
}

pub struct BrowseOperation;

#[derive(Serialize)]
pub struct BrowseRequest {
    pub object_id: String,
    pub browse_flag: BrowseFlag,
    pub filter: String,
    pub starting_index: u32,
    /// 0 asks for everything
    pub requested_count: u32,
    pub sort_criteria: String,
}

impl BrowseRequest {
    /// All direct children of `object_id`
    pub fn children(object_id: &str) -> Self {
        Self {
            object_id: object_id.to_string(),
            browse_flag: BrowseFlag::BrowseDirectChildren,
            filter: "dc:title,res,dc:creator,upnp:artist,upnp:album,upnp:albumArtURI".to_string(),
            starting_index: 0,
            requested_count: 100,
            sort_criteria: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrowseResponse {
    pub objects: Vec<DidlObject>,
    pub number_returned: u32,
    pub total_matches: u32,
}

impl SonosOperation for BrowseOperation {
    type Request = BrowseRequest;
    type Response = BrowseResponse;

    const SERVICE: Service = Service::ContentDirectory;
    const ACTION: &'static str = "Browse";

    fn build_payload(request: &Self::Request) -> String {
        format!(
            concat!(
                "<ObjectID>{}</ObjectID>",
                "<BrowseFlag>{}</BrowseFlag>",
                "<Filter>{}</Filter>",
                "<StartingIndex>{}</StartingIndex>",
                "<RequestedCount>{}</RequestedCount>",
                "<SortCriteria>{}</SortCriteria>"
            ),
            escape(&request.object_id),
            request.browse_flag.as_str(),
            escape(&request.filter),
            request.starting_index,
            request.requested_count,
            escape(&request.sort_criteria)
        )
    }

    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError> {
        let count = |name: &str| -> Result<u32, ApiError> {
            let text = child_text(xml, name)?;
            text.trim()
                .parse()
                .map_err(|_| ApiError::ParseError(format!("Invalid {} '{}'", name, text)))
        };

        // An empty container comes back with an empty Result element
        let result = xml
            .get_child("Result")
            .and_then(|e| e.get_text())
            .map(|t| t.into_owned())
            .unwrap_or_default();
        let objects = if result.trim().is_empty() {
            Vec::new()
        } else {
            didl::parse(&result)?
        };

        Ok(BrowseResponse {
            objects,
            number_returned: count("NumberReturned")?,
            total_matches: count("TotalMatches")?,
        })
    }
}
