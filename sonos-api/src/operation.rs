use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::error::ApiError;
use crate::service::Service;

/// Base trait for all Sonos API operations
///
/// One implementor per UPnP action. The associated types keep request and
/// response shapes tied to the action they belong to.
pub trait SonosOperation {
    /// The request type for this operation
    type Request: Serialize;

    /// The response type for this operation
    type Response: for<'de> Deserialize<'de>;

    /// The UPnP service this operation belongs to
    const SERVICE: Service;

    /// The SOAP action name for this operation
    const ACTION: &'static str;

    /// Build the XML placed inside the action element
    ///
    /// Free-text arguments must be escaped with [`escape`].
    fn build_payload(request: &Self::Request) -> String;

    /// Convert the `<{ACTION}Response>` element into the typed response
    fn parse_response(xml: &Element) -> Result<Self::Response, ApiError>;
}

/// Escape text for use as an XML element value
pub fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Text of a required child element
pub(crate) fn child_text(xml: &Element, name: &str) -> Result<String, ApiError> {
    xml.get_child(name)
        .and_then(|e| e.get_text())
        .map(|t| t.into_owned())
        .ok_or_else(|| ApiError::ParseError(format!("Missing {} element", name)))
}
