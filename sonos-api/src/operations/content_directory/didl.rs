//! DIDL-Lite documents
//!
//! Browse results arrive as DIDL-Lite and queue/transport calls expect
//! DIDL-Lite metadata alongside a URI.

use serde::Deserialize;
use xmltree::{Element, XMLNode};

use crate::operation::escape;
use crate::ApiError;

const DIDL_OPEN: &str = concat!(
    r#"<DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
    r#"xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/" "#,
    r#"xmlns:r="urn:schemas-rinconnetworks-com:metadata-1-0/" "#,
    r#"xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/">"#
);

/// Service descriptor TuneIn streams are played under
pub const TUNEIN_DESCRIPTOR: &str = "SA_RINCON65031_";

/// One `<item>` or `<container>` of a DIDL-Lite document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DidlObject {
    pub id: String,
    pub parent_id: String,
    pub title: String,
    /// First `<res>` element, if any
    pub uri: Option<String>,
    pub class: Option<String>,
    pub is_container: bool,
}

/// Parse the children of a DIDL-Lite root
pub fn parse(xml: &str) -> Result<Vec<DidlObject>, ApiError> {
    let root = Element::parse(xml.as_bytes())
        .map_err(|e| ApiError::ParseError(format!("Failed to parse DIDL-Lite: {}", e)))?;

    root.children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(|e| e.name == "item" || e.name == "container")
        .map(object)
        .collect()
}

fn object(element: &Element) -> Result<DidlObject, ApiError> {
    let text = |name: &str| {
        element
            .get_child(name)
            .and_then(|e| e.get_text())
            .map(|t| t.trim().to_string())
    };

    let id = element
        .attributes
        .get("id")
        .cloned()
        .ok_or_else(|| ApiError::ParseError(format!("DIDL-Lite {} without id", element.name)))?;

    Ok(DidlObject {
        parent_id: element.attributes.get("parentID").cloned().unwrap_or_default(),
        title: text("title").unwrap_or_else(|| id.clone()),
        uri: text("res"),
        class: text("class"),
        is_container: element.name == "container",
        id,
    })
}

/// Metadata describing a saved playlist when it is added to a queue
pub fn playlist_metadata(playlist: &DidlObject) -> String {
    format!(
        concat!(
            "{open}",
            r#"<item id="{id}" parentID="{parent}" restricted="true">"#,
            "<dc:title>{title}</dc:title>",
            "<upnp:class>object.container.playlistContainer</upnp:class>",
            r#"<desc id="cdudn" nameSpace="urn:schemas-rinconnetworks-com:metadata-1-0/">RINCON_AssociatedZPUDN</desc>"#,
            "</item></DIDL-Lite>"
        ),
        open = DIDL_OPEN,
        id = escape(&playlist.id),
        parent = escape(&playlist.parent_id),
        title = escape(&playlist.title),
    )
}

/// Placeholder metadata a TuneIn stream URI needs before the speaker will play it
pub fn radio_metadata() -> String {
    format!(
        concat!(
            "{open}",
            r#"<item id="DUMMY" parentID="DUMMY" restricted="true">"#,
            "<dc:title>DUMMY</dc:title>",
            "<upnp:class>object.item</upnp:class>",
            r#"<desc id="cdudn" nameSpace="urn:schemas-rinconnetworks-com:metadata-1-0/">{desc}</desc>"#,
            "</item></DIDL-Lite>"
        ),
        open = DIDL_OPEN,
        desc = TUNEIN_DESCRIPTOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIOS: &str = r#"<DIDL-Lite xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:upnp="urn:schemas-upnp-org:metadata-1-0/upnp/" xmlns:r="urn:schemas-rinconnetworks-com:metadata-1-0/" xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/">
<item id="R:0/0/0" parentID="R:0/0" restricted="true"><dc:title>Radio Paradise</dc:title><upnp:class>object.item.audioItem.audioBroadcast</upnp:class><res protocolInfo="x-rincon-mp3radio:*:*:*">x-sonosapi-stream:s13606?sid=254&amp;flags=32</res></item>
<item id="R:0/0/1" parentID="R:0/0" restricted="true"><dc:title>FIP</dc:title><upnp:class>object.item.audioItem.audioBroadcast</upnp:class><res protocolInfo="x-rincon-mp3radio:*:*:*">x-sonosapi-stream:s15200?sid=254&amp;flags=32</res></item>
</DIDL-Lite>"#;

    #[test]
    fn test_parse_radio_favourites() {
        let objects = parse(RADIOS).unwrap();

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].title, "Radio Paradise");
        assert_eq!(objects[0].parent_id, "R:0/0");
        assert_eq!(
            objects[0].uri.as_deref(),
            Some("x-sonosapi-stream:s13606?sid=254&flags=32")
        );
        assert_eq!(objects[1].class.as_deref(), Some("object.item.audioItem.audioBroadcast"));
        assert!(!objects[1].is_container);
    }

    #[test]
    fn test_missing_title_falls_back_to_id() {
        let objects = parse(
            r#"<DIDL-Lite xmlns="urn:schemas-upnp-org:metadata-1-0/DIDL-Lite/"><container id="SQ:9" parentID="SQ:"/></DIDL-Lite>"#,
        )
        .unwrap();

        assert_eq!(objects[0].title, "SQ:9");
        assert!(objects[0].is_container);
        assert_eq!(objects[0].uri, None);
    }

    #[test]
    fn test_object_without_id_is_rejected() {
        let result = parse(r#"<DIDL-Lite><item parentID="R:0/0"/></DIDL-Lite>"#);
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_playlist_metadata_round_trips() {
        let playlist = DidlObject {
            id: "SQ:3".to_string(),
            parent_id: "SQ:".to_string(),
            title: "Rock & Roll".to_string(),
            uri: Some("file:///jffs/settings/savedqueues.rsq#3".to_string()),
            class: None,
            is_container: true,
        };

        let metadata = playlist_metadata(&playlist);
        assert!(metadata.contains("<dc:title>Rock &amp; Roll</dc:title>"));

        let parsed = parse(&metadata).unwrap();
        assert_eq!(parsed[0].id, "SQ:3");
        assert_eq!(parsed[0].title, "Rock & Roll");
        assert_eq!(parsed[0].class.as_deref(), Some("object.container.playlistContainer"));
    }

    #[test]
    fn test_radio_metadata_carries_tunein_descriptor() {
        let metadata = radio_metadata();
        assert!(metadata.contains(">SA_RINCON65031_</desc>"));

        let parsed = parse(&metadata).unwrap();
        assert_eq!(parsed[0].id, "DUMMY");
        assert_eq!(parsed[0].parent_id, "DUMMY");
        assert_eq!(parsed[0].title, "DUMMY");
    }
}
