//! SOAP round trips against a local HTTP server standing in for a speaker

use mockito::{Matcher, Server, ServerGuard};
use rstest::rstest;
use soap_client::{SoapClient, SoapError};

const RENDERING_CONTROL: &str = "urn:schemas-upnp-org:service:RenderingControl:1";

fn client_for(server: &ServerGuard) -> SoapClient {
    let port = server
        .host_with_port()
        .rsplit(':')
        .next()
        .and_then(|p| p.parse().ok())
        .expect("mock server port");
    SoapClient::with_port(port)
}

#[test]
fn test_call_posts_envelope_and_returns_action_response() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/MediaRenderer/RenderingControl/Control")
        .match_header("soapaction", format!("\"{}#GetVolume\"", RENDERING_CONTROL).as_str())
        .match_body(Matcher::Regex("<Channel>Master</Channel>".to_string()))
        .with_status(200)
        .with_body(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
                <u:GetVolumeResponse xmlns:u="urn:schemas-upnp-org:service:RenderingControl:1">
                    <CurrentVolume>42</CurrentVolume>
                </u:GetVolumeResponse>
            </s:Body></s:Envelope>"#,
        )
        .create();

    let response = client_for(&server)
        .call(
            "127.0.0.1",
            "MediaRenderer/RenderingControl/Control",
            RENDERING_CONTROL,
            "GetVolume",
            "<InstanceID>0</InstanceID><Channel>Master</Channel>",
        )
        .unwrap();

    mock.assert();
    assert_eq!(
        response.get_child("CurrentVolume").and_then(|c| c.get_text()).unwrap(),
        "42"
    );
}

#[rstest]
#[case(701)]
#[case(402)]
fn test_http_500_fault_is_reported_with_upnp_code(#[case] code: u16) {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/MediaRenderer/AVTransport/Control")
        .with_status(500)
        .with_body(format!(
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body>
                <s:Fault><faultcode>s:Client</faultcode><faultstring>UPnPError</faultstring>
                <detail><UPnPError xmlns="urn:schemas-upnp-org:control-1-0">
                <errorCode>{}</errorCode></UPnPError></detail></s:Fault>
            </s:Body></s:Envelope>"#,
            code
        ))
        .create();

    let result = client_for(&server).call(
        "127.0.0.1",
        "MediaRenderer/AVTransport/Control",
        "urn:schemas-upnp-org:service:AVTransport:1",
        "Next",
        "<InstanceID>0</InstanceID>",
    );

    match result {
        Err(SoapError::Fault(actual)) => assert_eq!(actual, code),
        other => panic!("Expected fault {}, got {:?}", code, other),
    }
}

#[test]
fn test_http_error_without_soap_body_is_network_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/ZoneGroupTopology/Control")
        .with_status(404)
        .with_body("not found")
        .create();

    let result = client_for(&server).call(
        "127.0.0.1",
        "ZoneGroupTopology/Control",
        "urn:schemas-upnp-org:service:ZoneGroupTopology:1",
        "GetZoneGroupState",
        "",
    );

    assert!(matches!(result, Err(SoapError::Network(msg)) if msg.contains("404")));
}

#[test]
fn test_unreachable_device_is_network_error() {
    // Port 9 (discard) on localhost is closed in test environments
    let client = SoapClient::with_port(9);
    let result = client.call(
        "127.0.0.1",
        "MediaRenderer/AVTransport/Control",
        "urn:schemas-upnp-org:service:AVTransport:1",
        "Play",
        "<InstanceID>0</InstanceID><Speed>1</Speed>",
    );

    assert!(matches!(result, Err(SoapError::Network(_))));
}
