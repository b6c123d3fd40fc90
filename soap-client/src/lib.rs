//! Private SOAP client for UPnP device communication
//!
//! A deliberately small blocking client: it wraps an action payload in a SOAP
//! envelope, posts it to a speaker's control endpoint and hands back the
//! `<ActionResponse>` element. UPnP faults are reported as [`SoapError::Fault`]
//! whether the device sends them with HTTP 200 or HTTP 500.

mod error;

pub use error::SoapError;

use std::time::Duration;
use tracing::debug;
use xmltree::Element;

/// Port every Sonos speaker serves its UPnP control endpoints on
pub const DEFAULT_PORT: u16 = 1400;

/// A minimal SOAP client for UPnP device communication
#[derive(Debug, Clone)]
pub struct SoapClient {
    agent: ureq::Agent,
    port: u16,
}

impl SoapClient {
    /// Create a client talking to the standard Sonos port
    pub fn new() -> Self {
        Self::with_port(DEFAULT_PORT)
    }

    /// Create a client for devices listening on a non-standard port
    pub fn with_port(port: u16) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            port,
        }
    }

    /// Port requests are sent to
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Send a SOAP request and return the parsed `<{action}Response>` element
    ///
    /// `payload` is the already-escaped XML placed inside the action element.
    pub fn call(
        &self,
        host: &str,
        endpoint: &str,
        service_uri: &str,
        action: &str,
        payload: &str,
    ) -> Result<Element, SoapError> {
        let url = format!("http://{}:{}/{}", host, self.port, endpoint);
        let soap_action = format!("\"{}#{}\"", service_uri, action);
        debug!(%url, action, "sending SOAP request");

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "text/xml; charset=\"utf-8\"")
            .set("SOAPACTION", &soap_action)
            .send_string(&envelope(service_uri, action, payload));

        let body = match result {
            Ok(response) => response
                .into_string()
                .map_err(|e| SoapError::Network(e.to_string()))?,
            // Faults arrive as HTTP 500 with a SOAP body; anything else is transport trouble
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(match Element::parse(body.as_bytes()) {
                    Ok(xml) => match extract_response(&xml, action) {
                        Err(fault @ SoapError::Fault(_)) => fault,
                        _ => SoapError::Network(format!("HTTP {} from {}", status, url)),
                    },
                    Err(_) => SoapError::Network(format!("HTTP {} from {}", status, url)),
                });
            }
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        let xml = Element::parse(body.as_bytes()).map_err(|e| SoapError::Parse(e.to_string()))?;
        extract_response(&xml, action)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

fn envelope(service_uri: &str, action: &str, payload: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">"#,
            r#"<s:Body><u:{action} xmlns:u="{service_uri}">{payload}</u:{action}></s:Body>"#,
            r#"</s:Envelope>"#
        ),
        action = action,
        service_uri = service_uri,
        payload = payload
    )
}

fn extract_response(xml: &Element, action: &str) -> Result<Element, SoapError> {
    let body = xml
        .get_child("Body")
        .ok_or_else(|| SoapError::Parse("Missing SOAP Body".to_string()))?;

    if let Some(fault) = body.get_child("Fault") {
        let error_code = fault
            .get_child("detail")
            .and_then(|d| d.get_child("UPnPError"))
            .and_then(|e| e.get_child("errorCode"))
            .and_then(|c| c.get_text())
            .and_then(|t| t.trim().parse::<u16>().ok())
            .unwrap_or(500);
        return Err(SoapError::Fault(error_code));
    }

    let response_name = format!("{}Response", action);
    body.get_child(response_name.as_str())
        .cloned()
        .ok_or_else(|| SoapError::Parse(format!("Missing {} element", response_name)))
}
