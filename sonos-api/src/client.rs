use soap_client::SoapClient;
use tracing::debug;

use crate::{Result, SonosOperation};

/// A client for executing Sonos operations against actual devices
///
/// Bridges the stateless operation definitions and the SOAP transport.
#[derive(Debug, Clone, Default)]
pub struct SonosClient {
    soap_client: SoapClient,
}

impl SonosClient {
    /// Create a client for speakers on the standard port
    pub fn new() -> Self {
        Self {
            soap_client: SoapClient::new(),
        }
    }

    /// Create a client around a custom SOAP client, e.g. one on a test port
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    /// Execute a Sonos operation against a device
    ///
    /// ```no_run
    /// use sonos_api::SonosClient;
    /// use sonos_api::operations::av_transport::{GetTransportInfoOperation, GetTransportInfoRequest};
    ///
    /// let client = SonosClient::new();
    /// let info = client.execute::<GetTransportInfoOperation>(
    ///     "192.168.1.100",
    ///     &GetTransportInfoRequest { instance_id: 0 },
    /// )?;
    /// println!("{:?}", info.current_transport_state);
    /// # Ok::<(), sonos_api::ApiError>(())
    /// ```
    pub fn execute<Op: SonosOperation>(&self, ip: &str, request: &Op::Request) -> Result<Op::Response> {
        let service_info = Op::SERVICE.info();
        let payload = Op::build_payload(request);
        debug!(ip, service = Op::SERVICE.name(), action = Op::ACTION, "executing operation");

        let xml = self.soap_client.call(
            ip,
            service_info.endpoint,
            service_info.service_uri,
            Op::ACTION,
            &payload,
        )?;

        Op::parse_response(&xml)
    }
}
