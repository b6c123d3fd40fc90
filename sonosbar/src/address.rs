//! Completion of partial speaker addresses
//!
//! `-i 15` on a host at `192.168.1.7` means `192.168.1.15`; the missing
//! leading octets come from the host's own IPv4 address.

use std::net::{Ipv4Addr, UdpSocket};

use tracing::debug;

use crate::error::BarError;

fn invalid(address: &str, reason: impl Into<String>) -> BarError {
    BarError::Address {
        address: address.to_string(),
        reason: reason.into(),
    }
}

/// Fill in the octets `partial` leaves out from `host`
pub fn expand_partial(partial: &str, host: Ipv4Addr) -> Result<String, BarError> {
    let given: Vec<&str> = partial.split('.').collect();
    if given.len() > 4 {
        return Err(invalid(partial, "too many octets"));
    }
    let given = given
        .iter()
        .map(|octet| {
            octet
                .parse::<u8>()
                .map_err(|_| invalid(partial, format!("'{}' is not an octet", octet)))
        })
        .collect::<Result<Vec<u8>, BarError>>()?;

    let mut octets = host.octets();
    octets[4 - given.len()..].copy_from_slice(&given);
    Ok(Ipv4Addr::from(octets).to_string())
}

/// This host's outbound IPv4 address
///
/// Connecting a UDP socket sends nothing; it only makes the OS pick the
/// interface that would route the traffic.
pub fn host_ipv4() -> Result<Ipv4Addr, BarError> {
    let probe = || -> std::io::Result<std::net::SocketAddr> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("1.1.1.1:1")?;
        socket.local_addr()
    };

    match probe() {
        Ok(std::net::SocketAddr::V4(local)) if !local.ip().is_unspecified() => Ok(*local.ip()),
        Ok(other) => Err(invalid("", format!("no IPv4 route from {}", other))),
        Err(e) => Err(invalid("", format!("cannot determine host address: {}", e))),
    }
}

/// Expand `address` against this host when it is not already complete
pub fn complete(address: &str) -> Result<String, BarError> {
    if address.parse::<Ipv4Addr>().is_ok() {
        return Ok(address.to_string());
    }
    let host = host_ipv4().map_err(|e| match e {
        BarError::Address { reason, .. } => invalid(address, reason),
        other => other,
    })?;
    let full = expand_partial(address, host)?;
    debug!(partial = address, %host, full = %full, "completed address");
    Ok(full)
}
