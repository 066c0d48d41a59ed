//! Fixed loopback endpoint for the relay target.

use std::net::{SocketAddr, ToSocketAddrs};

use super::error::RelayError;
use crate::DEFAULT_PORT;

/// Host the listening application instance binds.
pub const RELAY_HOST: &str = "127.0.0.1";

/// Resolve the relay endpoint.
///
/// Only the first candidate returned by resolution is used. If the connect
/// attempt against it fails later, there is no fallback to alternates; the
/// listener is assumed to be either up on the canonical loopback address or
/// not running at all.
pub fn relay_endpoint() -> Result<SocketAddr, RelayError> {
    let mut candidates = (RELAY_HOST, DEFAULT_PORT)
        .to_socket_addrs()
        .map_err(RelayError::Resolve)?;

    candidates.next().ok_or(RelayError::NoAddress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_endpoint_resolves_to_loopback() {
        let addr = relay_endpoint().unwrap();

        assert_eq!(addr.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(addr.port(), DEFAULT_PORT);
    }
}
