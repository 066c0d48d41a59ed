//! Transport-level error types covering resolution, connection, and send failures.

use core::fmt;
use std::io;

use crate::protocol;

/// Unified error type for the one-shot relay transport.
///
/// Every variant is terminal: the sender never retries, it reports and
/// exits. The listening side is either up on the canonical loopback address
/// or not running at all.
#[derive(Debug)]
pub enum RelayError {
    /// Resolving the loopback endpoint failed.
    Resolve(io::Error),
    /// Resolution produced no candidate address.
    NoAddress,
    /// Connecting to the first candidate address failed (listener unreachable).
    Connect(io::Error),
    /// Transmitting the frame failed.
    Send(io::Error),
    /// Half-closing the write side after the send failed.
    Shutdown(io::Error),
    /// Frame construction or encoding failure.
    Frame(protocol::Error),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(err) => write!(f, "address resolution failed: {err}"),
            Self::NoAddress => write!(f, "address resolution produced no candidates"),
            Self::Connect(err) => write!(f, "unable to connect to listener: {err}"),
            Self::Send(err) => write!(f, "send failed: {err}"),
            Self::Shutdown(err) => write!(f, "shutdown failed: {err}"),
            Self::Frame(err) => write!(f, "frame error: {err}"),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) | Self::Connect(err) | Self::Send(err) | Self::Shutdown(err) => {
                Some(err)
            }
            Self::Frame(err) => Some(err),
            Self::NoAddress => None,
        }
    }
}

impl From<protocol::Error> for RelayError {
    fn from(err: protocol::Error) -> Self {
        Self::Frame(err)
    }
}
