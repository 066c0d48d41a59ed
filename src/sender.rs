//! One-shot delivery orchestration for the relay sender process.
//!
//! A single linear path per invocation: validate the argument, connect,
//! send, half-close, exit. Any failure skips straight to cleanup and a
//! non-zero exit; the socket is released on every path either way.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::debug;

use crate::protocol::{Error, Frame};
use crate::transport::{RelayConnection, RelayError, relay_endpoint};

/// Deliver one message to the fixed relay endpoint.
pub fn deliver(text: &str) -> Result<(), RelayError> {
    deliver_to(text, relay_endpoint()?)
}

/// Deliver one message to a specific address.
///
/// The frame is validated and built before any socket is created, so an
/// oversized or empty message never causes network activity.
pub fn deliver_to(text: &str, addr: SocketAddr) -> Result<(), RelayError> {
    let frame = Frame::from_url(text)?;
    let mut conn = RelayConnection::connect_addr(addr)?;
    conn.send_frame(&frame)?;
    conn.finish()
}

/// Run the relay sender against the given arguments (program name excluded).
///
/// Exactly one positional argument is accepted: the URL the OS handed to
/// the handler.
pub fn try_run<I>(args: I) -> Result<(), RelayError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let url = args.next().ok_or(Error::MissingUrl)?;
    let extra = args.count();
    if extra > 0 {
        return Err(Error::UnexpectedArguments { extra }.into());
    }
    deliver(&url)
}

/// Entry point shared by the platform executables.
///
/// Maps success to exit code 0 and every failure to 1. Diagnostics are
/// emitted as `tracing` events; without a subscriber (release builds) the
/// process stays silent.
pub fn run<I>(args: I) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    match try_run(args) {
        Ok(()) => {
            debug!("frame delivered");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, "delivery failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol;

    #[test]
    fn test_no_argument_fails_before_network() {
        let result = try_run(Vec::new());
        assert!(matches!(
            result,
            Err(RelayError::Frame(protocol::Error::MissingUrl))
        ));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let args = vec![
            "myapp://open".to_string(),
            "stray".to_string(),
            "another".to_string(),
        ];
        let result = try_run(args);
        assert!(matches!(
            result,
            Err(RelayError::Frame(
                protocol::Error::UnexpectedArguments { extra: 2 }
            ))
        ));
    }

    #[test]
    fn test_oversized_url_fails_before_connect() {
        // the target has nothing listening; a connect attempt would surface
        // as RelayError::Connect, so UrlTooLong proves validation ran first
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = "u".repeat(511);
        let result = deliver_to(&url, addr);
        assert!(matches!(
            result,
            Err(RelayError::Frame(protocol::Error::UrlTooLong { .. }))
        ));
    }
}
