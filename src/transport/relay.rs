//! One-shot relay connection over loopback TCP.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream};

use tracing::{debug, instrument};

use super::endpoint::relay_endpoint;
use super::error::RelayError;
use crate::protocol::{self, Frame};

/// Outbound connection carrying exactly one frame.
///
/// The wrapped stream is the only OS resource this process holds; dropping
/// the connection closes it, so every exit path, success or failure,
/// releases the socket.
#[derive(Debug)]
pub struct RelayConnection {
    stream: TcpStream,
}

impl RelayConnection {
    /// Connect to the fixed relay endpoint.
    pub fn connect() -> Result<Self, RelayError> {
        Self::connect_addr(relay_endpoint()?)
    }

    /// Connect to a specific address.
    ///
    /// A single attempt against the single given address: no retry, no
    /// backoff, no alternates.
    #[instrument(level = "debug")]
    pub fn connect_addr(addr: SocketAddr) -> Result<Self, RelayError> {
        let stream = TcpStream::connect(addr).map_err(RelayError::Connect)?;
        debug!(%addr, "connected to listener");
        Ok(Self { stream })
    }

    /// Transmit one frame.
    ///
    /// The frame is encoded into a single contiguous buffer and written with
    /// `write_all`, which keeps writing through partial acceptance by the
    /// transport until the whole frame is out or a hard error occurs.
    #[instrument(level = "debug", skip(self, frame))]
    pub fn send_frame(&mut self, frame: &Frame) -> Result<(), RelayError> {
        let bytes = protocol::encode(frame);
        self.stream.write_all(&bytes).map_err(RelayError::Send)?;
        debug!(len = bytes.len(), "frame sent");
        Ok(())
    }

    /// Half-close the write side and release the connection.
    ///
    /// The write-side shutdown signals "no more data", giving the listener
    /// end-of-stream as a second end-of-frame marker alongside the length
    /// prefix. Dropping `self` then fully closes the socket.
    pub fn finish(self) -> Result<(), RelayError> {
        self.stream
            .shutdown(Shutdown::Write)
            .map_err(RelayError::Shutdown)?;
        debug!("write side shut down");
        Ok(())
    }

    /// Local address of the underlying stream.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.stream.local_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    #[test]
    fn test_send_frame_and_finish() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = std::thread::spawn(move || {
            let (mut peer, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            peer.read_to_end(&mut received).unwrap();
            received
        });

        let frame = Frame::from_url("myapp://ping").unwrap();
        let mut conn = RelayConnection::connect_addr(addr).unwrap();
        conn.send_frame(&frame).unwrap();
        conn.finish().unwrap();

        let received = handle.join().unwrap();
        assert_eq!(received, protocol::encode(&frame));
    }

    #[test]
    fn test_connect_refused() {
        // bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = RelayConnection::connect_addr(addr);
        assert!(matches!(result, Err(RelayError::Connect(_))));
    }
}
