//! LUR frame codec (encode/decode)
//!
//! The encoder produces the exact byte sequence the sender puts on the wire.
//! The decoder is the reference for the listener side of the contract: read
//! the prefix, then exactly that many payload bytes.

use std::io::Read;

use bytes::Bytes;

use super::{Error, Frame, HEADER_SIZE, MAX_PAYLOAD_SIZE, MIN_FRAME_SIZE, Result};

/// Encode a frame to bytes
///
/// # Format
///
/// ```text
/// [LENGTH PREFIX (4 bytes, big-endian)] [PAYLOAD (variable)]
/// ```
///
/// Prefix and payload land in one contiguous buffer so the transport can
/// transmit the whole frame with a single send, never two.
#[must_use]
pub fn encode(frame: &Frame) -> Vec<u8> {
    let payload = frame.payload();

    let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());

    // u32 cannot overflow: payload length is capped at MAX_PAYLOAD_SIZE
    bytes.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    bytes.extend_from_slice(payload);

    bytes
}

/// Decode a frame from a complete buffer
///
/// # Errors
///
/// Returns an error if:
/// - Buffer is smaller than the minimum frame
/// - Declared payload length is zero or exceeds the capacity
/// - Buffer holds fewer or more bytes than the prefix declares
pub fn decode(bytes: Bytes) -> Result<Frame> {
    let total_available = bytes.len();

    if total_available < MIN_FRAME_SIZE {
        return Err(Error::BufferTooSmall {
            needed: MIN_FRAME_SIZE,
            got: total_available,
        });
    }

    let prefix: [u8; HEADER_SIZE] = bytes[0..HEADER_SIZE].try_into().unwrap();
    let payload_len = u32::from_be_bytes(prefix) as usize;

    if payload_len == 0 {
        return Err(Error::EmptyPayload);
    }
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(Error::PayloadTooLarge {
            len: payload_len,
            max: MAX_PAYLOAD_SIZE,
        });
    }

    let total_size = HEADER_SIZE + payload_len;
    if total_available < total_size {
        return Err(Error::BufferTooSmall {
            needed: total_size,
            got: total_available,
        });
    }
    // one frame per connection: nothing may follow the payload
    if total_available > total_size {
        return Err(Error::TrailingData {
            extra: total_available - total_size,
        });
    }

    Frame::from_payload(bytes.slice(HEADER_SIZE..total_size))
}

/// Read one frame from a stream
///
/// Blocks until the prefix and exactly the declared number of payload bytes
/// have arrived. The sender's half-close after its single send means a
/// subsequent read on the same stream yields end-of-stream.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Frame> {
    let mut prefix = [0u8; HEADER_SIZE];
    reader.read_exact(&mut prefix)?;
    let payload_len = u32::from_be_bytes(prefix) as usize;

    if payload_len == 0 {
        return Err(Error::EmptyPayload);
    }
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(Error::PayloadTooLarge {
            len: payload_len,
            max: MAX_PAYLOAD_SIZE,
        });
    }

    let mut payload = vec![0u8; payload_len];
    reader.read_exact(&mut payload)?;

    Frame::from_payload(Bytes::from(payload))
}
