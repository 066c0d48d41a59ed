//! LUR frame implementation

use bytes::Bytes;

use super::{Error, MAX_PAYLOAD_SIZE, Result};

/// One length-prefixed message unit
///
/// A frame is built once per process invocation, serialized into a single
/// contiguous buffer, transmitted in one send, and never reused. The payload
/// is the message text encoded as UTF-16LE code units, which is the encoding
/// the listener decodes with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Encoded payload
    payload: Bytes,
}

impl Frame {
    /// Frame an arbitrary text message
    ///
    /// The listener treats some messages as control traffic (e.g. `stop`),
    /// so any non-empty text is accepted, not just URLs.
    pub fn from_text(text: &str) -> Result<Self> {
        // size check before the encoding pass, in wire-encoding bytes
        let encoded_len = text.encode_utf16().count() * 2;
        if encoded_len == 0 {
            return Err(Error::EmptyPayload);
        }
        if encoded_len > MAX_PAYLOAD_SIZE {
            return Err(Error::PayloadTooLarge {
                len: encoded_len,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        let mut payload = Vec::with_capacity(encoded_len);
        for unit in text.encode_utf16() {
            payload.extend_from_slice(&unit.to_le_bytes());
        }

        Ok(Self {
            payload: Bytes::from(payload),
        })
    }

    /// Frame the URL handed to the relay by the OS
    ///
    /// Rejects an absent (empty) URL and one whose encoded form does not fit
    /// in a single frame, before any socket is touched.
    pub fn from_url(url: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(Error::MissingUrl);
        }
        Self::from_text(url).map_err(|err| match err {
            Error::PayloadTooLarge { len, max } => Error::UrlTooLong { len, max },
            other => other,
        })
    }

    /// Reassemble a frame from an already-encoded payload (listener side)
    pub(crate) fn from_payload(payload: Bytes) -> Result<Self> {
        if payload.is_empty() {
            return Err(Error::EmptyPayload);
        }
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(Error::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }
        if payload.len() % 2 != 0 {
            return Err(Error::OddLengthPayload { len: payload.len() });
        }
        Ok(Self { payload })
    }

    /// Get the encoded payload
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Payload size in bytes (not characters)
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Recover the message text from the payload
    pub fn text(&self) -> Result<String> {
        if self.payload.len() % 2 != 0 {
            return Err(Error::OddLengthPayload { len: self.payload.len() });
        }
        let units: Vec<u16> = self
            .payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(String::from_utf16(&units)?)
    }

    /// Encode frame to bytes
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::encode(self)
    }

    /// Decode frame from bytes
    pub fn decode(bytes: Bytes) -> Result<Self> {
        super::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = Frame::from_url("myapp://install/package").unwrap();

        assert_eq!(frame.payload_len(), 23 * 2);
        assert_eq!(frame.text().unwrap(), "myapp://install/package");
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = Frame::from_url("");
        assert!(matches!(result, Err(Error::MissingUrl)));

        let result = Frame::from_text("");
        assert!(matches!(result, Err(Error::EmptyPayload)));
    }

    #[test]
    fn test_payload_boundary() {
        // 510 code units encode to exactly 1020 bytes, the last size that fits
        let at_limit = "u".repeat(510);
        let frame = Frame::from_url(&at_limit).unwrap();
        assert_eq!(frame.payload_len(), MAX_PAYLOAD_SIZE);

        let over_limit = "u".repeat(511);
        let result = Frame::from_url(&over_limit);
        assert!(matches!(
            result,
            Err(Error::UrlTooLong { len: 1022, max: 1020 })
        ));
    }

    #[test]
    fn test_non_bmp_text_roundtrip() {
        // one surrogate pair costs two code units on the wire
        let url = "myapp://mod/\u{1D11E}-pack";
        let frame = Frame::from_url(url).unwrap();

        assert_eq!(frame.payload_len(), ("myapp://mod/-pack".len() + 2) * 2);
        assert_eq!(frame.text().unwrap(), url);
    }

    #[test]
    fn test_odd_payload_rejected() {
        let result = Frame::from_payload(Bytes::from_static(&[0x61, 0x00, 0x62]));
        assert!(matches!(result, Err(Error::OddLengthPayload { len: 3 })));
    }
}
