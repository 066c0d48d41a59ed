//! LUR error types

use thiserror::Error;

/// LUR protocol errors
#[derive(Error, Debug)]
pub enum Error {
    /// No URL was supplied (absent or empty argument)
    #[error("no url given")]
    MissingUrl,

    /// More than one positional argument was supplied
    #[error("unexpected extra arguments: {extra}")]
    UnexpectedArguments {
        /// Number of arguments beyond the URL
        extra: usize,
    },

    /// URL does not fit in a single frame
    #[error("url too long: {len} bytes encoded (max {max})")]
    UrlTooLong {
        /// Encoded payload size
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Frame carries a zero-length payload
    #[error("empty payload")]
    EmptyPayload,

    /// Payload too large
    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge {
        /// Payload size
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Buffer too small
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Bytes present past the end of the frame
    #[error("trailing data after frame: {extra} bytes")]
    TrailingData {
        /// Number of surplus bytes
        extra: usize,
    },

    /// Payload length is not a whole number of UTF-16 code units
    #[error("odd payload length: {len} bytes")]
    OddLengthPayload {
        /// Payload size
        len: usize,
    },

    /// Invalid UTF-16
    #[error("invalid UTF-16: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
