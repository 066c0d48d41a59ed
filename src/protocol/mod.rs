//! LUR protocol core implementation
//!
//! This module provides the wire format, the frame entity, and the codec.

mod codec;
mod error;
mod frame;

pub use codec::{decode, encode, read_frame};
pub use error::{Error, Result};
pub use frame::Frame;

/// Length prefix size in bytes (u32, big-endian)
pub const HEADER_SIZE: usize = 4;

/// Send buffer capacity in bytes; one frame must fit entirely
pub const BUFFER_CAPACITY: usize = 1024;

/// Maximum payload size (510 UTF-16 code units)
pub const MAX_PAYLOAD_SIZE: usize = BUFFER_CAPACITY - HEADER_SIZE;

/// Minimum frame size (prefix + one UTF-16 code unit)
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + 2;
