//! LUR (Loopback URL Relay) - One-shot delivery of URL-scheme invocations
//! to a running application instance.
//!
//! When an application registers itself as the handler for a custom URL
//! scheme, the OS launches a fresh process for every invocation. LUR is the
//! small relay that bridges that gap: the `lur-send` executable takes the
//! URL it was handed, frames it, pushes it over a loopback TCP connection to
//! the already-running instance, and exits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lur::{Frame, protocol};
//!
//! // Frame a URL for the wire
//! let frame = Frame::from_url("myapp://install/some-package")?;
//!
//! // Encode to bytes: 4-byte big-endian length prefix, then the payload
//! let bytes = protocol::encode(&frame);
//!
//! // The listener side decodes the same bytes back
//! let decoded = protocol::decode(bytes.into())?;
//! assert_eq!(decoded.text()?, "myapp://install/some-package");
//! # Ok::<(), lur::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! [LENGTH PREFIX (4 bytes, big-endian)] [PAYLOAD (UTF-16LE, <= 1020 bytes)]
//! ```
//!
//! One frame per connection. The sender half-closes its write side after the
//! single send, so the listener sees end-of-frame both through the prefix
//! and through end-of-stream.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod sender;
pub mod transport;

pub use protocol::{BUFFER_CAPACITY, Error, Frame, HEADER_SIZE, MAX_PAYLOAD_SIZE, Result};
pub use sender::{deliver, deliver_to, run, try_run};
pub use transport::{RelayConnection, RelayError};

/// LUR protocol version
pub const VERSION: &str = "1.0.0";

/// Port the listening application instance binds on loopback
pub const DEFAULT_PORT: u16 = 58238;
