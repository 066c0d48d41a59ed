//! Loopback relay transport: endpoint resolution and the one-shot connection.

mod endpoint;
mod error;
mod relay;

pub use endpoint::{RELAY_HOST, relay_endpoint};
pub use error::RelayError;
pub use relay::RelayConnection;
