//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the workbench core and the server.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod clock;
mod fragment_source;
mod push_channel;

pub use clock::Clock;
pub use fragment_source::{FetchError, FragmentSource};
pub use push_channel::{ChannelConnector, ChannelError, PushChannel};
