//! Push channel port
//!
//! A bidirectional, message-oriented channel to the server, used by
//! collection runs.

use async_trait::async_trait;
use relay_domain::ClientMessage;

/// Errors that can occur on the push channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// The channel could not be opened.
    #[error("could not open channel: {0}")]
    Connect(String),

    /// A message could not be written.
    #[error("send failed: {0}")]
    Send(String),

    /// Reading from the channel failed.
    #[error("receive failed: {0}")]
    Receive(String),
}

/// An open push channel.
#[async_trait]
pub trait PushChannel: Send {
    /// Sends one client message.
    ///
    /// # Errors
    /// Returns `ChannelError::Send` if the frame cannot be written.
    async fn send(&mut self, message: &ClientMessage) -> Result<(), ChannelError>;

    /// Waits for the next text frame. `Ok(None)` means the peer closed the
    /// channel.
    ///
    /// # Errors
    /// Returns `ChannelError::Receive` on protocol or transport failure.
    async fn recv(&mut self) -> Result<Option<String>, ChannelError>;

    /// Closes the channel.
    ///
    /// # Errors
    /// Returns an error if the close handshake fails.
    async fn close(&mut self) -> Result<(), ChannelError>;
}

/// Port for opening push channels.
#[async_trait]
pub trait ChannelConnector: Send + Sync {
    /// Opens a fresh channel; it is ready to send once this returns.
    ///
    /// # Errors
    /// Returns `ChannelError::Connect` if the handshake fails.
    async fn connect(&self) -> Result<Box<dyn PushChannel>, ChannelError>;
}
