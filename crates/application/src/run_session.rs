//! Collection run channel driver.
//!
//! Owns the push channel of one run session: opens it, sends the start
//! command once it is ready, forwards every decoded server message and closes
//! the channel exactly once, whether the run finished, the channel failed or
//! the owning pane was closed. The session state itself lives in the pane and
//! is updated by the workbench from the forwarded messages.

use std::sync::Arc;

use relay_domain::{ClientMessage, ServerMessage};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::{ChannelConnector, PushChannel};

/// Why the driver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEnd {
    /// A terminal message (`finished` status or server error) was forwarded.
    Terminal,
    /// The channel failed or closed before a terminal message.
    Failed(String),
    /// The cancellation token fired.
    Cancelled,
}

/// Drives push channels for collection runs.
pub struct RunSessionDriver<C: ?Sized> {
    connector: Arc<C>,
}

impl<C: ?Sized> Clone for RunSessionDriver<C> {
    fn clone(&self) -> Self {
        Self {
            connector: Arc::clone(&self.connector),
        }
    }
}

impl<C: ChannelConnector + ?Sized> RunSessionDriver<C> {
    /// Creates a driver opening channels through `connector`.
    pub const fn new(connector: Arc<C>) -> Self {
        Self { connector }
    }

    /// Runs one session to its end.
    ///
    /// `start` is sent exactly once, right after the channel opens. Each
    /// decoded server message is handed to `on_message` in arrival order;
    /// frames that do not decode are logged and skipped.
    pub async fn drive(
        &self,
        start: &ClientMessage,
        cancel: &CancellationToken,
        mut on_message: impl FnMut(ServerMessage) + Send,
    ) -> RunEnd {
        let connected = tokio::select! {
            () = cancel.cancelled() => return RunEnd::Cancelled,
            connected = self.connector.connect() => connected,
        };
        let mut channel = match connected {
            Ok(channel) => channel,
            Err(error) => {
                warn!(%error, "run channel did not open");
                return RunEnd::Failed(error.to_string());
            }
        };
        info!(?start, "run channel opened");

        let end = match channel.send(start).await {
            Ok(()) => Self::pump(channel.as_mut(), cancel, &mut on_message).await,
            Err(error) => RunEnd::Failed(error.to_string()),
        };

        if let Err(error) = channel.close().await {
            debug!(%error, "run channel close failed");
        }
        info!(?end, "run channel closed");
        end
    }

    async fn pump(
        channel: &mut dyn PushChannel,
        cancel: &CancellationToken,
        on_message: &mut (impl FnMut(ServerMessage) + Send),
    ) -> RunEnd {
        loop {
            let frame = tokio::select! {
                () = cancel.cancelled() => return RunEnd::Cancelled,
                frame = channel.recv() => frame,
            };
            match frame {
                Ok(Some(text)) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(message) => {
                        let terminal = message.is_terminal();
                        on_message(message);
                        if terminal {
                            return RunEnd::Terminal;
                        }
                    }
                    Err(error) => warn!(%error, frame = %text, "ignoring unrecognized run message"),
                },
                Ok(None) => {
                    return RunEnd::Failed("channel closed before the run finished".to_owned());
                }
                Err(error) => return RunEnd::Failed(error.to_string()),
            }
        }
    }
}
