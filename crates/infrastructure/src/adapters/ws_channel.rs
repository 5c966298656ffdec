//! Push channel implementation using tokio-tungstenite.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use relay_application::{ChannelConnector, ChannelError, PushChannel};
use relay_domain::{ClientMessage, ClientSettings};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};
use url::Url;

use super::{AdapterError, server_base};

/// Opens WebSocket channels at `<server_url>/<channel_path>`.
#[derive(Debug, Clone)]
pub struct WsChannelConnector {
    url: Url,
    connect_timeout: Duration,
}

impl WsChannelConnector {
    /// Creates a connector for the server named in `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is invalid.
    pub fn new(settings: &ClientSettings) -> Result<Self, AdapterError> {
        Ok(Self {
            url: channel_url(settings)?,
            connect_timeout: settings.connect_timeout(),
        })
    }

    /// The channel endpoint.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

/// Derives the channel URL: the channel path joined onto the server URL,
/// with `http` turned into `ws` and `https` into `wss`.
fn channel_url(settings: &ClientSettings) -> Result<Url, AdapterError> {
    let base = server_base(settings)?;
    let mut url = base
        .join(&settings.channel_path)
        .map_err(|source| AdapterError::InvalidServerUrl {
            url: format!("{base}{}", settings.channel_path),
            source,
        })?;
    let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
    url.set_scheme(scheme)
        .map_err(|()| AdapterError::UnsupportedScheme(url.scheme().to_owned()))?;
    Ok(url)
}

#[async_trait]
impl ChannelConnector for WsChannelConnector {
    async fn connect(&self) -> Result<Box<dyn PushChannel>, ChannelError> {
        let connecting = tokio::time::timeout(self.connect_timeout, connect_async(self.url.as_str()));
        let Ok(connected) = connecting.await else {
            return Err(ChannelError::Connect(format!(
                "{} timed out after {} ms",
                self.url,
                self.connect_timeout.as_millis()
            )));
        };
        let (stream, _response) = connected.map_err(|e| ChannelError::Connect(e.to_string()))?;
        debug!(url = %self.url, "channel connected");
        Ok(Box::new(WsChannel::new(stream)))
    }
}

/// An open WebSocket channel.
pub struct WsChannel {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
    closed: bool,
}

impl WsChannel {
    const fn new(inner: WebSocketStream<MaybeTlsStream<TcpStream>>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }
}

#[async_trait]
impl PushChannel for WsChannel {
    async fn send(&mut self, message: &ClientMessage) -> Result<(), ChannelError> {
        if self.closed {
            return Err(ChannelError::Send("channel is closed".to_owned()));
        }
        let json = serde_json::to_string(message).map_err(|e| ChannelError::Send(e.to_string()))?;
        self.inner
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| ChannelError::Send(e.to_string()))
    }

    async fn recv(&mut self) -> Result<Option<String>, ChannelError> {
        if self.closed {
            return Ok(None);
        }
        loop {
            match self.inner.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text.as_str().to_owned())),
                Some(Ok(Message::Binary(bytes))) => match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => return Ok(Some(text)),
                    Err(error) => warn!(%error, "ignoring non-UTF-8 binary frame"),
                },
                Some(Ok(Message::Close(frame))) => {
                    debug!(?frame, "peer closed channel");
                    self.closed = true;
                    return Ok(None);
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {}
                Some(Err(e)) => return Err(ChannelError::Receive(e.to_string())),
                None => {
                    self.closed = true;
                    return Ok(None);
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), ChannelError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner
            .close(None)
            .await
            .map_err(|e| ChannelError::Send(e.to_string()))
    }
}
