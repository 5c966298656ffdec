//! Port implementations talking to the workbench server.

mod reqwest_fragments;
mod system_clock;
mod ws_channel;

pub use reqwest_fragments::ReqwestFragmentSource;
pub use system_clock::SystemClock;
pub use ws_channel::{WsChannel, WsChannelConnector};

use relay_domain::ClientSettings;
use url::Url;

/// Errors raised while building an adapter from settings.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The configured server URL does not parse.
    #[error("invalid server URL {url}: {source}")]
    InvalidServerUrl {
        /// The configured value.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// The server URL uses a scheme the adapters cannot speak.
    #[error("unsupported server URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The HTTP client could not be created.
    #[error("HTTP client could not be built: {0}")]
    Client(String),
}

/// Parses the configured server URL so relative endpoint paths join below
/// it: `http://host/app` becomes `http://host/app/`.
///
/// # Errors
///
/// Returns `InvalidServerUrl` if the URL does not parse and
/// `UnsupportedScheme` unless it is `http` or `https`.
pub fn server_base(settings: &ClientSettings) -> Result<Url, AdapterError> {
    let mut base =
        Url::parse(&settings.server_url).map_err(|source| AdapterError::InvalidServerUrl {
            url: settings.server_url.clone(),
            source,
        })?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(AdapterError::UnsupportedScheme(base.scheme().to_owned()));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
