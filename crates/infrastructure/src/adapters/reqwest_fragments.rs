//! Fragment source implementation using reqwest.
//!
//! Resolves endpoint paths against the configured server URL and returns
//! response bodies verbatim. The client keeps a cookie store because the
//! server tracks the user's collections in a cookie.

use std::time::Duration;

use async_trait::async_trait;
use relay_application::{FetchError, FragmentSource};
use relay_domain::{ClientSettings, FetchMethod, LoadRequest};
use reqwest::{Client, Method, Url};
use tracing::debug;

use super::{AdapterError, server_base};

/// Fetches fragments over HTTP.
pub struct ReqwestFragmentSource {
    client: Client,
    base: Url,
    timeout: Duration,
}

impl ReqwestFragmentSource {
    /// Creates a source for the server named in `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is invalid or the client cannot
    /// be created.
    pub fn new(settings: &ClientSettings) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .user_agent(concat!("relay/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .connect_timeout(settings.connect_timeout())
            .build()
            .map_err(|e| AdapterError::Client(e.to_string()))?;
        Self::with_client(client, settings)
    }

    /// Creates a source using a preconfigured reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is invalid.
    pub fn with_client(client: Client, settings: &ClientSettings) -> Result<Self, AdapterError> {
        Ok(Self {
            client,
            base: server_base(settings)?,
            timeout: settings.fetch_timeout(),
        })
    }

    /// The URL every endpoint path is joined onto.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    const fn to_reqwest_method(method: FetchMethod) -> Method {
        match method {
            FetchMethod::Read => Method::GET,
            FetchMethod::Write => Method::POST,
            FetchMethod::Destructive => Method::DELETE,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|e| FetchError::InvalidUrl {
            path: path.to_owned(),
            message: e.to_string(),
        })
    }

    fn map_error(&self, error: &reqwest::Error, path: &str) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                path: path.to_owned(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }
        if error.is_connect() {
            return FetchError::Transport(format!("could not connect to {}: {error}", self.base));
        }
        FetchError::Transport(error.to_string())
    }
}

#[async_trait]
impl FragmentSource for ReqwestFragmentSource {
    async fn fetch(&self, request: &LoadRequest) -> Result<String, FetchError> {
        let path = request.path.as_str();
        let url = self.endpoint(path)?;
        let method = Self::to_reqwest_method(request.method);
        debug!(%method, %url, "fetching fragment");

        let mut builder = self.client.request(method, url).timeout(self.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(&e, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.map_error(&e, path))
    }
}
