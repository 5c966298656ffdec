//! Fragment Loader
//!
//! Fetches pane content through the [`FragmentSource`] port. Failures are
//! returned as-is: nothing is retried here, a failed pane offers a manual
//! retry instead.

use std::sync::Arc;

use relay_domain::LoadRequest;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ports::{FetchError, FragmentSource};

/// Loads fragments for panes and the collection list.
pub struct FragmentLoader<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for FragmentLoader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: FragmentSource + ?Sized> FragmentLoader<S> {
    /// Creates a loader over the given source.
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetches one fragment.
    ///
    /// # Errors
    ///
    /// Returns the source's [`FetchError`].
    pub async fn load(&self, request: &LoadRequest) -> Result<String, FetchError> {
        debug!(path = %request.path, method = ?request.method, "fetching fragment");
        let result = self.source.fetch(request).await;
        if let Err(error) = &result {
            warn!(path = %request.path, %error, "fragment fetch failed");
        }
        result
    }

    /// Fetches one fragment unless `cancel` fires first.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Cancelled` when the token fires before the fetch
    /// completes, otherwise the source's error.
    pub async fn load_with_cancellation(
        &self,
        request: &LoadRequest,
        cancel: &CancellationToken,
    ) -> Result<String, FetchError> {
        tokio::select! {
            () = cancel.cancelled() => {
                debug!(path = %request.path, "fragment fetch cancelled");
                Err(FetchError::Cancelled)
            }
            result = self.load(request) => result,
        }
    }
}
