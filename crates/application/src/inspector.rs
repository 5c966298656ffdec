//! Result inspector.
//!
//! Opens a read-only tab for one captured run result. Only the display
//! template is fetched; every field shown comes from the snapshot the run
//! already delivered.

use relay_domain::{DocumentKey, OnLoad, PaneView, RequestResultEntry, ResultView};

use crate::documents::TabPlan;
use crate::endpoints;

/// Plan of the inspector tab for `entry`, produced by a run of `collection`.
#[must_use]
pub fn result_tab(collection: &str, entry: &RequestResultEntry, suffix: String) -> TabPlan {
    let snapshot = entry.snapshot();
    let view = ResultView::from(snapshot);
    TabPlan {
        title: format!("{} results", entry.request_name()),
        key: DocumentKey::Result {
            collection: collection.to_owned(),
            request: entry.request_name().to_owned(),
            suffix,
        },
        request: endpoints::result_template(snapshot.response_status),
        on_load: Some(OnLoad::attach(PaneView::Result(view))),
    }
}
