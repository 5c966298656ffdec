//! Fragment endpoints of the workbench server.
//!
//! Paths are relative to the configured server URL. Each builder returns the
//! [`LoadRequest`] a pane stores, so a failed load can be re-issued verbatim.

use relay_domain::{LoadRequest, SaveCollectionBody, SaveRequestBody};
use serde_json::json;

use crate::ApplicationResult;

/// Collection list, and collection create/update/delete.
pub const COLLECTIONS: &str = "collections";
/// Collection settings editor.
pub const COLLECTION_FORM: &str = "collection-form";
/// Request editor.
pub const REQUEST_FORM: &str = "request-form";
/// Request save.
pub const REQUESTS: &str = "requests";
/// Collection run shell.
pub const COLLECTION_RUN: &str = "collection-run";
/// Single request run, executed and rendered by the server.
pub const REQUEST_RUN: &str = "request-run";
/// Result display template, suffixed with the response status.
pub const REQUEST_RUN_TEMPLATE: &str = "request-run-template";

/// `GET collections`.
#[must_use]
pub fn list_collections() -> LoadRequest {
    LoadRequest::read(COLLECTIONS)
}

/// `POST collections` with the collection settings.
///
/// # Errors
///
/// Returns an encoding error if the body cannot be serialized.
pub fn save_collection(body: &SaveCollectionBody) -> ApplicationResult<LoadRequest> {
    Ok(LoadRequest::write(COLLECTIONS, serde_json::to_value(body)?))
}

/// `DELETE collections`.
#[must_use]
pub fn delete_collection(collection: &str) -> LoadRequest {
    LoadRequest::destructive(COLLECTIONS, json!({ "collection": collection }))
}

/// Collection editor: blank (`GET`) for a new collection, populated (`POST`)
/// for an existing one.
#[must_use]
pub fn collection_form(collection: Option<&str>) -> LoadRequest {
    match collection {
        Some(collection) => {
            LoadRequest::write(COLLECTION_FORM, json!({ "collection": collection }))
        }
        None => LoadRequest::read(COLLECTION_FORM),
    }
}

/// Request editor; without a request name the server renders a blank one.
#[must_use]
pub fn request_form(collection: &str, request: Option<&str>) -> LoadRequest {
    let body = match request {
        Some(request) => json!({ "collection": collection, "request": request }),
        None => json!({ "collection": collection }),
    };
    LoadRequest::write(REQUEST_FORM, body)
}

/// `POST requests` with the request definition.
///
/// # Errors
///
/// Returns an encoding error if the body cannot be serialized.
pub fn save_request(body: &SaveRequestBody) -> ApplicationResult<LoadRequest> {
    Ok(LoadRequest::write(REQUESTS, serde_json::to_value(body)?))
}

/// Run shell of a collection.
#[must_use]
pub fn collection_run(collection: &str) -> LoadRequest {
    LoadRequest::write(COLLECTION_RUN, json!({ "collection": collection }))
}

/// Server-side run of one request.
#[must_use]
pub fn request_run(collection: &str, request: &str) -> LoadRequest {
    LoadRequest::write(
        REQUEST_RUN,
        json!({ "collection": collection, "request": request }),
    )
}

/// Display template for a result with the given response status.
#[must_use]
pub fn result_template(status: u16) -> LoadRequest {
    LoadRequest::read(format!("{REQUEST_RUN_TEMPLATE}/{status}"))
}
