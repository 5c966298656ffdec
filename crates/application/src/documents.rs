//! Tab plans for every kind of document the workbench opens.
//!
//! A [`TabPlan`] bundles what the registry needs to open a document: title,
//! document key, the fragment to load and the hook that attaches the typed
//! view once the fragment is in.

use relay_domain::{
    CollectionForm, DocumentKey, LoadRequest, OnLoad, PaneView, RequestForm, RunView, display_name,
};

use crate::endpoints;
use crate::form_reader::{read_collection_form, read_request_form};

/// Title of the new collection editor.
pub const NEW_COLLECTION_TITLE: &str = "New Collection";
/// Title of the new request editor.
pub const NEW_REQUEST_TITLE: &str = "New Request";

/// Everything needed to open one document in a tab.
#[derive(Debug)]
pub struct TabPlan {
    /// Tab title.
    pub title: String,
    /// Document identity.
    pub key: DocumentKey,
    /// Fragment to load into the pane.
    pub request: LoadRequest,
    /// Hook run once the fragment has loaded.
    pub on_load: Option<OnLoad>,
}

impl TabPlan {
    /// Blank collection editor.
    #[must_use]
    pub fn new_collection() -> Self {
        Self {
            title: NEW_COLLECTION_TITLE.to_owned(),
            key: DocumentKey::NewCollection,
            request: endpoints::collection_form(None),
            on_load: Some(collection_editor(CollectionForm::default())),
        }
    }

    /// Settings editor of an existing collection.
    #[must_use]
    pub fn collection_settings(collection: &str) -> Self {
        Self {
            title: display_name(collection).to_owned(),
            key: DocumentKey::Collection {
                collection: collection.to_owned(),
            },
            request: endpoints::collection_form(Some(collection)),
            on_load: Some(collection_editor(CollectionForm::new(collection))),
        }
    }

    /// Blank request editor inside `collection`.
    #[must_use]
    pub fn new_request(collection: &str) -> Self {
        Self {
            title: NEW_REQUEST_TITLE.to_owned(),
            key: DocumentKey::NewRequest,
            request: endpoints::request_form(collection, None),
            on_load: Some(request_editor(RequestForm::new(collection, ""))),
        }
    }

    /// Editor of a saved request.
    #[must_use]
    pub fn open_request(collection: &str, request: &str) -> Self {
        Self {
            title: request.to_owned(),
            key: DocumentKey::Request {
                collection: collection.to_owned(),
                request: request.to_owned(),
            },
            request: endpoints::request_form(collection, Some(request)),
            on_load: Some(request_editor(RequestForm::new(collection, request))),
        }
    }

    /// Run view of a collection. `suffix` distinguishes repeated runs.
    #[must_use]
    pub fn collection_run(collection: &str, suffix: String) -> Self {
        Self {
            title: format!("Run {}", display_name(collection)),
            key: DocumentKey::CollectionRun {
                collection: collection.to_owned(),
                suffix,
            },
            request: endpoints::collection_run(collection),
            on_load: Some(OnLoad::attach(PaneView::CollectionRun(RunView::new(
                collection,
            )))),
        }
    }

    /// Server-rendered run of one request.
    #[must_use]
    pub fn request_run(collection: &str, request: &str, suffix: String) -> Self {
        Self {
            title: format!("Run {request}"),
            key: DocumentKey::RequestRun {
                collection: collection.to_owned(),
                request: request.to_owned(),
                suffix,
            },
            request: endpoints::request_run(collection, request),
            on_load: None,
        }
    }
}

/// Hook that seeds a collection form from the loaded editor markup.
fn collection_editor(defaults: CollectionForm) -> OnLoad {
    OnLoad::new(move |pane| {
        let form = match pane.content().html() {
            Some(html) => read_collection_form(html, defaults),
            None => defaults,
        };
        pane.set_view(PaneView::CollectionForm(form));
    })
}

/// Hook that seeds a request form from the loaded editor markup.
fn request_editor(defaults: RequestForm) -> OnLoad {
    OnLoad::new(move |pane| {
        let form = match pane.content().html() {
            Some(html) => read_request_form(html, defaults),
            None => defaults,
        };
        pane.set_view(PaneView::RequestForm(form));
    })
}
