//! Tabs and the documents they show.

use std::fmt;

use crate::id::{
    Identifier, NEW_COLLECTION_TAB, NEW_REQUEST_TAB, collection_id, request_id,
};

/// Stable handle of a pane. Survives retargeting, unlike the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneRef(pub(crate) u64);

impl fmt::Display for PaneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

/// The logical document behind a tab, keyed by raw (unsanitized) names.
///
/// Two keys that differ here but share an [`Identifier`] are a collision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// The "New Collection" editor.
    NewCollection,
    /// The "New Request" editor.
    NewRequest,
    /// Settings editor of a collection.
    Collection {
        /// Collection path.
        collection: String,
    },
    /// Editor of a saved request.
    Request {
        /// Collection path.
        collection: String,
        /// Request name.
        request: String,
    },
    /// A run view of a whole collection.
    CollectionRun {
        /// Collection path.
        collection: String,
        /// Run suffix, `-run-<digits>`.
        suffix: String,
    },
    /// The server-side run of a single request.
    RequestRun {
        /// Collection path.
        collection: String,
        /// Request name.
        request: String,
        /// Run suffix, `-run-<digits>`.
        suffix: String,
    },
    /// Inspector of one captured run result.
    Result {
        /// Collection path.
        collection: String,
        /// Request name.
        request: String,
        /// Run suffix, `-run-<digits>`.
        suffix: String,
    },
}

impl DocumentKey {
    /// The natural identifier of the document, before collision handling.
    #[must_use]
    pub fn identifier(&self) -> Identifier {
        match self {
            Self::NewCollection => Identifier::new(NEW_COLLECTION_TAB),
            Self::NewRequest => Identifier::new(NEW_REQUEST_TAB),
            Self::Collection { collection } => collection_id(collection),
            Self::Request {
                collection,
                request,
            } => request_id(collection, request),
            Self::CollectionRun { collection, suffix } => {
                collection_id(collection).with_suffix(suffix)
            }
            Self::RequestRun {
                collection,
                request,
                suffix,
            }
            | Self::Result {
                collection,
                request,
                suffix,
            } => request_id(collection, request).with_suffix(suffix),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewCollection => f.write_str("new collection"),
            Self::NewRequest => f.write_str("new request"),
            Self::Collection { collection } => write!(f, "collection {collection:?}"),
            Self::Request {
                collection,
                request,
            } => write!(f, "request {request:?} of {collection:?}"),
            Self::CollectionRun { collection, suffix } => {
                write!(f, "run{suffix} of collection {collection:?}")
            }
            Self::RequestRun {
                collection,
                request,
                suffix,
            } => write!(f, "run{suffix} of request {request:?} of {collection:?}"),
            Self::Result {
                collection,
                request,
                suffix,
            } => write!(f, "result{suffix} of request {request:?} of {collection:?}"),
        }
    }
}

/// An open tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub(crate) id: Identifier,
    pub(crate) title: String,
    pub(crate) pane: PaneRef,
    pub(crate) key: DocumentKey,
}

impl Tab {
    /// Identifier, unique among open tabs.
    #[must_use]
    pub const fn id(&self) -> &Identifier {
        &self.id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The pane this tab owns.
    #[must_use]
    pub const fn pane(&self) -> PaneRef {
        self.pane
    }

    /// The document shown.
    #[must_use]
    pub const fn key(&self) -> &DocumentKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kinds() {
        assert_eq!(DocumentKey::NewCollection.identifier(), "new-collection-tab");
        assert_eq!(DocumentKey::NewRequest.identifier(), "new-request-tab");
    }

    #[test]
    fn test_run_identifiers() {
        let run = DocumentKey::CollectionRun {
            collection: "Demo".to_owned(),
            suffix: "-run-123".to_owned(),
        };
        assert_eq!(run.identifier(), "collection-Demo-run-123");

        let result = DocumentKey::Result {
            collection: "Demo".to_owned(),
            request: "Req A".to_owned(),
            suffix: "-run-9".to_owned(),
        };
        assert_eq!(result.identifier(), "request-Demo__Req_20A-run-9");
    }
}
