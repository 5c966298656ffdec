//! Commands accepted by the workbench and updates it publishes.
//!
//! Commands flow in from the front end; updates flow back out over an
//! unbounded channel and are the only thing a renderer needs to observe.

use relay_domain::{
    CollectionFormEdit, Identifier, RequestFormEdit, ResultOutcome, RunOutcome, Tab,
};

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchCommand {
    /// Reload the collection list.
    RefreshCollections,
    /// Expand or collapse a collection in the list.
    ToggleCollection {
        /// Collection path.
        collection: String,
    },
    /// Open the blank collection editor.
    NewCollection,
    /// Open the settings editor of a collection.
    OpenCollectionSettings {
        /// Collection path.
        collection: String,
    },
    /// Open a new run view of a collection.
    RunCollection {
        /// Collection path.
        collection: String,
    },
    /// Remove a collection from the list.
    DeleteCollection {
        /// Collection path.
        collection: String,
    },
    /// Open the blank request editor inside a collection.
    NewRequest {
        /// Collection path.
        collection: String,
    },
    /// Open the editor of a saved request.
    OpenRequest {
        /// Collection path.
        collection: String,
        /// Request name.
        request: String,
    },
    /// Open a server-side run of one request.
    RunRequest {
        /// Collection path.
        collection: String,
        /// Request name.
        request: String,
    },
    /// Edit the collection form shown in a tab.
    EditCollectionForm {
        /// Tab identifier.
        tab: Identifier,
        /// The edit.
        edit: CollectionFormEdit,
    },
    /// Edit the request form shown in a tab.
    EditRequestForm {
        /// Tab identifier.
        tab: Identifier,
        /// The edit.
        edit: RequestFormEdit,
    },
    /// Save the collection form shown in a tab.
    SaveCollection {
        /// Tab identifier.
        tab: Identifier,
    },
    /// Save the request form shown in a tab.
    SaveRequest {
        /// Tab identifier.
        tab: Identifier,
    },
    /// Start the run hosted by a run tab.
    StartRun {
        /// Tab identifier.
        tab: Identifier,
    },
    /// Open the inspector of one result of a run tab.
    InspectResult {
        /// Run tab identifier.
        tab: Identifier,
        /// Index in the result list.
        index: usize,
    },
    /// Make a tab visible.
    ActivateTab {
        /// Tab identifier.
        tab: Identifier,
    },
    /// Close a tab.
    CloseTab {
        /// Tab identifier.
        tab: Identifier,
    },
    /// Re-issue the failed load of a tab.
    Retry {
        /// Tab identifier.
        tab: Identifier,
    },
}

/// A state change the renderer should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchUpdate {
    /// The tab strip changed.
    TabsChanged {
        /// Open tabs in display order.
        tabs: Vec<Tab>,
        /// Identifier of the visible tab.
        active: Option<Identifier>,
    },
    /// A pane received its content.
    PaneLoaded {
        /// Tab identifier.
        tab: Identifier,
    },
    /// A pane load failed; the tab can be retried.
    PaneFailed {
        /// Tab identifier.
        tab: Identifier,
        /// Failure description.
        message: String,
    },
    /// The collection list was refreshed.
    CollectionsLoaded {
        /// Rendered list.
        html: String,
        /// Collection whose entry stays expanded.
        expanded: Option<String>,
    },
    /// A collection entry was expanded or collapsed.
    CollectionExpanded {
        /// Collection now expanded, if any.
        expanded: Option<String>,
    },
    /// Run counters changed.
    RunProgress {
        /// Run tab identifier.
        tab: Identifier,
        /// Last status string from the server.
        status: String,
        /// Completion percentage.
        percent: u8,
        /// Whether the progress indicator animates.
        running: bool,
    },
    /// A run result arrived.
    RunResultAppended {
        /// Run tab identifier.
        tab: Identifier,
        /// Index in the result list.
        index: usize,
        /// Request name.
        request: String,
        /// Success or failure.
        outcome: ResultOutcome,
    },
    /// A run ended.
    RunFinished {
        /// Run tab identifier.
        tab: Identifier,
        /// How it ended.
        outcome: RunOutcome,
    },
    /// Something worth telling the user that did not block the action.
    Warning(String),
    /// An action failed.
    Error(String),
}
