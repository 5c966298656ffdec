//! Panes: fragment content plus the typed client-side view attached to it.

use std::fmt;

use chrono::{DateTime, Utc};

use super::tab::PaneRef;
use crate::error::{DomainError, DomainResult};
use crate::form::{CollectionForm, RequestForm};
use crate::fragment::{FragmentState, LoadRequest};
use crate::id::Identifier;
use crate::run::{CollectionRunSession, ResultView};

/// Hook run once, with the populated pane, when its fragment loads.
pub struct OnLoad(Box<dyn FnOnce(&mut Pane) + Send>);

impl OnLoad {
    /// Wraps a hook.
    #[must_use]
    pub fn new(hook: impl FnOnce(&mut Pane) + Send + 'static) -> Self {
        Self(Box::new(hook))
    }

    /// Hook that installs `view` on the pane.
    #[must_use]
    pub fn attach(view: PaneView) -> Self {
        Self::new(move |pane| pane.set_view(view))
    }

    pub(crate) fn run(self, pane: &mut Pane) {
        (self.0)(pane);
    }
}

impl fmt::Debug for OnLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnLoad(..)")
    }
}

/// Run view hosted by a collection-run pane.
#[derive(Debug, Clone)]
pub struct RunView {
    collection: String,
    session: Option<CollectionRunSession>,
}

impl RunView {
    /// A run view with no session started yet.
    #[must_use]
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            session: None,
        }
    }

    /// Collection this view runs.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The current or last session.
    #[must_use]
    pub const fn session(&self) -> Option<&CollectionRunSession> {
        self.session.as_ref()
    }

    /// Mutable access to the current or last session.
    pub const fn session_mut(&mut self) -> Option<&mut CollectionRunSession> {
        self.session.as_mut()
    }

    /// Starts a fresh session, discarding a finished one and its results.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` while a session is still active.
    pub fn begin(&mut self, opened_at: DateTime<Utc>) -> DomainResult<&CollectionRunSession> {
        if self.session.as_ref().is_some_and(CollectionRunSession::is_active) {
            return Err(DomainError::InvalidState(format!(
                "a run of {} is already in progress",
                self.collection
            )));
        }
        Ok(self
            .session
            .insert(CollectionRunSession::new(self.collection.clone(), opened_at)))
    }
}

/// Typed model of what a pane shows.
#[derive(Debug, Clone, Default)]
pub enum PaneView {
    /// Plain fragment with no client-side model.
    #[default]
    Static,
    /// Collection settings editor.
    CollectionForm(CollectionForm),
    /// Request editor.
    RequestForm(RequestForm),
    /// Collection run view.
    CollectionRun(RunView),
    /// Result inspector.
    Result(ResultView),
}

/// A pane, owned 1:1 by its tab.
#[derive(Debug)]
pub struct Pane {
    pub(crate) pane_ref: PaneRef,
    pub(crate) id: Identifier,
    pub(crate) content: FragmentState,
    pub(crate) view: PaneView,
    pub(crate) request: LoadRequest,
    pub(crate) on_load: Option<OnLoad>,
}

impl Pane {
    /// Stable handle.
    #[must_use]
    pub const fn pane_ref(&self) -> PaneRef {
        self.pane_ref
    }

    /// Identifier shared with the owning tab.
    #[must_use]
    pub const fn id(&self) -> &Identifier {
        &self.id
    }

    /// Fragment content state.
    #[must_use]
    pub const fn content(&self) -> &FragmentState {
        &self.content
    }

    /// Request that produced (or will produce) the content.
    #[must_use]
    pub const fn request(&self) -> &LoadRequest {
        &self.request
    }

    /// Typed view.
    #[must_use]
    pub const fn view(&self) -> &PaneView {
        &self.view
    }

    /// Mutable typed view.
    pub const fn view_mut(&mut self) -> &mut PaneView {
        &mut self.view
    }

    /// Replaces the typed view.
    pub fn set_view(&mut self, view: PaneView) {
        self.view = view;
    }

    /// Run view, if this pane hosts one.
    #[must_use]
    pub const fn run_view(&self) -> Option<&RunView> {
        match &self.view {
            PaneView::CollectionRun(run) => Some(run),
            _ => None,
        }
    }

    /// Mutable run view, if this pane hosts one.
    pub const fn run_view_mut(&mut self) -> Option<&mut RunView> {
        match &mut self.view {
            PaneView::CollectionRun(run) => Some(run),
            _ => None,
        }
    }
}
