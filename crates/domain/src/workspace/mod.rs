//! Tab/pane registry.
//!
//! The [`Workspace`] maps open documents onto tabs with identifiers unique
//! among open tabs. Every mutation goes through its methods and completes
//! before the method returns, so no caller ever observes a half-updated tab
//! set. Fetching content is the caller's job: opening a tab hands back the
//! ticket and request to load, and the result comes back through
//! [`Workspace::complete_load`] or [`Workspace::fail_load`].

mod pane;
mod sidebar;
mod tab;

use std::collections::HashMap;

pub use pane::{OnLoad, Pane, PaneView, RunView};
pub use sidebar::CollectionsNav;
pub use tab::{DocumentKey, PaneRef, Tab};

use crate::error::{DomainError, DomainResult};
use crate::fragment::{FragmentState, LoadRequest, LoadTicket};
use crate::id::Identifier;

/// Identifier assigned to a document, and the collision that forced a
/// disambiguated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Identifier given to the tab.
    pub identifier: Identifier,
    /// Set when the natural identifier was held by another document.
    pub collision: Option<DomainError>,
}

/// A freshly created tab whose content must now be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// The new pane.
    pub pane: PaneRef,
    /// Ticket the completion must carry.
    pub ticket: LoadTicket,
    /// What to fetch.
    pub request: LoadRequest,
    /// Identifier given to the tab.
    pub assignment: Assignment,
}

/// Result of [`Workspace::retarget`].
#[derive(Debug)]
pub struct Retargeted {
    /// Identifier now carried by the retargeted tab.
    pub assignment: Assignment,
    /// Another tab that already showed the new document; it has been closed.
    pub displaced: Option<Pane>,
}

/// Result of [`Workspace::open_or_activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    /// The document was already open; its tab is now active.
    Activated(PaneRef),
    /// A new tab was created and activated.
    Created(Created),
}

/// The session table of open tabs and their panes.
#[derive(Debug, Default)]
pub struct Workspace {
    tabs: Vec<Tab>,
    panes: HashMap<PaneRef, Pane>,
    active: Option<PaneRef>,
    next_pane: u64,
    next_ticket: u64,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the document `key`, or activates it if it is already open.
    ///
    /// An already open document is only activated: its content is left
    /// untouched and nothing needs loading. Otherwise a tab and pane are
    /// appended, `on_load` is registered to run once the content arrives, and
    /// the new tab is activated before any content exists.
    pub fn open_or_activate(
        &mut self,
        title: impl Into<String>,
        key: DocumentKey,
        request: LoadRequest,
        on_load: Option<OnLoad>,
    ) -> Opened {
        if let Some(pane) = self.find_by_key(&key) {
            self.active = Some(pane);
            return Opened::Activated(pane);
        }

        let assignment = self.assign(&key, None);
        let pane_ref = PaneRef(self.next_pane);
        self.next_pane += 1;
        let ticket = self.issue_ticket();

        self.panes.insert(
            pane_ref,
            Pane {
                pane_ref,
                id: assignment.identifier.clone(),
                content: FragmentState::Loading { ticket },
                view: PaneView::Static,
                request: request.clone(),
                on_load,
            },
        );
        self.tabs.push(Tab {
            id: assignment.identifier.clone(),
            title: title.into(),
            pane: pane_ref,
            key,
        });
        self.active = Some(pane_ref);

        Opened::Created(Created {
            pane: pane_ref,
            ticket,
            request,
            assignment,
        })
    }

    fn issue_ticket(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        LoadTicket(self.next_ticket)
    }

    /// Whether the document `key` is open in some tab.
    #[must_use]
    pub fn is_open(&self, key: &DocumentKey) -> bool {
        self.find_by_key(key).is_some()
    }

    fn find_by_key(&self, key: &DocumentKey) -> Option<PaneRef> {
        self.tabs.iter().find(|t| &t.key == key).map(|t| t.pane)
    }

    /// Picks the natural identifier of `key`, or the first free `-N`
    /// variant when another document holds it. `except` is ignored while
    /// checking, so a tab can keep its own identifier on retarget.
    fn assign(&self, key: &DocumentKey, except: Option<PaneRef>) -> Assignment {
        let base = key.identifier();
        let mut candidate = base.clone();
        let mut holder = None;
        let mut counter: u32 = 1;

        while let Some(tab) = self
            .tabs
            .iter()
            .find(|t| t.id == candidate && Some(t.pane) != except)
        {
            holder.get_or_insert_with(|| tab.key.to_string());
            counter += 1;
            candidate = base.with_suffix(&format!("-{counter}"));
        }

        let collision = holder.map(|existing| DomainError::IdentifierCollision {
            identifier: base.to_string(),
            existing,
            assigned: candidate.to_string(),
        });
        Assignment {
            identifier: candidate,
            collision,
        }
    }

    /// Makes the tab `id` the visible one.
    ///
    /// # Errors
    ///
    /// Returns `TabNotFound` if no open tab has that identifier.
    pub fn activate(&mut self, id: &Identifier) -> DomainResult<PaneRef> {
        let pane = self.pane_ref(id)?;
        self.active = Some(pane);
        Ok(pane)
    }

    /// Closes the tab `id` together with its pane and returns the pane.
    ///
    /// When the closed tab was active, the first remaining tab becomes
    /// active, or none if the workspace is now empty.
    ///
    /// # Errors
    ///
    /// Returns `TabNotFound` if no open tab has that identifier.
    pub fn close(&mut self, id: &Identifier) -> DomainResult<Pane> {
        let position = self
            .tabs
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| DomainError::TabNotFound(id.to_string()))?;
        let pane_ref = self.tabs[position].pane;
        let pane = self
            .panes
            .remove(&pane_ref)
            .ok_or(DomainError::PaneNotFound(pane_ref))?;
        self.tabs.remove(position);

        if self.active == Some(pane_ref) {
            self.active = self.tabs.first().map(|t| t.pane);
        }
        Ok(pane)
    }

    /// Gives the tab owning `pane` a new document identity and title, in
    /// place. Display position and active state are preserved.
    ///
    /// When another tab already shows the document `key`, that tab is closed
    /// and handed back in [`Retargeted::displaced`]; the retargeted tab takes
    /// over as its only view and becomes active if the closed one was.
    ///
    /// # Errors
    ///
    /// Returns `PaneNotFound` if the pane is not open.
    pub fn retarget(
        &mut self,
        pane: PaneRef,
        key: DocumentKey,
        title: impl Into<String>,
    ) -> DomainResult<Retargeted> {
        if !self.panes.contains_key(&pane) {
            return Err(DomainError::PaneNotFound(pane));
        }

        let displaced = match self.find_by_key(&key).filter(|other| *other != pane) {
            Some(other) => {
                let was_active = self.active == Some(other);
                let id = self
                    .pane(other)
                    .map(|p| p.id.clone())
                    .ok_or(DomainError::PaneNotFound(other))?;
                let closed = self.close(&id)?;
                if was_active {
                    self.active = Some(pane);
                }
                Some(closed)
            }
            None => None,
        };
        let assignment = self.assign(&key, Some(pane));

        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.pane == pane)
            .ok_or(DomainError::PaneNotFound(pane))?;
        tab.id = assignment.identifier.clone();
        tab.title = title.into();
        tab.key = key;
        if let Some(p) = self.panes.get_mut(&pane) {
            p.id = assignment.identifier.clone();
        }
        Ok(Retargeted {
            assignment,
            displaced,
        })
    }

    /// Installs loaded content and runs the pane's on-load hook.
    ///
    /// Returns `false`, changing nothing, when the pane is gone or the ticket
    /// is stale.
    pub fn complete_load(&mut self, pane: PaneRef, ticket: LoadTicket, html: String) -> bool {
        let Some(p) = self.loading_pane(pane, ticket) else {
            return false;
        };
        p.content = FragmentState::Loaded { html };
        if let Some(hook) = p.on_load.take() {
            hook.run(p);
        }
        true
    }

    /// Marks a load as failed; the on-load hook is kept for the retry.
    ///
    /// Returns `false`, changing nothing, when the pane is gone or the ticket
    /// is stale.
    pub fn fail_load(&mut self, pane: PaneRef, ticket: LoadTicket, message: String) -> bool {
        let Some(p) = self.loading_pane(pane, ticket) else {
            return false;
        };
        p.content = FragmentState::Failed { message };
        true
    }

    fn loading_pane(&mut self, pane: PaneRef, ticket: LoadTicket) -> Option<&mut Pane> {
        self.panes
            .get_mut(&pane)
            .filter(|p| p.content == FragmentState::Loading { ticket })
    }

    /// Re-issues the stored request of a failed pane.
    ///
    /// # Errors
    ///
    /// Returns `PaneNotFound` if the pane is not open and `InvalidState` if
    /// its last load did not fail.
    pub fn retry(&mut self, pane: PaneRef) -> DomainResult<(LoadTicket, LoadRequest)> {
        let failed = self
            .panes
            .get(&pane)
            .ok_or(DomainError::PaneNotFound(pane))?
            .content
            .is_failed();
        if !failed {
            return Err(DomainError::InvalidState(format!(
                "{pane} has no failed load to retry"
            )));
        }
        let ticket = self.issue_ticket();
        let p = self
            .panes
            .get_mut(&pane)
            .ok_or(DomainError::PaneNotFound(pane))?;
        p.content = FragmentState::Loading { ticket };
        Ok((ticket, p.request.clone()))
    }

    /// Replaces a pane's content with the fragment returned by a save, along
    /// with the request that reloads it and the view it now shows.
    ///
    /// # Errors
    ///
    /// Returns `PaneNotFound` if the pane is not open.
    pub fn replace_content(
        &mut self,
        pane: PaneRef,
        html: String,
        request: LoadRequest,
        view: PaneView,
    ) -> DomainResult<()> {
        let p = self
            .panes
            .get_mut(&pane)
            .ok_or(DomainError::PaneNotFound(pane))?;
        p.content = FragmentState::Loaded { html };
        p.request = request;
        p.view = view;
        p.on_load = None;
        Ok(())
    }

    /// Open tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Number of open tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether no tab is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// The visible tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|pane| self.tab_for_pane(pane))
    }

    /// Tab with identifier `id`.
    #[must_use]
    pub fn tab(&self, id: &Identifier) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == id)
    }

    /// Tab owning `pane`.
    #[must_use]
    pub fn tab_for_pane(&self, pane: PaneRef) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.pane == pane)
    }

    /// Pane handle of tab `id`.
    ///
    /// # Errors
    ///
    /// Returns `TabNotFound` if no open tab has that identifier.
    pub fn pane_ref(&self, id: &Identifier) -> DomainResult<PaneRef> {
        self.tab(id)
            .map(Tab::pane)
            .ok_or_else(|| DomainError::TabNotFound(id.to_string()))
    }

    /// Pane by handle.
    #[must_use]
    pub fn pane(&self, pane: PaneRef) -> Option<&Pane> {
        self.panes.get(&pane)
    }

    /// Mutable pane by handle.
    pub fn pane_mut(&mut self, pane: PaneRef) -> Option<&mut Pane> {
        self.panes.get_mut(&pane)
    }
}
