//! Collection list shown next to the tabs.

use crate::fragment::{FragmentState, LoadTicket};

/// The collection list fragment plus the expansion state that survives
/// refreshes.
#[derive(Debug, Clone, Default)]
pub struct CollectionsNav {
    content: FragmentState,
    expanded: Option<String>,
    next_ticket: u64,
}

impl CollectionsNav {
    /// Creates an unloaded list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content.
    #[must_use]
    pub const fn content(&self) -> &FragmentState {
        &self.content
    }

    /// Collection whose entry is expanded, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Expands `collection`, or collapses it when it already is expanded.
    pub fn toggle(&mut self, collection: &str) {
        if self.expanded.as_deref() == Some(collection) {
            self.expanded = None;
        } else {
            self.expanded = Some(collection.to_owned());
        }
    }

    /// Starts a refresh. Earlier in-flight refreshes become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.content = FragmentState::Loading { ticket };
        ticket
    }

    /// Installs refreshed content. Returns `false` for a stale ticket.
    pub fn complete(&mut self, ticket: LoadTicket, html: String) -> bool {
        if self.content != (FragmentState::Loading { ticket }) {
            return false;
        }
        self.content = FragmentState::Loaded { html };
        true
    }

    /// Records a failed refresh. Returns `false` for a stale ticket.
    pub fn fail(&mut self, ticket: LoadTicket, message: String) -> bool {
        if self.content != (FragmentState::Loading { ticket }) {
            return false;
        }
        self.content = FragmentState::Failed { message };
        true
    }
}
