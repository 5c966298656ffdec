//! Workbench controller.
//!
//! A single event loop owns the [`Workspace`] and the collection list.
//! Commands are handled synchronously; anything that touches the network runs
//! in a spawned task that posts an [`Event`] back, so every state change
//! happens inside one loop turn and no late completion can interleave with
//! another mutation.

mod command;

use std::collections::HashMap;
use std::sync::Arc;

use relay_domain::{
    ClientMessage, CollectionForm, CollectionsNav, DocumentKey, DomainError, Identifier,
    LoadRequest, LoadTicket, Opened, Pane, PaneRef, PaneView, RequestForm, Retargeted, RunOutcome,
    RunStatus, SaveCollectionBody, SaveRequestBody, ServerMessage, SessionId, Transition,
    Workspace, display_name, run_suffix,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub use command::{WorkbenchCommand, WorkbenchUpdate};

use crate::documents::TabPlan;
use crate::fragment_loader::FragmentLoader;
use crate::inspector;
use crate::ports::{ChannelConnector, Clock, FetchError, FragmentSource};
use crate::run_session::{RunEnd, RunSessionDriver};
use crate::{ApplicationResult, endpoints};

/// What a save posted, kept until the server answers.
#[derive(Debug)]
enum Saved {
    Collection(SaveCollectionBody),
    Request(SaveRequestBody),
}

/// Completion posted back by a spawned task.
#[derive(Debug)]
enum Event {
    PaneLoaded {
        pane: PaneRef,
        ticket: LoadTicket,
        result: Result<String, FetchError>,
    },
    CollectionsLoaded {
        ticket: LoadTicket,
        result: Result<String, FetchError>,
    },
    CollectionDeleted {
        collection: String,
        ticket: LoadTicket,
        result: Result<String, FetchError>,
    },
    Saved {
        pane: PaneRef,
        saved: Saved,
        result: Result<String, FetchError>,
    },
    RunMessage {
        pane: PaneRef,
        session: SessionId,
        message: ServerMessage,
    },
    RunEnded {
        pane: PaneRef,
        session: SessionId,
        end: RunEnd,
    },
}

/// The workbench: tabs, panes, collection list and their I/O.
pub struct Workbench<S: ?Sized, C: ?Sized> {
    workspace: Workspace,
    nav: CollectionsNav,
    loader: FragmentLoader<S>,
    driver: RunSessionDriver<C>,
    clock: Arc<dyn Clock>,
    tokens: HashMap<PaneRef, CancellationToken>,
    root: CancellationToken,
    in_flight: usize,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    updates: mpsc::UnboundedSender<WorkbenchUpdate>,
}

impl<S, C> Workbench<S, C>
where
    S: FragmentSource + ?Sized + 'static,
    C: ChannelConnector + ?Sized + 'static,
{
    /// Creates a workbench and the receiving end of its update stream.
    pub fn new(
        source: Arc<S>,
        connector: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> (Self, mpsc::UnboundedReceiver<WorkbenchUpdate>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (updates, updates_rx) = mpsc::unbounded_channel();
        let workbench = Self {
            workspace: Workspace::new(),
            nav: CollectionsNav::new(),
            loader: FragmentLoader::new(source),
            driver: RunSessionDriver::new(connector),
            clock,
            tokens: HashMap::new(),
            root: CancellationToken::new(),
            in_flight: 0,
            events_tx,
            events_rx,
            updates,
        };
        (workbench, updates_rx)
    }

    /// Open tabs and panes.
    #[must_use]
    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The collection list.
    #[must_use]
    pub const fn collections(&self) -> &CollectionsNav {
        &self.nav
    }

    /// Number of spawned tasks whose completion has not been processed yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handles a command, publishing a failure as [`WorkbenchUpdate::Error`].
    pub fn dispatch(&mut self, command: WorkbenchCommand) {
        if let Err(error) = self.handle(command) {
            warn!(%error, "command failed");
            self.emit(WorkbenchUpdate::Error(error.to_string()));
        }
    }

    /// Handles a command.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the command targets an unknown tab, a tab
    /// showing the wrong kind of view, a form that fails validation or a run
    /// that is still in progress.
    pub fn handle(&mut self, command: WorkbenchCommand) -> ApplicationResult<()> {
        match command {
            WorkbenchCommand::RefreshCollections => self.refresh_collections(),
            WorkbenchCommand::ToggleCollection { collection } => {
                self.nav.toggle(&collection);
                self.emit(WorkbenchUpdate::CollectionExpanded {
                    expanded: self.nav.expanded().map(str::to_owned),
                });
            }
            WorkbenchCommand::NewCollection => {
                self.open(TabPlan::new_collection());
            }
            WorkbenchCommand::OpenCollectionSettings { collection } => {
                self.open(TabPlan::collection_settings(&collection));
            }
            WorkbenchCommand::RunCollection { collection } => {
                let suffix = self.fresh_suffix(|suffix| DocumentKey::CollectionRun {
                    collection: collection.clone(),
                    suffix,
                });
                self.open(TabPlan::collection_run(&collection, suffix));
            }
            WorkbenchCommand::DeleteCollection { collection } => {
                self.delete_collection(collection);
            }
            WorkbenchCommand::NewRequest { collection } => {
                self.open(TabPlan::new_request(&collection));
            }
            WorkbenchCommand::OpenRequest {
                collection,
                request,
            } => {
                self.open(TabPlan::open_request(&collection, &request));
            }
            WorkbenchCommand::RunRequest {
                collection,
                request,
            } => {
                let suffix = self.fresh_suffix(|suffix| DocumentKey::RequestRun {
                    collection: collection.clone(),
                    request: request.clone(),
                    suffix,
                });
                self.open(TabPlan::request_run(&collection, &request, suffix));
            }
            WorkbenchCommand::EditCollectionForm { tab, edit } => {
                let (_, view) = self.view_mut(&tab)?;
                let PaneView::CollectionForm(form) = view else {
                    return Err(wrong_view(&tab, "a collection form").into());
                };
                if !form.apply(edit) {
                    return Err(DomainError::InvalidState(format!("{tab}: unknown form row")).into());
                }
            }
            WorkbenchCommand::EditRequestForm { tab, edit } => {
                let (_, view) = self.view_mut(&tab)?;
                let PaneView::RequestForm(form) = view else {
                    return Err(wrong_view(&tab, "a request form").into());
                };
                if !form.apply(edit) {
                    return Err(DomainError::InvalidState(format!("{tab}: unknown form row")).into());
                }
            }
            WorkbenchCommand::SaveCollection { tab } => self.save_collection(&tab)?,
            WorkbenchCommand::SaveRequest { tab } => self.save_request(&tab)?,
            WorkbenchCommand::StartRun { tab } => self.start_run(tab)?,
            WorkbenchCommand::InspectResult { tab, index } => self.inspect_result(&tab, index)?,
            WorkbenchCommand::ActivateTab { tab } => {
                self.workspace.activate(&tab)?;
                self.emit_tabs();
            }
            WorkbenchCommand::CloseTab { tab } => self.close_tab(&tab)?,
            WorkbenchCommand::Retry { tab } => {
                let pane = self.workspace.pane_ref(&tab)?;
                let (ticket, request) = self.workspace.retry(pane)?;
                info!(%tab, path = %request.path, "retrying load");
                let cancel = self.pane_token(pane);
                self.spawn_pane_load(pane, ticket, request, cancel);
            }
        }
        Ok(())
    }

    /// Waits for the next task completion and applies it.
    ///
    /// Returns `false` if no task can complete anymore.
    pub async fn process_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.events_rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Applies completions until no spawned task is outstanding.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    /// Runs the event loop until the command stream ends, then cancels every
    /// outstanding load and run.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<WorkbenchCommand>) {
        info!("workbench started");
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.dispatch(command),
                    None => break,
                },
                Some(event) = self.events_rx.recv() => self.apply(event),
            }
        }
        self.shutdown();
    }

    /// Cancels every outstanding load and run.
    pub fn shutdown(&self) {
        info!(in_flight = self.in_flight, "workbench shutting down");
        self.root.cancel();
    }

    fn emit(&self, update: WorkbenchUpdate) {
        let _ = self.updates.send(update);
    }

    fn emit_tabs(&self) {
        self.emit(WorkbenchUpdate::TabsChanged {
            tabs: self.workspace.tabs().to_vec(),
            active: self.workspace.active_tab().map(|t| t.id().clone()),
        });
    }

    fn tab_id(&self, pane: PaneRef) -> Option<Identifier> {
        self.workspace.tab_for_pane(pane).map(|t| t.id().clone())
    }

    fn view_mut(&mut self, tab: &Identifier) -> ApplicationResult<(PaneRef, &mut PaneView)> {
        let pane = self.workspace.pane_ref(tab)?;
        let view = self
            .workspace
            .pane_mut(pane)
            .map(Pane::view_mut)
            .ok_or(DomainError::PaneNotFound(pane))?;
        Ok((pane, view))
    }

    fn pane_token(&mut self, pane: PaneRef) -> CancellationToken {
        self.tokens
            .entry(pane)
            .or_insert_with(|| self.root.child_token())
            .clone()
    }

    /// Draws run suffixes until the resulting document is not already open.
    fn fresh_suffix(&self, key_for: impl Fn(String) -> DocumentKey) -> String {
        loop {
            let suffix = run_suffix();
            if !self.workspace.is_open(&key_for(suffix.clone())) {
                return suffix;
            }
        }
    }

    fn open(&mut self, plan: TabPlan) -> PaneRef {
        let TabPlan {
            title,
            key,
            request,
            on_load,
        } = plan;
        let pane = match self.workspace.open_or_activate(title, key, request, on_load) {
            Opened::Activated(pane) => {
                debug!(%pane, "document already open");
                pane
            }
            Opened::Created(created) => {
                info!(tab = %created.assignment.identifier, path = %created.request.path, "tab opened");
                if let Some(collision) = created.assignment.collision {
                    warn!(%collision, "identifier collision");
                    self.emit(WorkbenchUpdate::Warning(collision.to_string()));
                }
                let cancel = self.pane_token(created.pane);
                self.spawn_pane_load(created.pane, created.ticket, created.request, cancel);
                created.pane
            }
        };
        self.emit_tabs();
        pane
    }

    fn close_tab(&mut self, tab: &Identifier) -> ApplicationResult<()> {
        let pane = self.workspace.close(tab)?;
        if let Some(token) = self.tokens.remove(&pane.pane_ref()) {
            token.cancel();
        }
        let active_run = pane
            .run_view()
            .and_then(|run| run.session())
            .is_some_and(|session| session.is_active());
        info!(%tab, active_run, "tab closed");
        self.emit_tabs();
        Ok(())
    }

    fn refresh_collections(&mut self) {
        let ticket = self.nav.begin_load();
        let cancel = self.root.child_token();
        self.spawn_fetch(endpoints::list_collections(), cancel, move |result| {
            Event::CollectionsLoaded { ticket, result }
        });
    }

    fn delete_collection(&mut self, collection: String) {
        info!(%collection, "deleting collection");
        let ticket = self.nav.begin_load();
        let cancel = self.root.child_token();
        let request = endpoints::delete_collection(&collection);
        self.spawn_fetch(request, cancel, move |result| Event::CollectionDeleted {
            collection,
            ticket,
            result,
        });
    }

    fn save_collection(&mut self, tab: &Identifier) -> ApplicationResult<()> {
        let (pane, view) = self.view_mut(tab)?;
        let PaneView::CollectionForm(form) = view else {
            return Err(wrong_view(tab, "a collection form").into());
        };
        let body = form.save_body()?;
        let request = endpoints::save_collection(&body)?;
        info!(%tab, collection = %body.collection, "saving collection");
        let cancel = self.pane_token(pane);
        self.spawn_fetch(request, cancel, move |result| Event::Saved {
            pane,
            saved: Saved::Collection(body),
            result,
        });
        Ok(())
    }

    fn save_request(&mut self, tab: &Identifier) -> ApplicationResult<()> {
        let (pane, view) = self.view_mut(tab)?;
        let PaneView::RequestForm(form) = view else {
            return Err(wrong_view(tab, "a request form").into());
        };
        let body = form.save_body()?;
        let request = endpoints::save_request(&body)?;
        info!(%tab, request = %body.request, "saving request");
        let cancel = self.pane_token(pane);
        self.spawn_fetch(request, cancel, move |result| Event::Saved {
            pane,
            saved: Saved::Request(body),
            result,
        });
        Ok(())
    }

    fn start_run(&mut self, tab: Identifier) -> ApplicationResult<()> {
        let pane = self.workspace.pane_ref(&tab)?;
        let now = self.clock.now();
        let run = self
            .workspace
            .pane_mut(pane)
            .and_then(Pane::run_view_mut)
            .ok_or_else(|| wrong_view(&tab, "a run view"))?;
        let session = run.begin(now)?;
        let (id, start) = (session.id(), session.start_command());
        info!(%tab, session = %id, collection = session.collection(), "starting run");

        self.emit(WorkbenchUpdate::RunProgress {
            tab,
            status: String::new(),
            percent: 0,
            running: false,
        });
        self.spawn_run(pane, id, start);
        Ok(())
    }

    fn inspect_result(&mut self, tab: &Identifier, index: usize) -> ApplicationResult<()> {
        let pane = self.workspace.pane_ref(tab)?;
        let run = self
            .workspace
            .pane(pane)
            .and_then(Pane::run_view)
            .ok_or_else(|| wrong_view(tab, "a run view"))?;
        let entry = run
            .session()
            .and_then(|session| session.results().get(index))
            .cloned()
            .ok_or_else(|| DomainError::InvalidState(format!("{tab} has no result #{index}")))?;
        let collection = run.collection().to_owned();

        let suffix = self.fresh_suffix(|suffix| DocumentKey::Result {
            collection: collection.clone(),
            request: entry.request_name().to_owned(),
            suffix,
        });
        self.open(inspector::result_tab(&collection, &entry, suffix));
        Ok(())
    }

    fn spawn_fetch(
        &mut self,
        request: LoadRequest,
        cancel: CancellationToken,
        complete: impl FnOnce(Result<String, FetchError>) -> Event + Send + 'static,
    ) {
        self.in_flight += 1;
        let loader = self.loader.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = loader.load_with_cancellation(&request, &cancel).await;
            let _ = events.send(complete(result));
        });
    }

    fn spawn_pane_load(
        &mut self,
        pane: PaneRef,
        ticket: LoadTicket,
        request: LoadRequest,
        cancel: CancellationToken,
    ) {
        self.spawn_fetch(request, cancel, move |result| Event::PaneLoaded {
            pane,
            ticket,
            result,
        });
    }

    fn spawn_run(&mut self, pane: PaneRef, session: SessionId, start: ClientMessage) {
        self.in_flight += 1;
        let cancel = self.pane_token(pane);
        let driver = self.driver.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let forward = events.clone();
            let end = driver
                .drive(&start, &cancel, |message| {
                    let _ = forward.send(Event::RunMessage {
                        pane,
                        session,
                        message,
                    });
                })
                .await;
            let _ = events.send(Event::RunEnded { pane, session, end });
        });
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::PaneLoaded {
                pane,
                ticket,
                result,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.on_pane_loaded(pane, ticket, result);
            }
            Event::CollectionsLoaded { ticket, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.on_collections_loaded(ticket, result);
            }
            Event::CollectionDeleted {
                collection,
                ticket,
                result,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.on_collection_deleted(&collection, ticket, result);
            }
            Event::Saved {
                pane,
                saved,
                result,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.on_saved(pane, saved, result);
            }
            Event::RunMessage {
                pane,
                session,
                message,
            } => self.on_run_message(pane, session, message),
            Event::RunEnded { pane, session, end } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.on_run_ended(pane, session, end);
            }
        }
    }

    fn on_pane_loaded(
        &mut self,
        pane: PaneRef,
        ticket: LoadTicket,
        result: Result<String, FetchError>,
    ) {
        let Some(tab) = self.tab_id(pane) else {
            debug!(%pane, "ignoring fragment of a closed pane");
            return;
        };
        match result {
            Ok(html) => {
                if self.workspace.complete_load(pane, ticket, html) {
                    debug!(%tab, "pane loaded");
                    self.emit(WorkbenchUpdate::PaneLoaded { tab });
                } else {
                    debug!(%tab, "ignoring stale fragment");
                }
            }
            Err(error) => {
                let message = error.to_string();
                if self.workspace.fail_load(pane, ticket, message.clone()) {
                    warn!(%tab, %error, "pane load failed");
                    self.emit(WorkbenchUpdate::PaneFailed { tab, message });
                }
            }
        }
    }

    fn on_collections_loaded(&mut self, ticket: LoadTicket, result: Result<String, FetchError>) {
        match result {
            Ok(html) => {
                if self.nav.complete(ticket, html.clone()) {
                    debug!("collection list loaded");
                    self.emit(WorkbenchUpdate::CollectionsLoaded {
                        html,
                        expanded: self.nav.expanded().map(str::to_owned),
                    });
                }
            }
            Err(error) => {
                if self.nav.fail(ticket, error.to_string()) {
                    warn!(%error, "collection list failed to load");
                    self.emit(WorkbenchUpdate::Error(format!(
                        "could not load collections: {error}"
                    )));
                }
            }
        }
    }

    fn on_collection_deleted(
        &mut self,
        collection: &str,
        ticket: LoadTicket,
        result: Result<String, FetchError>,
    ) {
        match result {
            Ok(html) => {
                info!(%collection, "collection deleted");
                self.on_collections_loaded(ticket, Ok(html));
            }
            Err(FetchError::Cancelled) => debug!(%collection, "delete cancelled"),
            Err(error) => {
                warn!(%collection, %error, "collection delete failed");
                self.nav.fail(ticket, error.to_string());
                self.emit(WorkbenchUpdate::Error(format!(
                    "could not delete {collection}: {error}"
                )));
                self.refresh_collections();
            }
        }
    }

    fn on_saved(&mut self, pane: PaneRef, saved: Saved, result: Result<String, FetchError>) {
        let Some(tab) = self.tab_id(pane) else {
            debug!(%pane, "ignoring save answer of a closed pane");
            return;
        };
        let html = match result {
            Ok(html) => html,
            Err(error) => {
                warn!(%tab, %error, "save failed");
                self.emit(WorkbenchUpdate::Error(format!("could not save {tab}: {error}")));
                return;
            }
        };

        let (key, title, request, view) = match saved {
            Saved::Collection(body) => (
                DocumentKey::Collection {
                    collection: body.collection.clone(),
                },
                display_name(&body.collection).to_owned(),
                endpoints::collection_form(Some(&body.collection)),
                PaneView::CollectionForm(CollectionForm::from_saved(&body)),
            ),
            Saved::Request(body) => (
                DocumentKey::Request {
                    collection: body.collection.clone(),
                    request: body.request.clone(),
                },
                body.request.clone(),
                endpoints::request_form(&body.collection, Some(&body.request)),
                PaneView::RequestForm(RequestForm::from_saved(&body)),
            ),
        };

        let retargeted = self
            .workspace
            .replace_content(pane, html, request, view)
            .and_then(|()| self.workspace.retarget(pane, key, title));
        match retargeted {
            Ok(Retargeted {
                assignment,
                displaced,
            }) => {
                if let Some(displaced) = displaced {
                    if let Some(token) = self.tokens.remove(&displaced.pane_ref()) {
                        token.cancel();
                    }
                    debug!(replaced = %displaced.id(), "closed stale tab of the saved document");
                }
                info!(from = %tab, to = %assignment.identifier, "saved");
                if let Some(collision) = assignment.collision {
                    warn!(%collision, "identifier collision");
                    self.emit(WorkbenchUpdate::Warning(collision.to_string()));
                }
                self.emit(WorkbenchUpdate::PaneLoaded {
                    tab: assignment.identifier,
                });
                self.emit_tabs();
            }
            Err(error) => {
                warn!(%tab, %error, "could not install saved content");
                self.emit(WorkbenchUpdate::Error(error.to_string()));
            }
        }
        self.refresh_collections();
    }

    fn on_run_message(&mut self, pane: PaneRef, session: SessionId, message: ServerMessage) {
        let now = self.clock.now();
        let Some(tab) = self.tab_id(pane) else {
            debug!(%pane, "ignoring run message of a closed pane");
            return;
        };
        let Some(current) = self
            .workspace
            .pane_mut(pane)
            .and_then(Pane::run_view_mut)
            .and_then(|run| run.session_mut())
            .filter(|current| current.id() == session)
        else {
            debug!(%tab, %session, "ignoring run message of a replaced session");
            return;
        };

        let transition = current.apply(message, now);
        let progress = WorkbenchUpdate::RunProgress {
            tab: tab.clone(),
            status: current.status_text().to_owned(),
            percent: current.percent(),
            running: current.is_running(),
        };
        let mut updates = Vec::new();
        match transition {
            Transition::Started => {
                info!(%tab, total = current.total(), "run started");
                updates.push(progress);
            }
            Transition::Progressed => updates.push(progress),
            Transition::ResultAppended(index) => {
                if let Some(entry) = current.results().get(index) {
                    debug!(%tab, request = entry.request_name(), outcome = ?entry.outcome(), "run result");
                    updates.push(WorkbenchUpdate::RunResultAppended {
                        tab,
                        index,
                        request: entry.request_name().to_owned(),
                        outcome: entry.outcome(),
                    });
                }
            }
            Transition::Finished => {
                let outcome = match current.status() {
                    RunStatus::Finished(outcome) => outcome.clone(),
                    RunStatus::Idle | RunStatus::Started => RunOutcome::Completed,
                };
                info!(%tab, ?outcome, elapsed_ms = current.elapsed(now).num_milliseconds(), "run finished");
                updates.push(progress);
                if let RunOutcome::Failed(reason) = &outcome {
                    warn!(%tab, %reason, "server reported run failure");
                    updates.push(WorkbenchUpdate::Error(format!(
                        "run of {tab} failed: {reason}"
                    )));
                }
                updates.push(WorkbenchUpdate::RunFinished { tab, outcome });
            }
            Transition::Ignored => debug!(%tab, "ignoring message after run finished"),
        }
        for update in updates {
            self.emit(update);
        }
    }

    fn on_run_ended(&mut self, pane: PaneRef, session: SessionId, end: RunEnd) {
        let now = self.clock.now();
        let Some(tab) = self.tab_id(pane) else {
            debug!(%pane, ?end, "run of a closed pane ended");
            return;
        };
        let Some(current) = self
            .workspace
            .pane_mut(pane)
            .and_then(Pane::run_view_mut)
            .and_then(|run| run.session_mut())
            .filter(|current| current.id() == session)
        else {
            return;
        };

        let ended = match end {
            RunEnd::Terminal => false,
            RunEnd::Failed(reason) => current.fail(reason, now),
            RunEnd::Cancelled => current.cancel(now),
        };
        if !ended {
            return;
        }
        if let RunStatus::Finished(outcome) = current.status().clone() {
            if let RunOutcome::Failed(reason) = &outcome {
                warn!(%tab, %reason, "run failed");
                self.emit(WorkbenchUpdate::Error(format!("run of {tab} failed: {reason}")));
            }
            self.emit(WorkbenchUpdate::RunFinished { tab, outcome });
        }
    }
}

fn wrong_view(tab: &Identifier, expected: &str) -> DomainError {
    DomainError::InvalidState(format!("{tab} does not show {expected}"))
}
