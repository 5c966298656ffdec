//! Headless workbench driver.
//!
//! Issues the same commands a GUI would and renders the update stream as
//! text, one line per update worth showing.

use std::io::Write;
use std::sync::Arc;

use relay_application::{
    ChannelConnector, Clock, FragmentSource, Workbench, WorkbenchCommand, WorkbenchUpdate,
};
use relay_domain::{ResultOutcome, RunOutcome};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::CliError;

/// Summary of a finished collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Requests with a status below 400.
    pub passed: usize,
    /// Requests with a status of 400 or above.
    pub failed: usize,
}

impl RunReport {
    /// Whether the run completed and every request passed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed) && self.failed == 0
    }
}

/// Renders an update as a line of text, or `None` for updates that only
/// matter to a GUI.
#[must_use]
pub fn render(update: &WorkbenchUpdate) -> Option<String> {
    match update {
        WorkbenchUpdate::RunProgress {
            status, percent, ..
        } if !status.is_empty() => Some(format!("[{percent:>3}%] {status}")),
        WorkbenchUpdate::RunResultAppended {
            index,
            request,
            outcome,
            ..
        } => {
            let mark = match outcome {
                ResultOutcome::Success => "PASS",
                ResultOutcome::Failure => "FAIL",
            };
            Some(format!("{:>4}. {mark} {request}", index + 1))
        }
        WorkbenchUpdate::RunFinished { outcome, .. } => Some(match outcome {
            RunOutcome::Completed => "run completed".to_owned(),
            RunOutcome::Failed(reason) => format!("run failed: {reason}"),
            RunOutcome::Cancelled => "run cancelled".to_owned(),
        }),
        WorkbenchUpdate::Warning(message) => Some(format!("warning: {message}")),
        WorkbenchUpdate::Error(message) => Some(format!("error: {message}")),
        _ => None,
    }
}

/// A workbench plus the receiving end of its updates.
pub struct Headless<S: ?Sized, C: ?Sized> {
    workbench: Workbench<S, C>,
    updates: mpsc::UnboundedReceiver<WorkbenchUpdate>,
}

impl<S, C> Headless<S, C>
where
    S: FragmentSource + ?Sized + 'static,
    C: ChannelConnector + ?Sized + 'static,
{
    /// Creates a driver over the given ports.
    pub fn new(source: Arc<S>, connector: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        let (workbench, updates) = Workbench::new(source, connector, clock);
        Self { workbench, updates }
    }

    fn drain(&mut self) -> Vec<WorkbenchUpdate> {
        let mut out = Vec::new();
        while let Ok(update) = self.updates.try_recv() {
            out.push(update);
        }
        out
    }

    /// Fetches the collection list fragment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Server` if the list could not be fetched.
    pub async fn collections(&mut self) -> Result<String, CliError> {
        self.workbench.dispatch(WorkbenchCommand::RefreshCollections);
        self.workbench.settle().await;

        let mut failure = None;
        for update in self.drain() {
            match update {
                WorkbenchUpdate::CollectionsLoaded { html, .. } => return Ok(html),
                WorkbenchUpdate::Error(message) => failure = Some(message),
                _ => {}
            }
        }
        Err(CliError::Server(
            failure.unwrap_or_else(|| "no collection list received".to_owned()),
        ))
    }

    /// Opens a run view of `collection`, starts it and writes progress and
    /// results to `out` until it ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the run view cannot be loaded, the run cannot be
    /// started or `out` cannot be written.
    pub async fn run_collection(
        &mut self,
        collection: &str,
        out: &mut impl Write,
    ) -> Result<RunReport, CliError> {
        self.workbench.dispatch(WorkbenchCommand::RunCollection {
            collection: collection.to_owned(),
        });
        self.workbench.settle().await;
        for update in self.drain() {
            match update {
                WorkbenchUpdate::PaneFailed { message, .. } | WorkbenchUpdate::Error(message) => {
                    return Err(CliError::Server(message));
                }
                other => Self::write(out, &other)?,
            }
        }

        let tab = self
            .workbench
            .workspace()
            .active_tab()
            .map(|t| t.id().clone())
            .ok_or_else(|| CliError::Server(format!("no run view opened for {collection}")))?;
        debug!(%tab, "starting run");
        self.workbench.handle(WorkbenchCommand::StartRun { tab })?;

        let mut passed = 0;
        let mut failed = 0;
        let mut outcome = None;
        while self.workbench.process_next().await {
            for update in self.drain() {
                Self::write(out, &update)?;
                match update {
                    WorkbenchUpdate::RunResultAppended {
                        outcome: ResultOutcome::Success,
                        ..
                    } => passed += 1,
                    WorkbenchUpdate::RunResultAppended { .. } => failed += 1,
                    WorkbenchUpdate::RunFinished { outcome: ended, .. } => outcome = Some(ended),
                    _ => {}
                }
            }
        }
        out.flush()?;

        let outcome =
            outcome.ok_or_else(|| CliError::Server("run ended without a result".to_owned()))?;
        Ok(RunReport {
            outcome,
            passed,
            failed,
        })
    }

    fn write(out: &mut impl Write, update: &WorkbenchUpdate) -> Result<(), CliError> {
        if let Some(line) = render(update) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Cancels anything still outstanding.
    pub fn shutdown(&self) {
        self.workbench.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use relay_domain::Identifier;

    #[test]
    fn test_render_lines() {
        let tab = Identifier::new("collection-Demo-run-1");
        assert_eq!(
            render(&WorkbenchUpdate::RunProgress {
                tab: tab.clone(),
                status: "in-progress".to_owned(),
                percent: 75,
                running: true,
            }),
            Some("[ 75%] in-progress".to_owned())
        );
        assert_eq!(
            render(&WorkbenchUpdate::RunResultAppended {
                tab: tab.clone(),
                index: 1,
                request: "Req B".to_owned(),
                outcome: ResultOutcome::Failure,
            }),
            Some("   2. FAIL Req B".to_owned())
        );
        assert_eq!(
            render(&WorkbenchUpdate::RunProgress {
                tab: tab.clone(),
                status: String::new(),
                percent: 0,
                running: false,
            }),
            None
        );
        assert_eq!(render(&WorkbenchUpdate::PaneLoaded { tab }), None);
    }

    #[test]
    fn test_report_success() {
        let report = RunReport {
            outcome: RunOutcome::Completed,
            passed: 2,
            failed: 0,
        };
        assert!(report.is_success());
        assert!(
            !RunReport {
                failed: 1,
                ..report
            }
            .is_success()
        );
    }
}
