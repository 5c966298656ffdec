//! In-memory ports shared by the workbench tests.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use relay_application::{
    ChannelConnector, ChannelError, Clock, FetchError, FragmentSource, PushChannel, Workbench,
    WorkbenchUpdate,
};
use relay_domain::{ClientMessage, LoadRequest};
use tokio::sync::mpsc;

/// Serves canned fragments by path.
#[derive(Default)]
pub struct FakeSource {
    pages: Mutex<HashMap<String, Result<String, FetchError>>>,
    held: Mutex<HashSet<String>>,
    calls: Mutex<Vec<LoadRequest>>,
}

impl FakeSource {
    pub fn serve(&self, path: &str, html: &str) {
        self.pages
            .lock()
            .expect("Lock poisoned")
            .insert(path.to_owned(), Ok(html.to_owned()));
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.pages.lock().expect("Lock poisoned").insert(
            path.to_owned(),
            Err(FetchError::Status {
                path: path.to_owned(),
                status,
            }),
        );
    }

    /// Fetches of `path` never complete.
    pub fn hold(&self, path: &str) {
        self.held.lock().expect("Lock poisoned").insert(path.to_owned());
    }

    pub fn calls(&self) -> Vec<LoadRequest> {
        self.calls.lock().expect("Lock poisoned").clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|c| c.path == path).count()
    }
}

#[async_trait]
impl FragmentSource for FakeSource {
    async fn fetch(&self, request: &LoadRequest) -> Result<String, FetchError> {
        self.calls.lock().expect("Lock poisoned").push(request.clone());
        let held = self.held.lock().expect("Lock poisoned").contains(&request.path);
        if held {
            return std::future::pending().await;
        }
        self.pages
            .lock()
            .expect("Lock poisoned")
            .get(&request.path)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    path: request.path.clone(),
                    status: 404,
                })
            })
    }
}

/// What the fake channels observed.
#[derive(Default)]
pub struct ChannelRecorder {
    pub sent: Mutex<Vec<ClientMessage>>,
    pub closes: AtomicUsize,
}

impl ChannelRecorder {
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ClientMessage> {
        self.sent.lock().expect("Lock poisoned").clone()
    }
}

type Frame = Result<Option<String>, ChannelError>;

struct ScriptedChannel {
    frames: VecDeque<Frame>,
    recorder: Arc<ChannelRecorder>,
}

#[async_trait]
impl PushChannel for ScriptedChannel {
    async fn send(&mut self, message: &ClientMessage) -> Result<(), ChannelError> {
        self.recorder.sent.lock().expect("Lock poisoned").push(message.clone());
        Ok(())
    }

    async fn recv(&mut self) -> Result<Option<String>, ChannelError> {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None => std::future::pending().await,
        }
    }

    async fn close(&mut self) -> Result<(), ChannelError> {
        self.recorder.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Hands out one scripted channel per connect; refuses once scripts run out.
/// A channel whose script is exhausted stays open and silent.
#[derive(Default)]
pub struct FakeConnector {
    scripts: Mutex<VecDeque<Vec<Frame>>>,
    pub recorder: Arc<ChannelRecorder>,
}

impl FakeConnector {
    pub fn script(&self, frames: impl IntoIterator<Item = String>) {
        self.script_frames(frames.into_iter().map(|f| Ok(Some(f))).collect());
    }

    pub fn script_frames(&self, frames: Vec<Frame>) {
        self.scripts.lock().expect("Lock poisoned").push_back(frames);
    }
}

#[async_trait]
impl ChannelConnector for FakeConnector {
    async fn connect(&self) -> Result<Box<dyn PushChannel>, ChannelError> {
        let frames = self
            .scripts
            .lock()
            .expect("Lock poisoned")
            .pop_front()
            .ok_or_else(|| ChannelError::Connect("connection refused".to_owned()))?;
        Ok(Box::new(ScriptedChannel {
            frames: frames.into(),
            recorder: Arc::clone(&self.recorder),
        }))
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

pub struct Harness {
    pub workbench: Workbench<FakeSource, FakeConnector>,
    pub updates: mpsc::UnboundedReceiver<WorkbenchUpdate>,
    pub source: Arc<FakeSource>,
    pub connector: Arc<FakeConnector>,
}

impl Harness {
    pub fn new() -> Self {
        let source = Arc::new(FakeSource::default());
        let connector = Arc::new(FakeConnector::default());
        let (workbench, updates) =
            Workbench::new(Arc::clone(&source), Arc::clone(&connector), Arc::new(FixedClock));
        Self {
            workbench,
            updates,
            source,
            connector,
        }
    }

    pub fn drain(&mut self) -> Vec<WorkbenchUpdate> {
        let mut out = Vec::new();
        while let Ok(update) = self.updates.try_recv() {
            out.push(update);
        }
        out
    }
}

pub fn status(status: &str, done: u64, total: u64) -> String {
    format!(
        r#"{{"type":"collection-status","data":{{"status":"{status}","done":{done},"total":{total}}}}}"#
    )
}

pub fn result(request: &str, code: u16) -> String {
    format!(
        r#"{{"type":"request-result","data":{{"request":"{request}","result":{{"request_method":"GET","request_url":"http://localhost/{code}","request_headers":"accept: */*","request_payload":null,"response_status":{code},"response_headers":"content-length: 0","response_payload":null}}}}}}"#
    )
}
