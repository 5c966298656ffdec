//! Workbench scenarios against in-memory ports.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{Harness, result, status};
use pretty_assertions::assert_eq;
use relay_application::{ApplicationError, WorkbenchCommand, WorkbenchUpdate};
use relay_domain::{
    ClientMessage, CollectionFormEdit, CollectionRunSession, DomainError, FetchMethod, Identifier,
    Pane, PaneView, RequestFormEdit, ResultOutcome, RowEdit, RunOutcome, RunStatus, RunView, Tab,
};

fn active(h: &Harness) -> Tab {
    h.workbench
        .workspace()
        .active_tab()
        .cloned()
        .expect("a tab should be active")
}

fn session(h: &Harness, tab: &Tab) -> CollectionRunSession {
    h.workbench
        .workspace()
        .pane(tab.pane())
        .and_then(Pane::run_view)
        .and_then(RunView::session)
        .cloned()
        .expect("the tab should host a run session")
}

fn view(h: &Harness, tab: &Tab) -> PaneView {
    h.workbench
        .workspace()
        .pane(tab.pane())
        .map(Pane::view)
        .cloned()
        .expect("the pane should exist")
}

async fn open_run(h: &mut Harness, collection: &str) -> Tab {
    h.source.serve("collection-run", "<div class=\"collection-run\"></div>");
    h.workbench.dispatch(WorkbenchCommand::RunCollection {
        collection: collection.to_owned(),
    });
    h.workbench.settle().await;
    active(h)
}

#[tokio::test]
async fn demo_collection_run_end_to_end() {
    let mut h = Harness::new();
    h.connector.script([
        status("started", 0, 2),
        result("Req A", 200),
        result("Req B", 500),
        status("finished", 2, 2),
    ]);

    let tab = open_run(&mut h, "Demo").await;
    assert!(tab.id().as_str().starts_with("collection-Demo-run-"));
    assert_eq!(tab.title(), "Run Demo");

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;

    let run = session(&h, &tab);
    assert_eq!(run.status(), &RunStatus::Finished(RunOutcome::Completed));
    assert_eq!(run.percent(), 100);
    let results: Vec<_> = run
        .results()
        .iter()
        .map(|r| (r.request_name().to_owned(), r.outcome()))
        .collect();
    assert_eq!(
        results,
        vec![
            ("Req A".to_owned(), ResultOutcome::Success),
            ("Req B".to_owned(), ResultOutcome::Failure),
        ]
    );
    assert_eq!(
        h.connector.recorder.sent(),
        vec![ClientMessage::CollectionRun {
            collection: "Demo".to_owned()
        }]
    );
    assert_eq!(h.connector.recorder.closes(), 1);

    let updates = h.drain();
    assert!(updates.contains(&WorkbenchUpdate::RunFinished {
        tab: tab.id().clone(),
        outcome: RunOutcome::Completed,
    }));
    assert!(updates.contains(&WorkbenchUpdate::RunProgress {
        tab: tab.id().clone(),
        status: "started".to_owned(),
        percent: 0,
        running: true,
    }));
}

#[tokio::test]
async fn inspecting_a_result_only_fetches_the_template() {
    let mut h = Harness::new();
    h.connector.script([
        status("started", 0, 1),
        result("Req B", 404),
        status("finished", 1, 1),
    ]);
    let run_tab = open_run(&mut h, "Demo").await;
    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: run_tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;

    h.source.serve("request-run-template/404", "<form class=\"result\"></form>");
    let before = h.source.calls().len();
    h.workbench
        .handle(WorkbenchCommand::InspectResult {
            tab: run_tab.id().clone(),
            index: 0,
        })
        .expect("result exists");
    h.workbench.settle().await;

    let calls = h.source.calls();
    assert_eq!(calls.len(), before + 1);
    assert_eq!(calls[before].path, "request-run-template/404");
    assert_eq!(calls[before].method, FetchMethod::Read);

    let tab = active(&h);
    assert_eq!(tab.title(), "Req B results");
    assert!(tab.id().as_str().starts_with("request-Demo__Req_20B-run-"));
    let PaneView::Result(result) = view(&h, &tab) else {
        panic!("inspector should show a result view");
    };
    assert_eq!(result.response_status, 404);
    assert_eq!(result.request_url, "http://localhost/404");
    assert_eq!(result.response_payload, "");
}

#[tokio::test]
async fn inspect_rejects_unknown_index() {
    let mut h = Harness::new();
    let tab = open_run(&mut h, "Demo").await;
    let error = h
        .workbench
        .handle(WorkbenchCommand::InspectResult {
            tab: tab.id().clone(),
            index: 3,
        })
        .expect_err("no session yet");
    assert!(matches!(
        error,
        ApplicationError::Domain(DomainError::InvalidState(_))
    ));
}

#[tokio::test]
async fn opening_an_open_document_only_activates_it() {
    let mut h = Harness::new();
    h.source.serve("collection-form", "<form></form>");
    let settings = WorkbenchCommand::OpenCollectionSettings {
        collection: "/work/api".to_owned(),
    };

    h.workbench.dispatch(settings.clone());
    h.workbench.dispatch(WorkbenchCommand::NewCollection);
    h.workbench.settle().await;
    h.workbench.dispatch(settings);
    h.workbench.settle().await;

    assert_eq!(h.workbench.workspace().len(), 2);
    assert_eq!(h.source.calls_to("collection-form"), 2);
    assert_eq!(active(&h).id(), &Identifier::new("collection-_2Fwork_2Fapi"));
    assert_eq!(active(&h).title(), "api");
}

#[tokio::test]
async fn colliding_names_get_distinct_tabs() {
    let mut h = Harness::new();
    h.source.serve("collection-form", "<form></form>");
    h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
        collection: "a.b".to_owned(),
    });
    h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
        collection: "a*b".to_owned(),
    });
    h.workbench.settle().await;

    let ids: Vec<_> = h
        .workbench
        .workspace()
        .tabs()
        .iter()
        .map(|t| t.id().to_string())
        .collect();
    assert_eq!(ids, vec!["collection-a_b", "collection-a_b-2"]);
    assert!(
        h.drain()
            .iter()
            .any(|u| matches!(u, WorkbenchUpdate::Warning(w) if w.contains("collision")))
    );
}

#[tokio::test]
async fn failed_load_is_retryable() {
    let mut h = Harness::new();
    h.source.fail("collection-form", 500);
    h.workbench.dispatch(WorkbenchCommand::NewCollection);
    h.workbench.settle().await;

    let tab = active(&h);
    let pane = h.workbench.workspace().pane(tab.pane()).expect("pane");
    assert!(pane.content().is_failed());
    assert!(h.drain().iter().any(|u| matches!(
        u,
        WorkbenchUpdate::PaneFailed { tab: id, .. } if id == tab.id()
    )));
    // no automatic retry
    assert_eq!(h.source.calls_to("collection-form"), 1);

    h.source.serve("collection-form", "<form></form>");
    h.workbench
        .handle(WorkbenchCommand::Retry { tab: tab.id().clone() })
        .expect("failed pane is retryable");
    h.workbench.settle().await;

    let pane = h.workbench.workspace().pane(tab.pane()).expect("pane");
    assert_eq!(pane.content().html(), Some("<form></form>"));
    assert!(matches!(pane.view(), PaneView::CollectionForm(_)));
}

#[tokio::test]
async fn closing_before_load_discards_the_completion() {
    let mut h = Harness::new();
    h.source.hold("collection-form");
    h.workbench.dispatch(WorkbenchCommand::NewCollection);
    let tab = active(&h);

    h.workbench
        .handle(WorkbenchCommand::CloseTab { tab: tab.id().clone() })
        .expect("tab is open");
    h.workbench.settle().await;

    assert!(h.workbench.workspace().is_empty());
    assert_eq!(h.workbench.in_flight(), 0);
    assert!(
        !h.drain()
            .iter()
            .any(|u| matches!(u, WorkbenchUpdate::PaneLoaded { .. } | WorkbenchUpdate::PaneFailed { .. }))
    );
}

#[tokio::test]
async fn close_falls_back_to_first_tab() {
    let mut h = Harness::new();
    h.source.serve("collection-form", "<form></form>");
    for collection in ["a", "b", "c"] {
        h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
            collection: collection.to_owned(),
        });
    }
    h.workbench.settle().await;

    h.workbench
        .handle(WorkbenchCommand::CloseTab {
            tab: Identifier::new("collection-c"),
        })
        .expect("tab is open");
    assert_eq!(active(&h).id(), &Identifier::new("collection-a"));
}

#[tokio::test]
async fn channel_failure_finishes_the_run_as_failed() {
    let mut h = Harness::new();
    h.connector.script_frames(vec![Ok(Some(status("started", 0, 3))), Ok(None)]);
    let tab = open_run(&mut h, "Demo").await;

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;

    let run = session(&h, &tab);
    assert!(matches!(run.status(), RunStatus::Finished(RunOutcome::Failed(_))));
    assert_eq!(h.connector.recorder.closes(), 1);
    assert!(h.drain().iter().any(|u| matches!(u, WorkbenchUpdate::Error(_))));
}

#[tokio::test]
async fn refused_channel_fails_the_run() {
    let mut h = Harness::new();
    let tab = open_run(&mut h, "Demo").await;

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;

    assert_eq!(
        session(&h, &tab).status(),
        &RunStatus::Finished(RunOutcome::Failed(
            "could not open channel: connection refused".to_owned()
        ))
    );
}

#[tokio::test]
async fn active_run_rejects_restart_and_closing_cancels_it() {
    let mut h = Harness::new();
    h.connector.script([status("started", 0, 5)]);
    let tab = open_run(&mut h, "Demo").await;

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    assert!(h.workbench.process_next().await);
    assert_eq!(session(&h, &tab).status(), &RunStatus::Started);

    let restart = h
        .workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() });
    assert!(matches!(
        restart,
        Err(ApplicationError::Domain(DomainError::InvalidState(_)))
    ));

    h.workbench
        .handle(WorkbenchCommand::CloseTab { tab: tab.id().clone() })
        .expect("tab is open");
    h.workbench.settle().await;

    assert_eq!(h.connector.recorder.closes(), 1);
    assert_eq!(h.connector.recorder.sent().len(), 1);
}

#[tokio::test]
async fn restarting_a_finished_run_clears_results() {
    let mut h = Harness::new();
    h.connector.script([result("Req A", 200), status("finished", 1, 1)]);
    h.connector.script([status("started", 0, 1)]);
    let tab = open_run(&mut h, "Demo").await;

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;
    let first = session(&h, &tab);
    assert_eq!(first.results().len(), 1);

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("finished run can restart");
    assert!(h.workbench.process_next().await);

    let second = session(&h, &tab);
    assert_ne!(first.id(), second.id());
    assert!(second.results().is_empty());
    assert_eq!(second.status(), &RunStatus::Started);

    h.workbench.shutdown();
    h.workbench.settle().await;
    assert_eq!(
        session(&h, &tab).status(),
        &RunStatus::Finished(RunOutcome::Cancelled)
    );
}

#[tokio::test]
async fn saving_a_new_collection_retargets_the_tab() {
    let mut h = Harness::new();
    h.source.serve("collection-form", "<form class=\"blank\"></form>");
    h.source.serve("collections", "<form class=\"saved\"></form>");
    h.source.serve("request-form", "<form></form>");

    h.workbench.dispatch(WorkbenchCommand::NewRequest {
        collection: "Other".to_owned(),
    });
    h.workbench.dispatch(WorkbenchCommand::NewCollection);
    h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
        collection: "last".to_owned(),
    });
    h.workbench.settle().await;
    let tab = Identifier::new("new-collection-tab");
    h.workbench
        .handle(WorkbenchCommand::ActivateTab { tab: tab.clone() })
        .expect("tab is open");

    for edit in [
        CollectionFormEdit::SetCollection("/work/api".to_owned()),
        CollectionFormEdit::Variables(RowEdit::SetNewRow {
            enabled: true,
            name: "host".to_owned(),
            value: "localhost".to_owned(),
        }),
        CollectionFormEdit::Variables(RowEdit::AddRow),
    ] {
        h.workbench
            .handle(WorkbenchCommand::EditCollectionForm {
                tab: tab.clone(),
                edit,
            })
            .expect("form accepts the edit");
    }
    h.workbench
        .handle(WorkbenchCommand::SaveCollection { tab })
        .expect("form is valid");
    h.workbench.settle().await;

    let save = h
        .source
        .calls()
        .into_iter()
        .find(|c| c.path == "collections" && c.method == FetchMethod::Write)
        .expect("save was posted");
    assert_eq!(
        save.body,
        Some(serde_json::json!({
            "collection": "/work/api",
            "variables": [{"name": "host", "value": "localhost", "enabled": true}]
        }))
    );

    let ids: Vec<_> = h
        .workbench
        .workspace()
        .tabs()
        .iter()
        .map(|t| t.id().to_string())
        .collect();
    assert_eq!(
        ids,
        vec!["new-request-tab", "collection-_2Fwork_2Fapi", "collection-last"]
    );
    let saved = active(&h);
    assert_eq!(saved.id(), &Identifier::new("collection-_2Fwork_2Fapi"));
    assert_eq!(saved.title(), "api");
    let pane = h.workbench.workspace().pane(saved.pane()).expect("pane");
    assert_eq!(pane.content().html(), Some("<form class=\"saved\"></form>"));
    // the list refresh after the save also hit `collections`
    assert!(h.workbench.collections().content().is_loaded());
}

#[tokio::test]
async fn invalid_form_blocks_the_save() {
    let mut h = Harness::new();
    h.source.serve("request-form", "<form></form>");
    h.workbench.dispatch(WorkbenchCommand::NewRequest {
        collection: "Demo".to_owned(),
    });
    h.workbench.settle().await;
    let calls = h.source.calls().len();

    let error = h
        .workbench
        .handle(WorkbenchCommand::SaveRequest {
            tab: Identifier::new("new-request-tab"),
        })
        .expect_err("name and url are missing");
    assert!(matches!(
        error,
        ApplicationError::Domain(DomainError::ValidationFailure {
            field: "request name",
            ..
        })
    ));
    assert_eq!(h.source.calls().len(), calls);
}

#[tokio::test]
async fn failed_save_leaves_the_tab_alone() {
    let mut h = Harness::new();
    h.source.serve("request-form", "<form class=\"draft\"></form>");
    h.source.fail("requests", 500);
    h.workbench.dispatch(WorkbenchCommand::NewRequest {
        collection: "Demo".to_owned(),
    });
    h.workbench.settle().await;

    let tab = Identifier::new("new-request-tab");
    for edit in [
        RequestFormEdit::SetRequest("Ping".to_owned()),
        RequestFormEdit::SetUrl("http://localhost/ping".to_owned()),
    ] {
        h.workbench
            .handle(WorkbenchCommand::EditRequestForm {
                tab: tab.clone(),
                edit,
            })
            .expect("form accepts the edit");
    }
    h.workbench
        .handle(WorkbenchCommand::SaveRequest { tab: tab.clone() })
        .expect("form is valid");
    h.workbench.settle().await;

    let current = active(&h);
    assert_eq!(current.id(), &tab);
    assert_eq!(current.title(), "New Request");
    let pane = h.workbench.workspace().pane(current.pane()).expect("pane");
    assert_eq!(pane.content().html(), Some("<form class=\"draft\"></form>"));
    assert!(h.drain().iter().any(|u| matches!(u, WorkbenchUpdate::Error(_))));
}

#[tokio::test]
async fn editing_the_wrong_view_is_rejected() {
    let mut h = Harness::new();
    let tab = open_run(&mut h, "Demo").await;
    let error = h
        .workbench
        .handle(WorkbenchCommand::EditRequestForm {
            tab: tab.id().clone(),
            edit: RequestFormEdit::SetUrl("x".to_owned()),
        })
        .expect_err("a run view is not a request form");
    assert!(matches!(
        error,
        ApplicationError::Domain(DomainError::InvalidState(_))
    ));
}

#[tokio::test]
async fn collection_expansion_survives_refresh() {
    let mut h = Harness::new();
    h.source.serve("collections", "<ul></ul>");
    h.workbench.dispatch(WorkbenchCommand::ToggleCollection {
        collection: "/work/api".to_owned(),
    });
    h.workbench.dispatch(WorkbenchCommand::RefreshCollections);
    h.workbench.settle().await;

    assert!(h.drain().contains(&WorkbenchUpdate::CollectionsLoaded {
        html: "<ul></ul>".to_owned(),
        expanded: Some("/work/api".to_owned()),
    }));
}

#[tokio::test]
async fn deleting_a_collection_refreshes_the_list() {
    let mut h = Harness::new();
    h.source.serve("collections", "<ul><li>left</li></ul>");
    h.workbench.dispatch(WorkbenchCommand::DeleteCollection {
        collection: "/work/gone".to_owned(),
    });
    h.workbench.settle().await;

    let calls = h.source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, FetchMethod::Destructive);
    assert_eq!(
        calls[0].body,
        Some(serde_json::json!({"collection": "/work/gone"}))
    );
    assert_eq!(
        h.workbench.collections().content().html(),
        Some("<ul><li>left</li></ul>")
    );
}

#[tokio::test]
async fn request_run_tabs_are_fresh_each_time() {
    let mut h = Harness::new();
    h.source.serve("request-run", "<pre>200 OK</pre>");
    for _ in 0..2 {
        h.workbench.dispatch(WorkbenchCommand::RunRequest {
            collection: "Demo".to_owned(),
            request: "Ping".to_owned(),
        });
    }
    h.workbench.settle().await;

    let tabs = h.workbench.workspace().tabs();
    assert_eq!(tabs.len(), 2);
    assert_ne!(tabs[0].id(), tabs[1].id());
    assert!(tabs.iter().all(|t| t.title() == "Run Ping"));
    assert_eq!(h.source.calls_to("request-run"), 2);
}

#[tokio::test]
async fn resaving_an_existing_collection_keeps_its_variables() {
    let mut h = Harness::new();
    h.source.serve(
        "collection-form",
        r#"<form class="collection-form">
            <input class="collection-form-name" value="/work/api">
            <div class="collection-form-variables-row">
                <input type="checkbox" class="collection-form-variables-enabled" checked>
                <input class="collection-form-variables-name" value="host">
                <input class="collection-form-variables-value" value="localhost">
            </div>
            <div class="collection-form-variables-row collection-form-variables-row-prototype">
                <input type="checkbox" class="collection-form-variables-enabled" checked>
                <input class="collection-form-variables-name">
                <input class="collection-form-variables-value">
            </div>
        </form>"#,
    );
    h.source.serve("collections", "<ul></ul>");
    h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
        collection: "/work/api".to_owned(),
    });
    h.workbench.settle().await;

    let tab = active(&h);
    h.workbench
        .handle(WorkbenchCommand::SaveCollection { tab: tab.id().clone() })
        .expect("loaded form is valid");
    h.workbench.settle().await;

    let save = h
        .source
        .calls()
        .into_iter()
        .find(|c| c.path == "collections" && c.method == FetchMethod::Write)
        .expect("save was posted");
    assert_eq!(
        save.body,
        Some(serde_json::json!({
            "collection": "/work/api",
            "variables": [{"name": "host", "value": "localhost", "enabled": true}]
        }))
    );
}

#[tokio::test]
async fn resaving_an_existing_request_keeps_its_definition() {
    let mut h = Harness::new();
    h.source.serve(
        "request-form",
        r#"<form class="request-form">
            <input type="hidden" class="request-form-collection" value="Demo">
            <input class="request-form-name" value="Ping">
            <select class="request-form-method">
                <option value="GET">GET</option>
                <option value="POST" selected>POST</option>
            </select>
            <input class="request-form-url" value="http://x/">
            <div class="request-form-headers-row">
                <input type="checkbox" class="request-form-headers-enabled">
                <input class="request-form-headers-name" value="Accept">
                <input class="request-form-headers-value" value="*/*">
            </div>
            <div class="request-form-headers-row request-form-headers-row-prototype">
                <input type="checkbox" class="request-form-headers-enabled" checked>
                <input class="request-form-headers-name">
                <input class="request-form-headers-value">
            </div>
            <textarea class="request-form-payload">{"ping": 1}</textarea>
        </form>"#,
    );
    h.source.serve("requests", "<form class=\"saved\"></form>");
    h.source.serve("collections", "<ul></ul>");
    h.workbench.dispatch(WorkbenchCommand::OpenRequest {
        collection: "Demo".to_owned(),
        request: "Ping".to_owned(),
    });
    h.workbench.settle().await;

    let tab = active(&h);
    assert_eq!(tab.id(), &Identifier::new("request-Demo__Ping"));
    h.workbench
        .handle(WorkbenchCommand::SaveRequest { tab: tab.id().clone() })
        .expect("loaded form is valid");
    h.workbench.settle().await;

    let save = h
        .source
        .calls()
        .into_iter()
        .find(|c| c.path == "requests")
        .expect("save was posted");
    assert_eq!(
        save.body,
        Some(serde_json::json!({
            "collection": "Demo",
            "request": "Ping",
            "method": "POST",
            "url": "http://x/",
            "headers": [{"name": "Accept", "value": "*/*", "enabled": false}],
            "payload": "{\"ping\": 1}"
        }))
    );
    assert_eq!(h.workbench.workspace().len(), 1);
}

#[tokio::test]
async fn saving_onto_an_open_collection_replaces_its_tab() {
    let mut h = Harness::new();
    h.source.serve("collection-form", "<form></form>");
    h.source.serve("collections", "<ul></ul>");
    h.workbench.dispatch(WorkbenchCommand::OpenCollectionSettings {
        collection: "Demo".to_owned(),
    });
    h.workbench.dispatch(WorkbenchCommand::NewCollection);
    h.workbench.settle().await;

    let draft = active(&h);
    h.workbench
        .handle(WorkbenchCommand::EditCollectionForm {
            tab: draft.id().clone(),
            edit: CollectionFormEdit::SetCollection("Demo".to_owned()),
        })
        .expect("form accepts the edit");
    h.workbench
        .handle(WorkbenchCommand::SaveCollection { tab: draft.id().clone() })
        .expect("form is valid");
    h.workbench.settle().await;

    let tabs: Vec<_> = h
        .workbench
        .workspace()
        .tabs()
        .iter()
        .map(|t| (t.id().to_string(), t.pane()))
        .collect();
    assert_eq!(tabs, vec![("collection-Demo".to_owned(), draft.pane())]);
    assert_eq!(active(&h).pane(), draft.pane());
    assert!(
        !h.drain()
            .iter()
            .any(|u| matches!(u, WorkbenchUpdate::Warning(_)))
    );
}

#[tokio::test]
async fn server_error_frame_fails_the_run() {
    let mut h = Harness::new();
    h.connector.script([
        r#"{"type":"error","data":{"message":"unknown collection"}}"#.to_owned(),
    ]);
    let tab = open_run(&mut h, "Missing").await;

    h.workbench
        .handle(WorkbenchCommand::StartRun { tab: tab.id().clone() })
        .expect("run should start");
    h.workbench.settle().await;

    assert_eq!(
        session(&h, &tab).status(),
        &RunStatus::Finished(RunOutcome::Failed("unknown collection".to_owned()))
    );
    assert_eq!(h.connector.recorder.closes(), 1);
    let updates = h.drain();
    assert!(
        updates
            .iter()
            .any(|u| matches!(u, WorkbenchUpdate::Error(m) if m.contains("unknown collection")))
    );
    assert!(updates.contains(&WorkbenchUpdate::RunFinished {
        tab: tab.id().clone(),
        outcome: RunOutcome::Failed("unknown collection".to_owned()),
    }));
}
