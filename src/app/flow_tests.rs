//! Event sequences driven through `handle_event` the way the plugin shim does.

use super::{handle_event, Action, AppState, Event, LoadStatus};
use crate::ui::ListLine;
use crate::{initialize, Config, MatchMode};

const INDEX_BODY: &[u8] = br#"[
    {"category": "Guides", "documents": [
        {"doc_name": "Intro", "doc_path": "static/Guides/Intro/index.html"},
        {"doc_name": "Advanced Setup", "doc_path": "static/Guides/Advanced Setup/index.html"}
    ]},
    {"category": "Reference", "documents": [
        {"doc_name": "HTTP API", "doc_path": "https://api.example.com/docs"}
    ]}
]"#;

fn plugin(server_url: &str) -> AppState {
    initialize(&Config {
        server_url: server_url.to_string(),
        ..Config::default()
    })
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("events never fail")
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn loaded_plugin() -> AppState {
    let mut state = plugin("http://docs.local:5000");
    send(&mut state, Event::PermissionsResult { granted: true });
    send(
        &mut state,
        Event::IndexResponse { status: 200, body: INDEX_BODY.to_vec() },
    );
    state
}

#[test]
fn startup_fetches_index_from_configured_server() {
    let mut state = plugin("http://docs.local:5000/");
    let (_, actions) = send(&mut state, Event::PermissionsResult { granted: true });

    match actions.as_slice() {
        [Action::FetchIndex(request)] => assert_eq!(request.url, "http://docs.local:5000/available"),
        other => panic!("expected a single index fetch, got {other:?}"),
    }
}

#[test]
fn type_and_submit_opens_first_match() {
    let mut state = loaded_plugin();
    type_text(&mut state, "SETUP");

    let (_, actions) = send(&mut state, Event::Submit);
    assert_eq!(
        actions,
        vec![
            Action::OpenDocument {
                url: "http://docs.local:5000/static/Guides/Advanced Setup/index.html".to_string()
            },
            Action::CloseFocus,
        ]
    );
}

#[test]
fn absolute_document_urls_open_verbatim() {
    let mut state = loaded_plugin();
    type_text(&mut state, "api");

    let (_, actions) = send(&mut state, Event::Submit);
    assert_eq!(
        actions.first(),
        Some(&Action::OpenDocument { url: "https://api.example.com/docs".to_string() })
    );
}

#[test]
fn submit_with_no_match_does_nothing() {
    let mut state = loaded_plugin();
    type_text(&mut state, "zzz");

    let (render, actions) = send(&mut state, Event::Submit);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn malformed_first_response_leaves_index_empty() {
    let mut state = plugin("http://docs.local:5000");
    send(&mut state, Event::PermissionsResult { granted: true });

    let (render, actions) = send(
        &mut state,
        Event::IndexResponse { status: 200, body: b"{\"not\": \"an array\"}".to_vec() },
    );

    assert!(render);
    assert!(actions.is_empty());
    assert!(state.index.is_empty());
    assert_eq!(state.load_status, LoadStatus::Failed);

    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.lines.is_empty());
    let empty = vm.empty_state.expect("empty list shows a message");
    assert_eq!(empty.message, "No documents available");
    assert!(!empty.subtitle.to_lowercase().contains("error"));
}

#[test]
fn error_response_keeps_earlier_index() {
    let mut state = loaded_plugin();
    let before = state.index.clone();

    send(
        &mut state,
        Event::IndexResponse { status: 502, body: b"Bad Gateway".to_vec() },
    );

    assert_eq!(state.index, before);
    assert_eq!(state.view.to_index(), before);
}

#[test]
fn last_successful_response_wins() {
    let mut state = loaded_plugin();
    let replacement = br#"[{"category": "News", "documents": [{"doc_name": "Release", "doc_path": "/release"}]}]"#;

    send(
        &mut state,
        Event::IndexResponse { status: 200, body: replacement.to_vec() },
    );

    assert_eq!(state.index.len(), 1);
    assert_eq!(state.top_target(), "/release");
}

#[test]
fn filter_survives_index_replacement() {
    let mut state = plugin("http://docs.local:5000");
    type_text(&mut state, "intro");
    assert_eq!(state.top_target(), "");

    send(
        &mut state,
        Event::IndexResponse { status: 200, body: INDEX_BODY.to_vec() },
    );

    assert_eq!(state.top_target(), "static/Guides/Intro/index.html");
}

#[test]
fn escape_then_escape_closes() {
    let mut state = loaded_plugin();
    type_text(&mut state, "in");

    let (_, first) = send(&mut state, Event::Escape);
    assert!(first.is_empty());
    assert_eq!(state.view.document_count(), 3);

    let (_, second) = send(&mut state, Event::Escape);
    assert_eq!(second, vec![Action::CloseFocus]);
}

#[test]
fn rendered_lines_follow_the_filter() {
    let mut state = loaded_plugin();
    type_text(&mut state, "i");

    let vm = state.compute_viewmodel(30, 100);
    let names: Vec<&str> = vm
        .lines
        .iter()
        .map(|line| match line {
            ListLine::Category { name, .. } | ListLine::Document { name, .. } => name.as_str(),
        })
        .collect();
    assert_eq!(names, vec!["Guides", "Intro", "Reference", "HTTP API"]);
}

#[test]
fn fuzzy_mode_matches_scattered_letters() {
    let mut state = initialize(&Config {
        server_url: "http://docs.local:5000".to_string(),
        match_mode: MatchMode::Fuzzy,
        ..Config::default()
    });
    send(
        &mut state,
        Event::IndexResponse { status: 200, body: INDEX_BODY.to_vec() },
    );
    type_text(&mut state, "advstp");

    assert_eq!(state.top_target(), "static/Guides/Advanced Setup/index.html");
}
