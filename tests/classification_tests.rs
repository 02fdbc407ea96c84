//! Classification flow tests through the public library API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use po_classifier::application::session::ClassificationSession;
use po_classifier::domain::error::DomainError;
use po_classifier::domain::label::{resolve_field, Level, UNKNOWN};
use po_classifier::domain::request::ClassificationRequest;
use po_classifier::domain::response::{Interpretation, RawResponse};
use po_classifier::domain::view::ViewState;
use po_classifier::error::{Error, Result};
use po_classifier::port::outbound::classifier::Classifier;

/// Replies with a fixed text and counts calls.
struct Fixed {
    reply: std::result::Result<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl Fixed {
    fn ok(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            calls: AtomicUsize::new(0),
        })
    }

    fn err(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn classify(&self, _request: &ClassificationRequest) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(RawResponse::new)
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

fn labels(state: &ViewState) -> [&str; 3] {
    match state {
        ViewState::Success { result, .. } => {
            [result.l1.as_str(), result.l2.as_str(), result.l3.as_str()]
        }
        other => panic!("expected success, got {}", other.name()),
    }
}

#[test]
fn uppercase_keys_win_over_lowercase() {
    let object = json!({"L1": "Facilities", "l1": "IT"});
    let object = object.as_object().unwrap();
    assert_eq!(resolve_field(object, Level::L1.candidates()), "Facilities");
    assert_eq!(resolve_field(object, Level::L2.candidates()), UNKNOWN);
}

#[test]
fn full_response_resolves_every_level() {
    let classifier = Fixed::ok(r#"{"L1":"MRO","L2":"Valves","L3":"Industrial Valves"}"#);
    let mut session = ClassificationSession::new(classifier.clone());

    let state = tokio_test::block_on(
        session.submit("Industrial valves for plant maintenance", Some("Acme")),
    )
    .unwrap();

    assert_eq!(labels(state), ["MRO", "Valves", "Industrial Valves"]);
    assert_eq!(classifier.calls(), 1);
}

#[test]
fn empty_object_is_all_unknown() {
    let mut session = ClassificationSession::new(Fixed::ok("{}"));
    let state = tokio_test::block_on(session.submit("Office chairs", None)).unwrap();
    assert_eq!(labels(state), [UNKNOWN, UNKNOWN, UNKNOWN]);
}

#[test]
fn non_object_json_degrades() {
    for raw in ["[1,2,3]", "\"IT\"", "42", "null"] {
        match RawResponse::new(raw).interpret() {
            Interpretation::Malformed { raw: kept } => assert_eq!(kept.as_str(), raw),
            Interpretation::Classified { .. } => panic!("{raw} should not classify"),
        }
    }
}

#[test]
fn fenced_json_is_not_unwrapped() {
    let raw = "```json\n{\"L1\":\"IT\"}\n```";
    let mut session = ClassificationSession::new(Fixed::ok(raw));
    let state = tokio_test::block_on(session.submit("Laptops", None)).unwrap();

    match state {
        ViewState::Degraded { raw: kept } => assert_eq!(kept.as_str(), raw),
        other => panic!("expected degraded, got {}", other.name()),
    }
}

#[test]
fn blank_input_never_reaches_the_classifier() {
    let classifier = Fixed::ok("{}");
    let mut session = ClassificationSession::new(classifier.clone());

    for blank in ["", "   ", "\n\t"] {
        let err = tokio_test::block_on(session.submit(blank, Some("Acme"))).unwrap_err();
        assert_eq!(err, DomainError::EmptyInput);
    }

    assert_eq!(classifier.calls(), 0);
    assert_eq!(session.state(), &ViewState::Idle);
    assert!(session.request_id().is_none());
}

#[test]
fn rejected_submit_keeps_previous_result() {
    let mut session = ClassificationSession::new(Fixed::ok(r#"{"L1":"IT"}"#));
    tokio_test::block_on(session.submit("Laptops", None)).unwrap();
    let before = session.state().clone();

    assert!(tokio_test::block_on(session.submit("  ", None)).is_err());
    assert_eq!(session.state(), &before);
}

#[test]
fn provider_failure_yields_unknown_with_note() {
    let mut session = ClassificationSession::new(Fixed::err("connection refused"));
    let state = tokio_test::block_on(session.submit("Office chairs", None)).unwrap();

    assert_eq!(labels(state), [UNKNOWN, UNKNOWN, UNKNOWN]);
    match state {
        ViewState::Success {
            parsed,
            provider_error,
            ..
        } => {
            assert!(parsed.is_none());
            assert!(provider_error
                .as_deref()
                .unwrap()
                .contains("connection refused"));
        }
        other => panic!("expected success, got {}", other.name()),
    }
}

#[test]
fn each_submit_gets_a_fresh_request_id() {
    let mut session = ClassificationSession::new(Fixed::ok("{}"));

    tokio_test::block_on(session.submit("first", None)).unwrap();
    let first = session.request_id().unwrap();
    tokio_test::block_on(session.submit("second", None)).unwrap();
    let second = session.request_id().unwrap();

    assert_ne!(first, second);
}
