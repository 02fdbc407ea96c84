//! Handler for the `classify` command.

use serde_json::json;

use super::command::ClassifyArgs;
use super::operator::operator;
use super::outcome::CommandOutcome;
use super::{examples, output, render};
use crate::application::session::ClassificationSession;
use crate::domain::error::DomainError;
use crate::domain::request::ClassificationRequest;
use crate::domain::view::ViewState;
use crate::error::Result;
use crate::port::outbound::classifier::Classifier;

/// Execute `classify`.
pub async fn execute(args: &ClassifyArgs) -> Result<CommandOutcome> {
    let description = match args.example {
        Some(index) => examples::get(index)?.to_string(),
        None => args.description.clone().unwrap_or_default(),
    };
    let supplier = args.supplier.as_deref();

    // Blank input is rejected before credentials are even looked up.
    if let Err(e) = ClassificationRequest::try_new(description.as_str(), None) {
        report_rejected(&e);
        return Ok(CommandOutcome::Rejected);
    }

    let classifier = operator()?.classifier()?;
    let mut session = ClassificationSession::new(classifier);

    if !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section("Input");
        output::field("Description", &description);
        output::field("Supplier", supplier.unwrap_or("-"));
    }

    submit(&mut session, &description, supplier).await
}

/// Submit one request through a session, with spinner and rendering.
pub async fn submit<C: Classifier>(
    session: &mut ClassificationSession<C>,
    description: &str,
    supplier: Option<&str>,
) -> Result<CommandOutcome> {
    if let Err(e) = session.begin(description, supplier) {
        report_rejected(&e);
        return Ok(CommandOutcome::Rejected);
    }

    let request_id = session.request_id();
    let pb = output::spinner("Classifying...");
    let state = session.resolve().await;
    match state {
        ViewState::Degraded { .. } => output::spinner_fail(&pb, "Classification returned text"),
        ViewState::Success {
            provider_error: Some(_),
            ..
        } => output::spinner_fail(&pb, "Provider unavailable"),
        _ => output::spinner_success(&pb, "Classified"),
    }

    let outcome = CommandOutcome::from_state(state);
    render::render(state, request_id);
    Ok(outcome)
}

fn report_rejected(err: &DomainError) {
    if output::is_json() {
        output::json_output(json!({
            "command": "classify",
            "status": "rejected",
            "message": err.to_string(),
        }));
    } else {
        output::warning(&err.to_string());
    }
}
