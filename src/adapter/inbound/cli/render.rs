//! Rendering of classification outcomes.
//!
//! Text mode prints three panels (Summary, JSON, Notes) for a success and the
//! raw provider text for a degraded response. Quiet mode keeps only the
//! labels or the raw text. JSON mode prints one result object per submit.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use super::output;
use crate::domain::label::Level;
use crate::domain::view::ViewState;

/// Static usage guidance shown with every result.
pub const TIPS: &str =
    "Provide clear product or service details, quantities, and scope for best accuracy.";

/// Heading shown above raw text when the response is not a JSON object.
pub const INVALID_RESPONSE: &str = "Invalid model response";

/// Render a view state for the terminal or as JSON.
pub fn render(state: &ViewState, request_id: Option<Uuid>) {
    if output::is_json() {
        if let Some(value) = result_json(state, request_id) {
            output::json_output(value);
        }
        return;
    }
    if output::is_quiet() {
        render_quiet(state);
        return;
    }

    match state {
        ViewState::Idle | ViewState::Pending { .. } => {}
        ViewState::Success {
            result,
            parsed,
            provider_error,
        } => {
            output::section("Summary");
            render_request_id(request_id);
            output::note("Top classification");
            for level in Level::ALL {
                output::field(level.as_str(), output::positive(result.get(level)));
            }
            if let Some(message) = provider_error {
                output::warning(&format!("Provider call failed: {message}"));
            }

            output::section("JSON");
            match parsed {
                Some(value) => output::lines(&pretty(value)),
                None => output::note("(no response)"),
            }

            render_notes();
        }
        ViewState::Degraded { raw } => {
            output::section("Summary");
            render_request_id(request_id);
            output::error(INVALID_RESPONSE);
            output::verbatim(raw.as_str());

            output::section("JSON");
            output::note("(raw response shown above)");

            render_notes();
        }
    }
}

fn render_quiet(state: &ViewState) {
    match state {
        ViewState::Idle | ViewState::Pending { .. } => {}
        ViewState::Success {
            result,
            provider_error,
            ..
        } => {
            for level in Level::ALL {
                output::essential(level.as_str(), result.get(level));
            }
            if let Some(message) = provider_error {
                output::warning(&format!("Provider call failed: {message}"));
            }
        }
        ViewState::Degraded { raw } => {
            output::error(INVALID_RESPONSE);
            output::verbatim(raw.as_str());
        }
    }
}

fn render_request_id(request_id: Option<Uuid>) {
    if output::verbosity() == 0 {
        return;
    }
    if let Some(id) = request_id {
        output::field("Request", output::muted(id));
    }
}

fn render_notes() {
    output::section("Notes");
    output::note("Tips");
    output::lines(TIPS);
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Machine-readable result object for a terminal state.
#[must_use]
pub fn result_json(state: &ViewState, request_id: Option<Uuid>) -> Option<Value> {
    let request_id = request_id.map(|id| id.to_string());
    let timestamp = Utc::now().to_rfc3339();

    match state {
        ViewState::Idle | ViewState::Pending { .. } => None,
        ViewState::Success {
            result,
            parsed,
            provider_error,
        } => Some(json!({
            "command": "classify",
            "status": state.name(),
            "request_id": request_id,
            "timestamp": timestamp,
            "l1": result.l1,
            "l2": result.l2,
            "l3": result.l3,
            "parsed": parsed,
            "provider_error": provider_error,
            "tips": TIPS,
        })),
        ViewState::Degraded { raw } => Some(json!({
            "command": "classify",
            "status": state.name(),
            "request_id": request_id,
            "timestamp": timestamp,
            "error": INVALID_RESPONSE,
            "raw": raw.as_str(),
            "tips": TIPS,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::ClassificationRequest;
    use crate::domain::response::RawResponse;

    #[test]
    fn success_json_carries_labels_and_parsed() {
        let state = ViewState::from_interpretation(
            RawResponse::new(r#"{"L1":"Facilities","L2":"Furniture","L3":"Office Chairs"}"#)
                .interpret(),
        );
        let id = Uuid::new_v4();
        let value = result_json(&state, Some(id)).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["l1"], "Facilities");
        assert_eq!(value["l2"], "Furniture");
        assert_eq!(value["l3"], "Office Chairs");
        assert_eq!(value["parsed"]["L3"], "Office Chairs");
        assert_eq!(value["request_id"], id.to_string());
        assert!(value["provider_error"].is_null());
    }

    #[test]
    fn degraded_json_keeps_raw_text() {
        let raw = "not json at all\n  with trailing space ";
        let state = ViewState::from_interpretation(RawResponse::new(raw).interpret());
        let value = result_json(&state, None).unwrap();

        assert_eq!(value["status"], "degraded");
        assert_eq!(value["raw"], raw);
        assert_eq!(value["error"], INVALID_RESPONSE);
        assert!(value.get("l1").is_none());
    }

    #[test]
    fn provider_failure_json_reports_error() {
        let state = ViewState::provider_failed("timed out");
        let value = result_json(&state, None).unwrap();
        assert_eq!(value["l1"], "Unknown");
        assert_eq!(value["provider_error"], "timed out");
        assert!(value["parsed"].is_null());
    }

    #[test]
    fn non_terminal_states_have_no_result() {
        assert!(result_json(&ViewState::Idle, None).is_none());
        let request = ClassificationRequest::try_new("x", None).unwrap();
        assert!(result_json(&ViewState::Pending { request }, None).is_none());
    }
}
