//! PO Classifier - purchase order categorization into L1/L2/L3 labels.
//!
//! A free-text PO description (plus an optional supplier) is sent to an LLM
//! provider through a classification gateway. The provider's reply is
//! untrusted text: it is parsed strictly as JSON and the three category
//! levels are resolved with a case-insensitive key fallback, or the raw text
//! is surfaced verbatim when it is not a JSON object.
//!
//! # Modules
//!
//! - [`domain`] - Requests, label resolution, response interpretation, view state
//! - [`port`] - `Classifier` and `Llm` traits, the CLI-facing `OperatorPort`
//! - [`adapter`] - Anthropic/OpenAI clients, LLM classifier, CLI front-end
//! - [`application`] - `ClassificationSession`, the caller-side state machine
//! - [`infrastructure`] - Configuration, logging, and adapter wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use po_classifier::domain::response::{Interpretation, RawResponse};
//!
//! let raw = RawResponse::new(r#"{"l1":"IT","L2":"Software"}"#);
//! match raw.interpret() {
//!     Interpretation::Classified { result, .. } => {
//!         assert_eq!(result.l1, "IT");
//!         assert_eq!(result.l2, "Software");
//!         assert_eq!(result.l3, "Unknown");
//!     }
//!     Interpretation::Malformed { .. } => unreachable!(),
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
