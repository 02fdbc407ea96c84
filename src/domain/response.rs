//! Raw provider responses and their interpretation.

use serde::Serialize;
use serde_json::Value;

use super::label::ClassificationResult;

/// Untrusted text returned by the classification provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawResponse(String);

impl RawResponse {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret this response.
    ///
    /// Strict JSON only: no fence stripping or substring extraction. Anything
    /// that is not a JSON object is [`Interpretation::Malformed`] and keeps the
    /// original text untouched.
    #[must_use]
    pub fn interpret(self) -> Interpretation {
        match serde_json::from_str::<Value>(&self.0) {
            Ok(Value::Object(object)) => {
                let result = ClassificationResult::from_object(&object);
                Interpretation::Classified {
                    result,
                    parsed: Value::Object(object),
                }
            }
            Ok(_) | Err(_) => Interpretation::Malformed { raw: self },
        }
    }
}

impl std::fmt::Display for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of interpreting a [`RawResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    /// The response was a JSON object; labels were resolved from it.
    Classified {
        result: ClassificationResult,
        parsed: Value,
    },
    /// The response was not a JSON object.
    Malformed { raw: RawResponse },
}
