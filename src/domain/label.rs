//! Category labels resolved from a provider response.
//!
//! Each level is looked up through an ordered list of candidate keys: the
//! first candidate holding a usable value wins, otherwise the level falls
//! back to [`UNKNOWN`].

use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder shown for any level the provider did not supply.
pub const UNKNOWN: &str = "Unknown";

/// Hierarchical category level, broad (L1) to specific (L3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    L1,
    L2,
    L3,
}

impl Level {
    /// All levels in display order.
    pub const ALL: [Level; 3] = [Level::L1, Level::L2, Level::L3];

    /// Candidate keys for this level, in preference order.
    #[must_use]
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Level::L1 => &["L1", "l1"],
            Level::L2 => &["L2", "l2"],
            Level::L3 => &["L3", "l3"],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three resolved labels for one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub l1: String,
    pub l2: String,
    pub l3: String,
}

impl ClassificationResult {
    /// Resolve all three levels from a parsed JSON object.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            l1: resolve_field(object, Level::L1.candidates()),
            l2: resolve_field(object, Level::L2.candidates()),
            l3: resolve_field(object, Level::L3.candidates()),
        }
    }

    /// A result with every level set to [`UNKNOWN`].
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            l1: UNKNOWN.to_string(),
            l2: UNKNOWN.to_string(),
            l3: UNKNOWN.to_string(),
        }
    }

    /// Label for a given level.
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::L1 => &self.l1,
            Level::L2 => &self.l2,
            Level::L3 => &self.l3,
        }
    }
}

/// Resolve a field by checking `candidates` in order; first usable value wins.
///
/// Falls back to [`UNKNOWN`] when no candidate matches.
#[must_use]
pub fn resolve_field(object: &Map<String, Value>, candidates: &[&str]) -> String {
    candidates
        .iter()
        .find_map(|key| object.get(*key).and_then(label_text))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Text for a JSON value that can stand as a label.
///
/// Zero, `false`, `null`, `""`, arrays and objects are not labels.
fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if !is_zero(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|v| v == 0.0)
}
