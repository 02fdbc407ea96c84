//! Built-in example descriptions.

use serde_json::json;
use tabled::{Table, Tabled};

use super::output;
use crate::error::{ConfigError, Result};

/// Quick-start PO descriptions offered by `examples` and the interactive picker.
pub const EXAMPLES: [&str; 4] = [
    "Industrial valves for plant maintenance",
    "Annual software subscription for finance team",
    "Temporary staffing for warehouse operations",
    "Office chairs and standing desks",
];

#[derive(Tabled)]
struct ExampleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "PO Description")]
    description: &'static str,
}

/// Look up an example by its 1-based index.
///
/// # Errors
///
/// Returns an error if the index is out of range.
pub fn get(index: usize) -> Result<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| EXAMPLES.get(i))
        .copied()
        .ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "example",
                reason: format!("expected 1-{}, got {index}", EXAMPLES.len()),
            }
            .into()
        })
}

/// List available examples.
pub fn list() -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "examples",
            "examples": EXAMPLES
                .iter()
                .enumerate()
                .map(|(i, d)| json!({ "index": i + 1, "description": d }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Example inputs");

    let rows = EXAMPLES
        .iter()
        .enumerate()
        .map(|(i, description)| ExampleRow {
            index: i + 1,
            description,
        })
        .collect::<Vec<_>>();
    output::lines(&Table::new(rows).to_string());

    println!();
    output::hint("po-classifier classify --example 4");
    Ok(())
}
