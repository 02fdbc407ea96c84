//! Interactive classification loop.
//!
//! Prompts for a description (optionally prefilled from an example) and a
//! supplier, classifies, renders, and repeats. One session is kept for the
//! whole loop so every submit replaces the previous result.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::operator::operator;
use super::outcome::CommandOutcome;
use super::{classify, examples, output};
use crate::application::session::ClassificationSession;
use crate::error::{ConfigError, Result};

const OWN_INPUT: &str = "Type my own";

/// Run the interactive loop.
pub async fn execute() -> Result<CommandOutcome> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`interactive` needs a terminal; use `classify --json` for scripting"
                .to_string(),
        }
        .into());
    }

    let classifier = operator()?.classifier()?;
    let mut session = ClassificationSession::new(classifier);

    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Classify purchase order text into L1/L2/L3 categories.");

    let theme = ColorfulTheme::default();
    let choices: Vec<&str> = std::iter::once(OWN_INPUT)
        .chain(examples::EXAMPLES.iter().copied())
        .collect();

    let last = loop {
        output::section("Input");

        let picked = Select::with_theme(&theme)
            .with_prompt("Pick a quick example")
            .items(&choices)
            .default(0)
            .interact()?;
        let initial = if picked == 0 { "" } else { choices[picked] };

        let description: String = Input::with_theme(&theme)
            .with_prompt("PO Description")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;

        let supplier: String = Input::with_theme(&theme)
            .with_prompt("Supplier (optional)")
            .allow_empty(true)
            .interact_text()?;

        let outcome = classify::submit(&mut session, &description, Some(supplier.as_str())).await?;

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Classify another?")
            .default(true)
            .interact()?;
        if !again {
            break outcome;
        }
    };

    Ok(last)
}
