//! Handler for the `config` command group.

use serde_json::json;

use super::operator::operator;
use super::outcome::CommandOutcome;
use super::output;
use crate::error::Result;
use crate::port::inbound::operator::configuration::ConfigView;

fn source_label(view: &ConfigView) -> String {
    if view.source_found {
        view.source.clone()
    } else {
        format!("{} (not found, using defaults)", view.source)
    }
}

/// Execute `config show`.
pub fn execute_show() -> Result<CommandOutcome> {
    let view = operator()?.config_view();
    let provider = &view.provider;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source_label(&view),
            "logging": {
                "level": view.logging.level,
                "format": view.logging.format,
            },
            "llm": {
                "provider": provider.name,
                "model": provider.model,
                "temperature": provider.temperature,
                "max_tokens": provider.max_tokens,
                "timeout_secs": provider.timeout_secs,
                "base_url": provider.base_url,
                "api_key_present": provider.api_key_present,
            },
        }));
        return Ok(CommandOutcome::Success);
    }

    output::section("Effective Configuration");
    output::field("Source", source_label(&view));

    output::section("Logging");
    output::field("Level", &view.logging.level);
    output::field("Format", &view.logging.format);

    output::section("Provider");
    output::field("Provider", output::highlight(&provider.name));
    output::field("Model", &provider.model);
    output::field("Temperature", provider.temperature);
    output::field("Max tokens", provider.max_tokens);
    output::field("Timeout", format!("{}s", provider.timeout_secs));
    output::field(
        "Endpoint",
        provider.base_url.as_deref().unwrap_or("(default)"),
    );

    output::section("Credentials");
    if provider.api_key_present {
        output::success(&format!("{} is set", provider.api_key_env));
    } else {
        output::warning(&format!("{} is not set", provider.api_key_env));
    }

    Ok(CommandOutcome::Success)
}

/// Execute `config validate`.
///
/// The file itself was already parsed and validated on load; this reports
/// the result and checks that the active provider has credentials.
pub fn execute_validate() -> Result<CommandOutcome> {
    let view = operator()?.config_view();
    let key_env = &view.provider.api_key_env;
    let key_present = view.provider.api_key_present;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": source_label(&view),
            "valid": true,
            "api_key_env": key_env,
            "api_key_present": key_present,
        }));
        return Ok(if key_present {
            CommandOutcome::Success
        } else {
            CommandOutcome::Rejected
        });
    }

    output::section("Configuration Check");
    output::field("Config", source_label(&view));
    output::success("Configuration is valid");

    if key_present {
        output::success(&format!("{key_env} detected"));
        Ok(CommandOutcome::Success)
    } else {
        output::warning(&format!("{key_env} is not set"));
        output::hint(&format!("export {key_env}=... or add it to .env"));
        Ok(CommandOutcome::Rejected)
    }
}
