use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` as `config.toml` in a fresh temporary directory.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

/// Config pointing the OpenAI adapter at a local endpoint.
pub fn openai_config(endpoint: &str) -> String {
    format!(
        "[llm]\nprovider = \"openai\"\ntimeout_secs = 5\n\n[llm.openai]\nbase_url = \"{endpoint}\"\n"
    )
}

/// Config selecting the Anthropic adapter at a local endpoint.
pub fn anthropic_config(endpoint: &str) -> String {
    format!(
        "[llm]\nprovider = \"anthropic\"\ntimeout_secs = 5\n\n[llm.anthropic]\nbase_url = \"{endpoint}\"\n"
    )
}

/// OpenAI config with a custom request timeout.
pub fn openai_config_with_timeout(endpoint: &str, timeout_secs: u64) -> String {
    format!(
        "[llm]\nprovider = \"openai\"\ntimeout_secs = {timeout_secs}\n\n[llm.openai]\nbase_url = \"{endpoint}\"\n"
    )
}
