//! Canned provider replies served through `mockito`.

use serde_json::json;

/// Path the OpenAI adapter posts to.
pub const OPENAI_PATH: &str = "/v1/chat/completions";

/// Path the Anthropic adapter posts to.
pub const ANTHROPIC_PATH: &str = "/v1/messages";

/// An OpenAI chat completion whose message content is `content`.
pub fn openai_completion(content: &str) -> String {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

/// An Anthropic messages reply carrying `content` as a single text block.
pub fn anthropic_message(content: &str) -> String {
    json!({
        "content": [{ "type": "text", "text": content }]
    })
    .to_string()
}

/// Full endpoint URL for `path` on a running mock server.
pub fn endpoint(server: &mockito::Server, path: &str) -> String {
    format!("{}{path}", server.url())
}
