//! Classification gateway backed by an LLM completion.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::request::ClassificationRequest;
use crate::domain::response::RawResponse;
use crate::error::Result;
use crate::port::outbound::classifier::Classifier;
use crate::port::outbound::llm::Llm;

/// Classifies PO descriptions by prompting an LLM.
///
/// The model's reply is handed back untouched; this type never parses it.
pub struct LlmClassifier {
    llm: Arc<dyn Llm>,
}

impl LlmClassifier {
    /// Create a new classifier over an LLM client.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }

    fn build_prompt(request: &ClassificationRequest) -> String {
        let supplier = request.supplier().unwrap_or("(not provided)");

        format!(
            r#"You classify purchase order (PO) lines into a three-level procurement taxonomy.

## Input
PO Description: {description}
Supplier: {supplier}

## Levels
- **L1**: broad spend category (e.g. "IT", "Facilities", "MRO", "Professional Services")
- **L2**: sub-category within L1 (e.g. "Software", "Furniture", "Valves")
- **L3**: specific commodity within L2 (e.g. "SaaS Subscriptions", "Office Chairs")

## Output (JSON only)
{{"L1": "...", "L2": "...", "L3": "..."}}

Rules:
- Respond with the JSON object only, no code fences or commentary
- Use short title-case labels
- Use "Unknown" for a level you cannot determine
"#,
            description = request.description(),
        )
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    fn name(&self) -> &'static str {
        self.llm.name()
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<RawResponse> {
        let prompt = Self::build_prompt(request);
        let started = Instant::now();
        let text = self.llm.complete(&prompt).await?;

        debug!(
            provider = self.llm.name(),
            latency_ms = started.elapsed().as_millis() as u64,
            response_len = text.len(),
            "classification call complete"
        );

        Ok(RawResponse::new(text))
    }
}
