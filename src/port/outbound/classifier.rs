//! Classification gateway port.

use async_trait::async_trait;

use crate::domain::request::ClassificationRequest;
use crate::domain::response::RawResponse;
use crate::error::Result;

/// Gateway to an external classification provider.
///
/// One call per submit. The returned text is untrusted: it is expected to be
/// a JSON object with `L1`/`L2`/`L3` keys but nothing here guarantees that.
/// Interpretation is the caller's job.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Classify a validated request and return the provider's raw text.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot be reached or rejects the
    /// request. A reply that is not JSON is not an error.
    async fn classify(&self, request: &ClassificationRequest) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Classifier + ?Sized> Classifier for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<RawResponse> {
        (**self).classify(request).await
    }
}

#[async_trait]
impl<T: Classifier + ?Sized> Classifier for std::sync::Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<RawResponse> {
        (**self).classify(request).await
    }
}

#[async_trait]
impl<T: Classifier + ?Sized> Classifier for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<RawResponse> {
        (**self).classify(request).await
    }
}
