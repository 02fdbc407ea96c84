//! Classification session: the caller side of the gateway contract.
//!
//! A session owns one classifier and the single current [`ViewState`]. Each
//! submit validates input, moves to `Pending`, calls the gateway once and
//! replaces the state with the interpreted outcome.

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::request::ClassificationRequest;
use crate::domain::view::ViewState;
use crate::port::outbound::classifier::Classifier;

pub struct ClassificationSession<C> {
    classifier: C,
    state: ViewState,
    request_id: Option<Uuid>,
}

impl<C: Classifier> ClassificationSession<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            state: ViewState::Idle,
            request_id: None,
        }
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Correlation ID of the most recent accepted submit.
    #[must_use]
    pub fn request_id(&self) -> Option<Uuid> {
        self.request_id
    }

    /// Validate input and enter `Pending`.
    ///
    /// On [`DomainError::EmptyInput`] the state is left untouched and the
    /// classifier is not called.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInput`] for a blank description.
    pub fn begin(&mut self, description: &str, supplier: Option<&str>) -> Result<(), DomainError> {
        let request = match ClassificationRequest::try_new(description, supplier.map(String::from))
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "submit rejected");
                return Err(e);
            }
        };

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            provider = self.classifier.name(),
            has_supplier = request.supplier().is_some(),
            "classification submitted"
        );

        self.request_id = Some(request_id);
        self.state = ViewState::Pending { request };
        Ok(())
    }

    /// Call the gateway for the pending request and store the outcome.
    ///
    /// Does nothing unless the session is `Pending`. Provider failures never
    /// escape: they resolve to all-"Unknown" labels with an error note.
    pub async fn resolve(&mut self) -> &ViewState {
        let ViewState::Pending { request } = &self.state else {
            return &self.state;
        };

        let next = match self.classifier.classify(request).await {
            Ok(raw) => ViewState::from_interpretation(raw.interpret()),
            Err(e) => {
                warn!(
                    request_id = ?self.request_id,
                    provider = self.classifier.name(),
                    error = %e,
                    "classification provider failed"
                );
                ViewState::provider_failed(e.to_string())
            }
        };

        info!(request_id = ?self.request_id, outcome = next.name(), "classification resolved");
        self.state = next;
        &self.state
    }

    /// Validate, call the gateway, and return the new terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyInput`] for a blank description.
    pub async fn submit(
        &mut self,
        description: &str,
        supplier: Option<&str>,
    ) -> Result<&ViewState, DomainError> {
        self.begin(description, supplier)?;
        Ok(self.resolve().await)
    }
}
