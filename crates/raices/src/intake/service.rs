use std::sync::Arc;

use tracing::{error, info, warn};

use super::collection::best_collection;
use super::credential::CredentialError;
use super::domain::{ApplicationForm, ApplicationStatus};
use super::gateway::{CmsGateway, CmsOperationError};
use super::screening::{IntakeGuard, ScreeningError, ValidationError};

/// Outcome returned to the wizard after a submission is accepted.
///
/// `persisted` is false only in the deliberate non-persisting mode used
/// when no CMS credentials are configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: ApplicationStatus,
    pub persisted: bool,
}

/// Service composing the intake guard, collection resolution, and the CMS
/// gateway. One bounded persistence attempt per submission, no retries.
pub struct ApplicationService<G> {
    guard: IntakeGuard,
    gateway: Option<Arc<G>>,
    collection_id: Option<String>,
}

impl<G> ApplicationService<G>
where
    G: CmsGateway + 'static,
{
    pub fn new(gateway: Option<Arc<G>>, collection_id: Option<String>) -> Self {
        Self::with_guard(IntakeGuard::default(), gateway, collection_id)
    }

    pub fn with_guard(
        guard: IntakeGuard,
        gateway: Option<Arc<G>>,
        collection_id: Option<String>,
    ) -> Self {
        Self {
            guard,
            gateway,
            collection_id,
        }
    }

    /// Validate, normalize, and persist one application.
    pub async fn submit(&self, form: ApplicationForm) -> Result<SubmissionReceipt, IntakeError> {
        let record = self.guard.record_from_form(form)?;

        let Some(gateway) = &self.gateway else {
            warn!("cms gateway not configured; accepting application without persistence");
            return Ok(SubmissionReceipt {
                status: record.status,
                persisted: false,
            });
        };

        let collection_id = match &self.collection_id {
            Some(configured) => configured.clone(),
            None => {
                let collections = gateway.list_collections().await?;
                match best_collection(&collections) {
                    Some(matched) => {
                        info!(collection = %matched.display_name, "auto-detected application collection");
                        matched.id.clone()
                    }
                    None => {
                        warn!("no application collection matched and none is configured");
                        return Err(IntakeError::CollectionResolution);
                    }
                }
            }
        };

        gateway
            .insert_application(&collection_id, &record)
            .await
            .inspect_err(|err| error!(%collection_id, error = %err, "application insert failed"))?;

        info!(%collection_id, "application persisted with status pending");
        Ok(SubmissionReceipt {
            status: record.status,
            persisted: true,
        })
    }
}

/// Error raised by the submission flow.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("no application collection could be resolved")]
    CollectionResolution,
    #[error(transparent)]
    Persistence(#[from] CmsOperationError),
}

impl From<ScreeningError> for IntakeError {
    fn from(value: ScreeningError) -> Self {
        match value {
            ScreeningError::Validation(err) => Self::Validation(err),
            ScreeningError::Credential(err) => Self::Credential(err),
        }
    }
}
