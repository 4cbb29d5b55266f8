use chrono::Utc;

use super::credential::{CredentialError, CredentialHasher, MIN_CREDENTIAL_LEN};
use super::domain::{
    ApplicationForm, ApplicationRecord, ApplicationStatus, ResidencyStatus,
    DEFAULT_COUNTRY_OF_ORIGIN,
};

/// Rejections raised before any hashing or persistence work happens.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("full name is required")]
    MissingFullName,
    #[error("email is required")]
    MissingEmail,
    #[error("password must be at least {minimum} characters")]
    CredentialTooShort { minimum: usize },
    #[error("password confirmation does not match")]
    CredentialMismatch,
}

#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

/// Guard turning a raw wizard submission into a normalized, hash-carrying
/// record. Validation always runs before the credential is hashed.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    hasher: CredentialHasher,
}

impl IntakeGuard {
    pub fn with_hasher(hasher: CredentialHasher) -> Self {
        Self { hasher }
    }

    pub fn record_from_form(
        &self,
        form: ApplicationForm,
    ) -> Result<ApplicationRecord, ScreeningError> {
        let full_name = form.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(ValidationError::MissingFullName.into());
        }

        let email = form.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }

        if form.password.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(ValidationError::CredentialTooShort {
                minimum: MIN_CREDENTIAL_LEN,
            }
            .into());
        }

        if let Some(confirmation) = &form.confirm_password {
            if confirmation != &form.password {
                return Err(ValidationError::CredentialMismatch.into());
            }
        }

        let credential_hash = self.hasher.hash(&form.password)?;

        let country = form.country_of_origin.trim();
        let country_of_origin = if country.is_empty() {
            DEFAULT_COUNTRY_OF_ORIGIN.to_string()
        } else {
            country.to_string()
        };

        Ok(ApplicationRecord {
            full_name,
            email,
            phone: form.phone.trim().to_string(),
            country_of_origin,
            credential_hash,
            residency_status: form.residency.unwrap_or(ResidencyStatus::LegalResident),
            investment_type: form.investment_type,
            budget_range: form.budget_range.trim().to_string(),
            deposit_readiness: form.deposit_ready.trim().to_string(),
            share_percent: sanitize_share(form.share_range),
            risk_profile: form.risk_profile,
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
        })
    }
}

fn sanitize_share(share_range: f64) -> f64 {
    if share_range.is_finite() && share_range > 0.0 {
        share_range
    } else {
        0.0
    }
}
