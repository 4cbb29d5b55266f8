//! Investor application intake: wizard payload validation, credential
//! hashing, and persistence through the hosted CMS collaborator.

pub(crate) mod collection;
pub mod credential;
pub mod domain;
pub mod gateway;
pub mod router;
pub mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use collection::{best_collection, CollectionDescriptor, CollectionKind};
pub use credential::{CredentialError, CredentialHasher, DEFAULT_HASH_COST, MIN_CREDENTIAL_LEN};
pub use domain::{
    ApplicationForm, ApplicationRecord, ApplicationStatus, InvestmentType, ResidencyStatus,
    RiskProfile, DEFAULT_COUNTRY_OF_ORIGIN,
};
pub use gateway::{CmsGateway, CmsOperationError, HostedCmsClient};
pub use router::intake_router;
pub use screening::{IntakeGuard, ScreeningError, ValidationError};
pub use service::{ApplicationService, IntakeError, SubmissionReceipt};
