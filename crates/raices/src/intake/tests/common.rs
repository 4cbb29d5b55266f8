use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::intake::collection::{CollectionDescriptor, CollectionKind};
use crate::intake::credential::{CredentialHasher, MIN_HASH_COST};
use crate::intake::domain::{ApplicationForm, ApplicationRecord, InvestmentType, ResidencyStatus};
use crate::intake::gateway::{CmsGateway, CmsOperationError};
use crate::intake::screening::IntakeGuard;
use crate::intake::service::ApplicationService;

pub(super) fn form() -> ApplicationForm {
    ApplicationForm {
        full_name: "Mariana Cárdenas".to_string(),
        email: "Mariana.Cardenas@Example.com".to_string(),
        phone: "+34 600 123 456".to_string(),
        country_of_origin: "Colombia".to_string(),
        password: "horizonte-2026".to_string(),
        confirm_password: Some("horizonte-2026".to_string()),
        residency: Some(ResidencyStatus::InProcess),
        investment_type: Some(InvestmentType::Fractional),
        budget_range: "€10,000 – €25,000".to_string(),
        deposit_ready: "within 3 months".to_string(),
        share_range: 8.0,
        risk_profile: None,
    }
}

pub(super) fn cheap_guard() -> IntakeGuard {
    IntakeGuard::with_hasher(CredentialHasher::new(MIN_HASH_COST))
}

pub(super) fn collections() -> Vec<CollectionDescriptor> {
    vec![
        CollectionDescriptor {
            id: "blog-posts".to_string(),
            display_name: "Blog Posts".to_string(),
            kind: CollectionKind::Native,
        },
        CollectionDescriptor {
            id: "col-investors".to_string(),
            display_name: "InvestorApplications".to_string(),
            kind: CollectionKind::UserDefined,
        },
    ]
}

/// In-memory stand-in for the hosted CMS so the service and router can be
/// exercised without the network.
#[derive(Debug, Default)]
pub(super) struct MemoryCms {
    pub(super) collections: Vec<CollectionDescriptor>,
    pub(super) fail_list: bool,
    pub(super) fail_insert: bool,
    pub(super) list_calls: AtomicUsize,
    pub(super) inserted: Mutex<Vec<(String, ApplicationRecord)>>,
}

impl MemoryCms {
    pub(super) fn with_collections(collections: Vec<CollectionDescriptor>) -> Self {
        Self {
            collections,
            ..Self::default()
        }
    }

    pub(super) fn inserted(&self) -> Vec<(String, ApplicationRecord)> {
        self.inserted.lock().expect("insert mutex poisoned").clone()
    }

    pub(super) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CmsGateway for MemoryCms {
    async fn list_collections(&self) -> Result<Vec<CollectionDescriptor>, CmsOperationError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_list {
            return Err(CmsOperationError::Transport("listing refused".to_string()));
        }
        Ok(self.collections.clone())
    }

    async fn insert_application(
        &self,
        collection_id: &str,
        record: &ApplicationRecord,
    ) -> Result<(), CmsOperationError> {
        if self.fail_insert {
            return Err(CmsOperationError::Backend { status: 503 });
        }
        self.inserted
            .lock()
            .expect("insert mutex poisoned")
            .push((collection_id.to_string(), record.clone()));
        Ok(())
    }
}

pub(super) fn service_with(
    gateway: Option<Arc<MemoryCms>>,
    collection_id: Option<&str>,
) -> ApplicationService<MemoryCms> {
    ApplicationService::with_guard(
        cheap_guard(),
        gateway,
        collection_id.map(str::to_string),
    )
}
