use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use raices::intake::{
    ApplicationRecord, CmsGateway, CmsOperationError, CollectionDescriptor, CollectionKind,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory CMS used by the CLI demo and tests so the intake flow can run
/// without hosted credentials.
#[derive(Debug)]
pub(crate) struct InMemoryCmsGateway {
    collections: Vec<CollectionDescriptor>,
    inserted: Arc<Mutex<Vec<(String, ApplicationRecord)>>>,
}

impl Default for InMemoryCmsGateway {
    fn default() -> Self {
        Self {
            collections: vec![CollectionDescriptor {
                id: "demo-investor-applications".to_string(),
                display_name: "InvestorApplications".to_string(),
                kind: CollectionKind::UserDefined,
            }],
            inserted: Arc::default(),
        }
    }
}

impl InMemoryCmsGateway {
    pub(crate) fn inserted(&self) -> Vec<(String, ApplicationRecord)> {
        self.inserted.lock().expect("insert mutex poisoned").clone()
    }
}

#[async_trait]
impl CmsGateway for InMemoryCmsGateway {
    async fn list_collections(&self) -> Result<Vec<CollectionDescriptor>, CmsOperationError> {
        Ok(self.collections.clone())
    }

    async fn insert_application(
        &self,
        collection_id: &str,
        record: &ApplicationRecord,
    ) -> Result<(), CmsOperationError> {
        self.inserted
            .lock()
            .expect("insert mutex poisoned")
            .push((collection_id.to_string(), record.clone()));
        Ok(())
    }
}
