use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::collection::{CollectionDescriptor, CollectionKind};
use super::domain::ApplicationRecord;
use crate::config::CmsConfig;

#[derive(Debug, thiserror::Error)]
pub enum CmsOperationError {
    #[error("cms request failed: {0}")]
    Transport(String),
    #[error("cms rejected the request with status {status}")]
    Backend { status: u16 },
    #[error("cms response could not be decoded: {0}")]
    Decode(String),
}

/// Boundary to the hosted CMS holding investor applications. The service
/// only ever needs two operations: enumerate collections by name and insert
/// one record.
#[async_trait]
pub trait CmsGateway: Send + Sync + std::fmt::Debug {
    async fn list_collections(&self) -> Result<Vec<CollectionDescriptor>, CmsOperationError>;
    async fn insert_application(
        &self,
        collection_id: &str,
        record: &ApplicationRecord,
    ) -> Result<(), CmsOperationError>;
}

/// Admin-privileged client for the hosted CMS data REST surface. Each call
/// is a single bounded attempt; retry policy belongs to the caller, and the
/// caller deliberately has none.
pub struct HostedCmsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    account_id: String,
    site_id: Option<String>,
}

impl HostedCmsClient {
    /// Build a client when the key/account pair is configured. `Ok(None)`
    /// signals the deliberate non-persisting mode.
    pub fn from_config(config: &CmsConfig) -> Result<Option<Self>, CmsOperationError> {
        let (Some(api_key), Some(account_id)) = (&config.api_key, &config.account_id) else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| CmsOperationError::Transport(err.to_string()))?;

        Ok(Some(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            account_id: account_id.clone(),
            site_id: config.site_id.clone(),
        }))
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header("Authorization", &self.api_key)
            .header("wix-account-id", &self.account_id);
        match &self.site_id {
            Some(site_id) => builder.header("wix-site-id", site_id),
            None => builder,
        }
    }
}

impl std::fmt::Debug for HostedCmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedCmsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct CollectionListResponse {
    #[serde(default)]
    collections: Vec<RemoteCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCollection {
    #[serde(alias = "_id", default)]
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    collection_type: Option<CollectionKind>,
}

#[async_trait]
impl CmsGateway for HostedCmsClient {
    async fn list_collections(&self) -> Result<Vec<CollectionDescriptor>, CmsOperationError> {
        let url = format!("{}/v2/collections", self.base_url);
        let response = self
            .request(self.http.get(&url))
            .send()
            .await
            .map_err(|err| CmsOperationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsOperationError::Backend {
                status: status.as_u16(),
            });
        }

        let listing: CollectionListResponse = response
            .json()
            .await
            .map_err(|err| CmsOperationError::Decode(err.to_string()))?;

        Ok(listing
            .collections
            .into_iter()
            .filter(|remote| !remote.id.is_empty())
            .map(|remote| CollectionDescriptor {
                display_name: remote.display_name.unwrap_or_else(|| remote.id.clone()),
                id: remote.id,
                kind: remote.collection_type.unwrap_or(CollectionKind::Unknown),
            })
            .collect())
    }

    async fn insert_application(
        &self,
        collection_id: &str,
        record: &ApplicationRecord,
    ) -> Result<(), CmsOperationError> {
        let url = format!("{}/v2/items", self.base_url);
        let body = json!({
            "dataCollectionId": collection_id,
            "dataItem": { "data": record },
        });

        let response = self
            .request(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|err| CmsOperationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsOperationError::Backend {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
