//! HTTP client for the managed document store.
//!
//! The store exposes a collection-scoped REST surface: whole-document insert,
//! partial field update by id, and a server-sent-events listen endpoint that
//! pushes the complete re-sorted collection on every change. The UI never
//! consumes a write's result directly; the effect arrives through the next
//! pushed snapshot.

use async_trait::async_trait;
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::config::environment::StoreConfig;
use crate::models::vehicle::NewVehicle;

/// Order key for the vehicles collection; the store sorts, never the client.
pub const CUSTOMER_NAME_ORDER: &str = "customerName";

/// Failures coming back from the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document store rejected the request: {0}")]
    Rejected(StatusCode),

    #[error("malformed document store payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Write seam for the vehicles collection. Controllers depend on this trait
/// so tests can record calls without a live store.
#[async_trait]
pub trait VehicleWriter: Send + Sync {
    /// Insert one new document; the store assigns and returns the id.
    async fn create(&self, vehicle: &NewVehicle) -> Result<String, StoreError>;

    /// Partially update exactly one field of one document.
    async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

/// Client for the store's `vehicles` collection.
///
/// No request timeouts: a hung write simply stays pending, matching the
/// fire-and-forget contract of the board's controls.
#[derive(Debug, Clone)]
pub struct DocumentStoreClient {
    http: reqwest::Client,
    collection_url: String,
    api_key: String,
}

impl DocumentStoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        let collection_url = format!(
            "https://{}/v1/projects/{}/databases/{}/collections/vehicles",
            config.auth_domain, config.project_id, config.database_id
        );
        Ok(Self {
            http,
            collection_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Open the live listen stream for the collection, ordered ascending by
    /// `order_key`. The response body is an SSE stream whose `data` payloads
    /// are complete JSON arrays of vehicle documents.
    pub async fn open_listen_stream(&self, order_key: &str) -> Result<reqwest::Response, StoreError> {
        let url = format!("{}:listen", self.collection_url);
        let response = self
            .http
            .get(&url)
            .query(&[("orderBy", order_key), ("direction", "asc")])
            .header("accept", "text/event-stream")
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected(status));
        }
        Ok(response)
    }
}

#[async_trait]
impl VehicleWriter for DocumentStoreClient {
    async fn create(&self, vehicle: &NewVehicle) -> Result<String, StoreError> {
        let response = self
            .http
            .post(&self.collection_url)
            .header("x-api-key", &self.api_key)
            .json(vehicle)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected(status));
        }

        let created: CreatedDocument = response.json().await?;
        Ok(created.id)
    }

    async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.collection_url, id);

        // Partial update: the body names only the field being changed.
        let mut patch = serde_json::Map::new();
        patch.insert(field.to_string(), Value::String(value.to_string()));

        let response = self
            .http
            .patch(&url)
            .header("x-api-key", &self.api_key)
            .json(&Value::Object(patch))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            api_key: "key".into(),
            auth_domain: "store.example.com".into(),
            project_id: "workshop".into(),
            database_id: "default".into(),
            sender_id: "42".into(),
            app_id: "1:42:web".into(),
        }
    }

    #[test]
    fn collection_url_is_built_from_config() {
        let client = DocumentStoreClient::new(&config()).unwrap();
        assert_eq!(
            client.collection_url,
            "https://store.example.com/v1/projects/workshop/databases/default/collections/vehicles"
        );
    }
}
