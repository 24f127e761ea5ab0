use async_trait::async_trait;
use hype_meter_config::StoreConfig;
use hype_meter_models::Review;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::error::StoreError;
use crate::jsonbin::api;
use crate::traits::DocumentStore;

/// Hosted JSON bin addressed by a single document URL and an access-key header.
#[derive(Clone)]
pub struct JsonBinStore {
    client: Arc<Client>,
    endpoint: String,
    key_header: String,
    access_key: String,
}

impl JsonBinStore {
    pub fn with_client(client: Client, endpoint: String, key_header: String, access_key: String) -> Self {
        Self {
            client: Arc::new(client),
            endpoint,
            key_header,
            access_key,
        }
    }

    pub fn from_config(config: &StoreConfig, access_key: String) -> Self {
        Self::with_client(
            create_http_client(config.timeout_seconds),
            config.endpoint.clone(),
            config.access_key_header.clone(),
            access_key,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build the HTTP client, applying a timeout only when one is configured
pub fn create_http_client(timeout_seconds: Option<u64>) -> Client {
    let mut builder = Client::builder().user_agent(concat!("hype-meter/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| Client::new())
}

#[async_trait]
impl DocumentStore for JsonBinStore {
    fn store_name(&self) -> &str {
        "jsonbin"
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, StoreError> {
        api::get_latest(&self.client, &self.endpoint, &self.key_header, &self.access_key).await
    }

    async fn put_reviews(&self, reviews: &[Review]) -> Result<(), StoreError> {
        api::put_document(&self.client, &self.endpoint, &self.key_header, &self.access_key, reviews).await
    }
}
