use anyhow::Result;
use hype_meter_config::{Config, CredentialStore, ACCESS_KEY_ENV};
use std::sync::Arc;
use tracing::debug;

use crate::jsonbin::JsonBinStore;
use crate::traits::DocumentStore;

/// Build the configured document store.
///
/// Fails only on setup problems (bad config, no access key); runtime
/// unavailability of the store is handled by the review flow.
pub fn create_store(config: &Config, credentials: &CredentialStore) -> Result<Arc<dyn DocumentStore>> {
    config.validate()?;

    let access_key = credentials.resolve_access_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No store access key found. Run 'hype-meter config set-key' or set {}",
            ACCESS_KEY_ENV
        )
    })?;

    let store = JsonBinStore::from_config(&config.store, access_key);
    debug!("Using {} document store at {}", store.store_name(), store.endpoint());
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn credentials_with_key(key: &str) -> CredentialStore {
        let mut creds = CredentialStore::new(PathBuf::from("/nonexistent/credentials.toml"));
        creds.set_access_key(key.to_string());
        creds
    }

    #[test]
    fn test_create_store_rejects_placeholder_config() {
        let config = Config::template();
        assert!(create_store(&config, &credentials_with_key("k")).is_err());
    }

    #[test]
    fn test_create_store_with_key() {
        let config = Config::with_endpoint("https://example.com/b/1".to_string());
        let store = create_store(&config, &credentials_with_key("k")).unwrap();
        assert_eq!(store.store_name(), "jsonbin");
    }
}
