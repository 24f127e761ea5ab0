use hype_meter_models::{seed_reviews, Review};
use hype_meter_store::DocumentStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reads the shared review list and folds the bundled seed reviews into it.
#[derive(Clone)]
pub struct ReviewRepository {
    store: Arc<dyn DocumentStore>,
    seeds: Vec<Review>,
}

impl ReviewRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_seeds(store, seed_reviews())
    }

    pub fn with_seeds(store: Arc<dyn DocumentStore>, seeds: Vec<Review>) -> Self {
        Self { store, seeds }
    }

    pub fn seeds(&self) -> &[Review] {
        &self.seeds
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Current review collection. Never fails: any store problem yields the seeds.
    pub async fn load_reviews(&self) -> Vec<Review> {
        match self.store.fetch_reviews().await {
            Ok(remote) if remote.is_empty() => {
                debug!("{} document has no reviews, showing seeds", self.store.store_name());
                self.seeds.clone()
            }
            Ok(remote) => {
                let merged = merge_with_seeds(remote, &self.seeds);
                info!("Loaded {} reviews from {}", merged.len(), self.store.store_name());
                merged
            }
            Err(e) => {
                warn!("Failed to load reviews from {}, showing seeds: {}", self.store.store_name(), e);
                self.seeds.clone()
            }
        }
    }
}

/// Remote reviews in stored order, followed by every seed whose id the remote list lacks.
pub fn merge_with_seeds(remote: Vec<Review>, seeds: &[Review]) -> Vec<Review> {
    let remote_ids: HashSet<i64> = remote.iter().map(|r| r.id).collect();
    let mut merged = remote;
    merged.extend(seeds.iter().filter(|s| !remote_ids.contains(&s.id)).cloned());
    merged
}
