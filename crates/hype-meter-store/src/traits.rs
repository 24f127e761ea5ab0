use async_trait::async_trait;
use hype_meter_models::Review;

use crate::error::StoreError;

/// A remote JSON document holding the shared review list.
///
/// There is no partial update: `put_reviews` replaces the whole document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn store_name(&self) -> &str;

    /// Current reviews in the document, newest first as stored.
    async fn fetch_reviews(&self) -> Result<Vec<Review>, StoreError>;

    /// Overwrite the document with `reviews`.
    async fn put_reviews(&self, reviews: &[Review]) -> Result<(), StoreError>;
}
