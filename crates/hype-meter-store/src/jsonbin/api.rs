use hype_meter_models::{Review, ReviewDocument, StoredRecord};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Read the latest version of the document.
///
/// Entries that are not review-shaped or carry an out-of-range rating are
/// skipped; a body without `record.reviews` is an error.
pub async fn get_latest(
    client: &Client,
    endpoint: &str,
    key_header: &str,
    access_key: &str,
) -> Result<Vec<Review>, StoreError> {
    let url = latest_url(endpoint);
    debug!("GET {}", url);

    let response = client
        .get(&url)
        .header(key_header, access_key)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    parse_record(&body)
}

/// Replace the whole document with `reviews`.
pub async fn put_document(
    client: &Client,
    endpoint: &str,
    key_header: &str,
    access_key: &str,
    reviews: &[Review],
) -> Result<(), StoreError> {
    let url = endpoint.trim_end_matches('/');
    let body = serde_json::to_vec(&ReviewDocument::new(reviews.to_vec()))?;
    debug!("PUT {} ({} reviews)", url, reviews.len());

    let response = client
        .put(url)
        .header(key_header, access_key)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(())
}

pub fn latest_url(endpoint: &str) -> String {
    format!("{}/latest", endpoint.trim_end_matches('/'))
}

pub fn parse_record(body: &str) -> Result<Vec<Review>, StoreError> {
    let record: StoredRecord =
        serde_json::from_str(body).map_err(|e| StoreError::Malformed(e.to_string()))?;

    let total = record.record.reviews.len();
    let mut reviews = Vec::with_capacity(total);
    for value in record.record.reviews {
        match serde_json::from_value::<Review>(value) {
            Ok(review) if review.has_valid_rating() => reviews.push(review),
            Ok(review) => {
                warn!("Skipping review {} with out-of-range rating {}", review.id, review.rating);
            }
            Err(e) => {
                warn!("Skipping malformed review entry: {}", e);
            }
        }
    }

    if reviews.len() < total {
        debug!("Kept {} of {} stored reviews", reviews.len(), total);
    }
    Ok(reviews)
}

#[cfg(test)]
mod tests;
