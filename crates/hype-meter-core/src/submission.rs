use chrono::{DateTime, Local};
use hype_meter_config::{Config, DEFAULT_DATE_FORMAT};
use hype_meter_models::{avatar_url, AvatarStyle, Review, MAX_RATING, MIN_RATING};
use std::fmt::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::repository::ReviewRepository;

/// Rejected input. Nothing is sent to the store when this is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("review text is required")]
    MissingText,
    #[error("rating is required")]
    MissingRating,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// What the fan typed in
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(name: impl Into<String>, rating: u8, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            text: text.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::MissingText);
        }
        if self.rating < MIN_RATING {
            return Err(ValidationError::MissingRating);
        }
        if self.rating > MAX_RATING {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// The review that was created
    pub review: Review,
    /// Collection as written, new review first. This is the new local state.
    pub reviews: Vec<Review>,
    /// Whether the store accepted the write. Not shown to the fan.
    pub persisted: bool,
}

pub struct ReviewSubmitter {
    repository: ReviewRepository,
    date_format: String,
    avatar: AvatarStyle,
}

impl ReviewSubmitter {
    pub fn new(repository: ReviewRepository) -> Self {
        Self {
            repository,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            avatar: AvatarStyle::default(),
        }
    }

    pub fn from_config(repository: ReviewRepository, config: &Config) -> Self {
        Self {
            repository,
            date_format: config.reviews.date_format.clone(),
            avatar: config.avatar.clone(),
        }
    }

    pub fn repository(&self) -> &ReviewRepository {
        &self.repository
    }

    pub async fn submit_review(&self, name: &str, rating: u8, text: &str) -> Result<SubmissionOutcome, ValidationError> {
        self.submit_review_at(&ReviewDraft::new(name, rating, text), Local::now()).await
    }

    /// Validate, re-read, prepend and overwrite the shared document.
    ///
    /// Two clients submitting between each other's re-read and write lose one
    /// of the reviews; the store offers nothing to detect that.
    pub async fn submit_review_at(
        &self,
        draft: &ReviewDraft,
        now: DateTime<Local>,
    ) -> Result<SubmissionOutcome, ValidationError> {
        draft.validate()?;

        let current = self.repository.load_reviews().await;

        let name = draft.name.trim().to_string();
        let review = Review {
            id: next_review_id(now.timestamp_millis(), &current),
            avatar: avatar_url(&name, &self.avatar),
            name,
            rating: draft.rating,
            review: draft.text.trim().to_string(),
            date: format_date(&now, &self.date_format),
        };
        debug!("Prepared review {} from {}", review.id, review.name);

        let mut reviews = Vec::with_capacity(current.len() + 1);
        reviews.push(review.clone());
        reviews.extend(current);

        let store = self.repository.store();
        let persisted = match store.put_reviews(&reviews).await {
            Ok(()) => {
                info!("Saved review {} ({} reviews in {})", review.id, reviews.len(), store.store_name());
                true
            }
            Err(e) => {
                warn!("Failed to save review {} to {}: {}", review.id, store.store_name(), e);
                false
            }
        };

        Ok(SubmissionOutcome {
            review,
            reviews,
            persisted,
        })
    }
}

/// Millisecond timestamp, bumped past the largest id already in `existing`.
pub fn next_review_id(now_millis: i64, existing: &[Review]) -> i64 {
    match existing.iter().map(|r| r.id).max() {
        Some(max_id) if max_id >= now_millis => max_id.saturating_add(1),
        _ => now_millis,
    }
}

fn format_date(now: &DateTime<Local>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(date_format)).is_ok() {
        return out;
    }
    warn!("Invalid date format '{}', using default", date_format);
    now.format(DEFAULT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{review, FakeStore};
    use chrono::TimeZone;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn march_first() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn submitter(store: Arc<FakeStore>) -> ReviewSubmitter {
        ReviewSubmitter::new(ReviewRepository::with_seeds(store, vec![review(1, 5)]))
    }

    #[test]
    fn test_validation_rules() {
        assert_eq!(ReviewDraft::new("  ", 5, "text").validate(), Err(ValidationError::MissingName));
        assert_eq!(ReviewDraft::new("Fan", 5, "\n\t").validate(), Err(ValidationError::MissingText));
        assert_eq!(ReviewDraft::new("Fan", 0, "text").validate(), Err(ValidationError::MissingRating));
        assert_eq!(ReviewDraft::new("Fan", 6, "text").validate(), Err(ValidationError::RatingOutOfRange(6)));
        assert!(ReviewDraft::new("Fan", 1, "text").validate().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_submission_performs_no_io() {
        let store = Arc::new(FakeStore::with_reviews(vec![]));
        let submitter = submitter(store.clone());

        for (name, rating, text) in [("", 5, "great"), ("Fan", 5, "   "), ("Fan", 0, "great")] {
            assert!(submitter.submit_review(name, rating, text).await.is_err());
        }
        assert_eq!(store.fetch_count(), 0);
        assert!(store.puts().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submission_prepends_one_review() {
        let store = Arc::new(FakeStore::with_reviews(vec![review(2, 4)]));
        let submitter = submitter(store.clone());

        let outcome = submitter
            .submit_review_at(&ReviewDraft::new("  Nani Fan ", 5, " Goosebumps! "), march_first())
            .await
            .unwrap();

        assert!(outcome.persisted);
        assert_eq!(outcome.reviews.len(), 3);
        assert_eq!(outcome.reviews[0], outcome.review);
        assert_eq!(outcome.reviews[1].id, 2);
        assert_eq!(outcome.reviews[2].id, 1);

        let new = &outcome.review;
        assert_eq!(new.name, "Nani Fan");
        assert_eq!(new.review, "Goosebumps!");
        assert_eq!(new.rating, 5);
        assert_eq!(new.date, "Mar 1, 2026");
        assert_eq!(new.id, march_first().timestamp_millis());
        assert_eq!(new.avatar, avatar_url("Nani Fan", &AvatarStyle::default()));

        assert_eq!(store.fetch_count(), 1);
        assert_eq!(store.puts(), vec![outcome.reviews.clone()]);
    }

    #[tokio::test]
    async fn test_sequential_submissions_get_distinct_ids() {
        let store = Arc::new(FakeStore::with_reviews(vec![]));
        let submitter = submitter(store.clone());
        let now = march_first();

        // Same clock reading for both: the second id must still be fresh
        let first = submitter.submit_review_at(&ReviewDraft::new("A", 4, "one"), now).await.unwrap();
        let second = submitter.submit_review_at(&ReviewDraft::new("B", 3, "two"), now).await.unwrap();

        assert_eq!(second.reviews.len(), 3);
        let ids: HashSet<i64> = second.reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(second.review.id > first.review.id);
    }

    #[tokio::test]
    async fn test_rereads_before_writing() {
        let store = Arc::new(FakeStore::with_reviews(vec![]));
        let submitter = submitter(store.clone());

        // Another fan wrote after our panel was opened
        store.replace_document(vec![review(50, 2)]);

        let outcome = submitter
            .submit_review_at(&ReviewDraft::new("Late", 5, "Still hyped"), march_first())
            .await
            .unwrap();
        let ids: Vec<i64> = outcome.reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids[1..].to_vec(), vec![50, 1]);
        assert_eq!(store.document().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let store = Arc::new(FakeStore::read_only(vec![review(2, 4)]));
        let submitter = submitter(store.clone());

        let outcome = submitter
            .submit_review_at(&ReviewDraft::new("Fan", 4, "text"), march_first())
            .await
            .unwrap();

        assert!(!outcome.persisted);
        assert_eq!(outcome.reviews.len(), 3);
        assert_eq!(store.puts().len(), 1);
        assert_eq!(store.document().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_store_still_updates_local_state() {
        let store = Arc::new(FakeStore::unreachable());
        let submitter = submitter(store.clone());

        let outcome = submitter
            .submit_review_at(&ReviewDraft::new("Fan", 5, "text"), march_first())
            .await
            .unwrap();
        let ids: Vec<i64> = outcome.reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![march_first().timestamp_millis(), 1]);
        assert!(!outcome.persisted);
    }

    #[test]
    fn test_next_review_id() {
        assert_eq!(next_review_id(1_000, &[]), 1_000);
        assert_eq!(next_review_id(1_000, &[review(1, 5)]), 1_000);
        assert_eq!(next_review_id(1_000, &[review(1_000, 5)]), 1_001);
        assert_eq!(next_review_id(1_000, &[review(5_000, 5), review(1, 5)]), 5_001);
    }

    #[test]
    fn test_format_date_custom_and_invalid() {
        assert_eq!(format_date(&march_first(), "%Y-%m-%d"), "2026-03-01");
        assert_eq!(format_date(&march_first(), "%Q"), "Mar 1, 2026");
    }
}
