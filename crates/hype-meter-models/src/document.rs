use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Body written to the document store on every submission (whole-document overwrite).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReviewDocument {
    pub reviews: Vec<Review>,
}

impl ReviewDocument {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }
}

/// Envelope returned by `GET <endpoint>/latest`.
///
/// Only `record.reviews` is read; entries are kept as raw JSON so one bad
/// entry does not discard the whole document.
#[derive(Debug, Deserialize)]
pub struct StoredRecord {
    pub record: RawDocument,
}

#[derive(Debug, Deserialize)]
pub struct RawDocument {
    pub reviews: Vec<serde_json::Value>,
}
