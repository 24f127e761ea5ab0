use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A single fan review as stored in the shared document.
///
/// Field names match the stored JSON exactly; `date` is a display string
/// (e.g. "Feb 10, 2026") and is never used for ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub rating: u8,
    pub review: String,
    pub date: String,
    pub avatar: String,
}

impl Review {
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// Counts toward the "hyped fans" tally
    pub fn is_hyped(&self) -> bool {
        self.rating >= 4
    }
}
