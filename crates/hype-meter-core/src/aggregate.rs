use hype_meter_models::Review;
use serde::Serialize;

/// Mean rating rounded half-up to one decimal place, "0.0" when empty.
pub fn average_rating(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "0.0".to_string();
    }

    let sum: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    let n = reviews.len() as u64;
    // round(sum * 10 / n) in integers so x.x5 always rounds up
    let tenths = (sum * 20 + n) / (2 * n);
    format!("{}.{}", tenths / 10, tenths % 10)
}

pub fn total_count(reviews: &[Review]) -> usize {
    reviews.len()
}

pub fn hyped_count(reviews: &[Review]) -> usize {
    reviews.iter().filter(|r| r.is_hyped()).count()
}

/// Caption shown next to a picked star rating
pub fn hype_label(rating: u8) -> Option<&'static str> {
    match rating {
        5 => Some("Maximum Hype!"),
        4 => Some("Super Excited!"),
        3 => Some("Looking Good!"),
        2 => Some("Somewhat Interested"),
        1 => Some("Not Sure Yet"),
        _ => None,
    }
}

/// Snapshot of the aggregates for one collection. Recompute on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub average_rating: String,
    pub hyped: usize,
}

impl ReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            total: total_count(reviews),
            average_rating: average_rating(reviews),
            hyped: hyped_count(reviews),
        }
    }
}
