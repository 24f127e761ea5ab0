pub mod avatar;
pub mod document;
pub mod review;
pub mod seed;

pub use avatar::{avatar_url, AvatarStyle};
pub use document::{ReviewDocument, StoredRecord};
pub use review::{Review, MAX_RATING, MIN_RATING};
pub use seed::seed_reviews;
