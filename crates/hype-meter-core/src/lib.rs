pub mod aggregate;
pub mod panel;
pub mod repository;
pub mod submission;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{average_rating, hype_label, hyped_count, total_count, ReviewStats};
pub use panel::{ActiveModal, LoadTicket, PanelState, ReviewScreen};
pub use repository::{merge_with_seeds, ReviewRepository};
pub use submission::{next_review_id, ReviewDraft, ReviewSubmitter, SubmissionOutcome, ValidationError};
