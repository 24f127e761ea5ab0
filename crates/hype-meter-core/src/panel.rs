use hype_meter_models::Review;

use crate::aggregate::ReviewStats;

/// Identifies one load of the review panel. Results carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Loading { ticket: LoadTicket },
    Ready { reviews: Vec<Review> },
}

/// Which overlay is showing. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveModal {
    #[default]
    None,
    Reviews(PanelState),
}

/// Review surface state: open triggers a fresh load, close cancels it implicitly.
#[derive(Debug, Default)]
pub struct ReviewScreen {
    modal: ActiveModal,
    next_ticket: u64,
}

impl ReviewScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &ActiveModal {
        &self.modal
    }

    /// Open (or reopen) the panel in the loading state.
    ///
    /// The collection is never cached across opens; the caller loads it and
    /// hands it back with [`ReviewScreen::apply_loaded`].
    pub fn open_reviews(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.modal = ActiveModal::Reviews(PanelState::Loading { ticket });
        ticket
    }

    pub fn close(&mut self) {
        self.modal = ActiveModal::None;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.modal, ActiveModal::Reviews(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.modal, ActiveModal::Reviews(PanelState::Loading { .. }))
    }

    /// Apply a finished load. Returns false (and changes nothing) when the
    /// panel was closed or reopened since `ticket` was issued.
    pub fn apply_loaded(&mut self, ticket: LoadTicket, reviews: Vec<Review>) -> bool {
        let is_current = matches!(
            &self.modal,
            ActiveModal::Reviews(PanelState::Loading { ticket: current }) if *current == ticket
        );
        if !is_current {
            return false;
        }
        self.modal = ActiveModal::Reviews(PanelState::Ready { reviews });
        true
    }

    /// Show the collection written by a submission. Ignored when the panel is closed.
    pub fn apply_submitted(&mut self, reviews: Vec<Review>) -> bool {
        if !self.is_open() {
            return false;
        }
        self.modal = ActiveModal::Reviews(PanelState::Ready { reviews });
        true
    }

    pub fn reviews(&self) -> Option<&[Review]> {
        match &self.modal {
            ActiveModal::Reviews(PanelState::Ready { reviews }) => Some(reviews),
            _ => None,
        }
    }

    pub fn stats(&self) -> Option<ReviewStats> {
        self.reviews().map(ReviewStats::from_reviews)
    }
}
