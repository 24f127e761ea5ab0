use async_trait::async_trait;
use hype_meter_models::Review;
use hype_meter_store::{DocumentStore, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn review(id: i64, rating: u8) -> Review {
    Review {
        id,
        name: format!("Fan {}", id),
        rating,
        review: "Counting the days".to_string(),
        date: "Mar 1, 2026".to_string(),
        avatar: format!("https://ui-avatars.com/api/?name=Fan%20{}", id),
    }
}

/// In-memory stand-in for the remote document.
///
/// `document: None` behaves like an unreachable store.
pub struct FakeStore {
    document: Mutex<Option<Vec<Review>>>,
    fail_writes: bool,
    fetches: AtomicUsize,
    puts: Mutex<Vec<Vec<Review>>>,
}

impl FakeStore {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            document: Mutex::new(Some(reviews)),
            fail_writes: false,
            fetches: AtomicUsize::new(0),
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            document: Mutex::new(None),
            fail_writes: true,
            fetches: AtomicUsize::new(0),
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn read_only(reviews: Vec<Review>) -> Self {
        Self {
            fail_writes: true,
            ..Self::with_reviews(reviews)
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> Vec<Vec<Review>> {
        self.puts.lock().unwrap().clone()
    }

    pub fn document(&self) -> Option<Vec<Review>> {
        self.document.lock().unwrap().clone()
    }

    /// Simulate another client overwriting the document
    pub fn replace_document(&self, reviews: Vec<Review>) {
        *self.document.lock().unwrap() = Some(reviews);
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    fn store_name(&self) -> &str {
        "fake"
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.document
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::Status { status: 503, body: "unavailable".to_string() })
    }

    async fn put_reviews(&self, reviews: &[Review]) -> Result<(), StoreError> {
        self.puts.lock().unwrap().push(reviews.to_vec());
        if self.fail_writes {
            return Err(StoreError::Status { status: 500, body: "write failed".to_string() });
        }
        *self.document.lock().unwrap() = Some(reviews.to_vec());
        Ok(())
    }
}
