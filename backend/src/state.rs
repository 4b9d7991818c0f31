use std::sync::Arc;

use feedback_admin_shared::{feedback::query_page, FeedbackPage, FeedbackRecord, PageRequest};
use tokio::sync::RwLock;

/// In-memory feedback set; nothing is persisted.
#[derive(Clone)]
pub struct AppState {
    feedbacks: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl AppState {
    pub fn new(feedbacks: Vec<FeedbackRecord>) -> Self {
        Self {
            feedbacks: Arc::new(RwLock::new(feedbacks)),
        }
    }

    /// Sort and slice one page. Pages past the end are empty but still report
    /// the page count.
    pub async fn page(&self, request: &PageRequest) -> FeedbackPage {
        let feedbacks = self.feedbacks.read().await;
        query_page(&feedbacks, request)
    }

    pub async fn feedback_count(&self) -> usize {
        self.feedbacks.read().await.len()
    }
}
