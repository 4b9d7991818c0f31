//! Data model and page-state synchronization shared by the feedback admin
//! frontend and backend.
//!
//! Everything here compiles for `wasm32` as well as native targets.

pub mod error;
pub mod feedback;
pub mod query;
pub mod sync;

pub use error::FetchError;
pub use feedback::{FeedbackPage, FeedbackRecord, Page};
pub use query::{FeedbackQuery, PageRequest, SortField, SortOrder};
pub use sync::{
    compute_cache_key, CacheKey, Completion, FetchPlan, FetchTicket, PageStateSynchronizer,
    PageView, PaginationControls,
};
