//! Compile-time configuration for the frontend application.

/// Base URL of the feedback API, read at compile time from
/// `FEEDBACK_ADMIN_API_BASE`; defaults to the local backend.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("FEEDBACK_ADMIN_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Feedback pages kept in memory per session.
pub const CACHE_PAGES: usize = 32;
