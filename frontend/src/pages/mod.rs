pub mod admin_feedback;
pub mod not_found;
