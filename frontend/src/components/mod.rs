// Rendering pieces of the feedback admin view.

pub mod error_banner;
pub mod feedback_list;
pub mod loading_spinner;
pub mod pagination;
pub mod sort_toolbar;
