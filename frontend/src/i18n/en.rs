pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREVIOUS: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod feedback_list {
    pub const EMPTY: &str = "No feedback found";
    pub const ANONYMOUS: &str = "Anonymous";
    pub const RATING_ARIA_TEMPLATE: &str = "Rated {} out of 5";
}

pub mod sort_toolbar {
    pub const SORT_LABEL: &str = "Sort by";
    pub const SIZE_LABEL: &str = "Per page";
    pub const FIELD_NAME: &str = "Name";
    pub const FIELD_RATING: &str = "Rating";
    pub const FIELD_CREATED_AT: &str = "Submitted";
    pub const ORDER_ASC: &str = "Ascending";
    pub const ORDER_DESC: &str = "Descending";
}

pub mod admin_feedback {
    pub const TITLE: &str = "Feedback";
    pub const SUMMARY_TEMPLATE: &str = "Page {} of {}";
    pub const ERROR_LOADING: &str = "Error loading feedbacks.";
    pub const NO_DATA: &str = "No data available.";
    pub const RETRY: &str = "Retry";
    pub const CLAMPED_TITLE: &str = "Page out of range";
    pub const CLAMPED_TEMPLATE: &str = "Page {} does not exist, showing page {} instead.";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const DETAIL: &str = "The page you requested does not exist.";
    pub const BACK: &str = "Back to feedback";
}
