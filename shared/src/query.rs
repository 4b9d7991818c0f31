//! Query-string parameters for the feedback listing.
//!
//! The URL (and the backend endpoint) carry four keys: `page`, `size`, `sort`
//! and `order`. Every key is read as a raw string first so that one bad value
//! never rejects the whole query; each field then falls back to its own
//! default independently.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page used when the query carries no usable `page`.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the query carries no usable `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound for a requested page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field a feedback listing can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    /// Submitter name, compared case-insensitively.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Star rating.
    #[serde(rename = "rating")]
    Rating,
    /// Submission timestamp.
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl SortField {
    /// All sort fields in display order.
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Rating, SortField::CreatedAt];

    /// Parse the query-string spelling, `None` for anything unknown.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "name" => Some(Self::Name),
            "rating" => Some(Self::Rating),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    /// Query-string spelling.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Parse the query-string spelling, `None` for anything unknown.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Query-string spelling.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// One fetchable slice of feedback.
///
/// Built fresh for every navigation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Records per page, always within `1..=MAX_PAGE_SIZE`.
    pub size: u32,
    /// Sort field.
    pub sort: SortField,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

impl PageRequest {
    /// Same slice parameters, different page. Page 0 becomes page 1.
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// Canonical query carrying all four keys.
    pub fn to_query(&self) -> FeedbackQuery {
        FeedbackQuery {
            page: Some(self.page.to_string()),
            size: Some(self.size.to_string()),
            sort: Some(self.sort.as_param().to_string()),
            order: Some(self.order.as_param().to_string()),
        }
    }
}

/// Raw query parameters as they arrive from the URL or an HTTP request.
///
/// Deserializing this type cannot fail on bad values; validation happens in
/// [`FeedbackQuery::to_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackQuery {
    /// Requested page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Requested sort field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Requested sort direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl FeedbackQuery {
    /// Validate into a [`PageRequest`], defaulting each bad field on its own.
    pub fn to_request(&self) -> PageRequest {
        let page = self
            .page
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(DEFAULT_PAGE);
        let size = self
            .size
            .as_deref()
            .and_then(parse_positive)
            .map(|size| size.min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let sort = self
            .sort
            .as_deref()
            .and_then(SortField::from_param)
            .unwrap_or_default();
        let order = self
            .order
            .as_deref()
            .and_then(SortOrder::from_param)
            .unwrap_or_default();

        PageRequest {
            page,
            size,
            sort,
            order,
        }
    }
}

/// Accepts `"3"` and `"3.0"` style integers; rejects zero, negatives and
/// anything else.
fn parse_positive(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return (value >= 1).then_some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, size: Option<&str>, sort: Option<&str>, order: Option<&str>) -> FeedbackQuery {
        FeedbackQuery {
            page: page.map(str::to_string),
            size: size.map(str::to_string),
            sort: sort.map(str::to_string),
            order: order.map(str::to_string),
        }
    }

    #[test]
    fn empty_query_uses_defaults() {
        let request = FeedbackQuery::default().to_request();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort, SortField::Name);
        assert_eq!(request.order, SortOrder::Asc);
    }

    #[test]
    fn bad_fields_fall_back_independently() {
        let request = query(Some("abc"), Some("25"), Some("rating"), Some("sideways")).to_request();
        assert_eq!(request.page, 1);
        assert_eq!(request.size, 25);
        assert_eq!(request.sort, SortField::Rating);
        assert_eq!(request.order, SortOrder::Asc);
    }

    #[test]
    fn page_below_one_is_defaulted() {
        assert_eq!(query(Some("0"), None, None, None).to_request().page, 1);
        assert_eq!(query(Some("-4"), None, None, None).to_request().page, 1);
        assert_eq!(query(Some("2.5"), None, None, None).to_request().page, 1);
        assert_eq!(query(Some("4.0"), None, None, None).to_request().page, 4);
        assert_eq!(query(Some(" 7 "), None, None, None).to_request().page, 7);
    }

    #[test]
    fn oversized_page_size_is_capped() {
        let request = query(None, Some("5000"), None, None).to_request();
        assert_eq!(request.size, MAX_PAGE_SIZE);
        assert_eq!(query(None, Some("0"), None, None).to_request().size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn sort_params_use_wire_spelling() {
        let request = query(None, None, Some("createdAt"), Some("desc")).to_request();
        assert_eq!(request.sort, SortField::CreatedAt);
        assert_eq!(request.order, SortOrder::Desc);
        assert_eq!(SortField::from_param("created_at"), None);
    }

    #[test]
    fn canonical_query_validates_back_to_itself() {
        let request = PageRequest {
            page: 3,
            size: 20,
            sort: SortField::CreatedAt,
            order: SortOrder::Desc,
        };
        let query = request.to_query();
        assert_eq!(query.page.as_deref(), Some("3"));
        assert_eq!(query.sort.as_deref(), Some("createdAt"));
        assert_eq!(query.to_request(), request);
    }

    #[test]
    fn with_page_never_produces_page_zero() {
        assert_eq!(PageRequest::default().with_page(0).page, 1);
    }
}
