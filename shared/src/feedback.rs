//! Feedback records and page slicing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::query::{PageRequest, SortField, SortOrder};

/// One piece of user feedback as listed in the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Stable identifier.
    pub id: String,
    /// Submitter display name.
    pub name: String,
    /// Submitter contact address, if given.
    #[serde(default)]
    pub email: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Free-form feedback text.
    pub comment: String,
    /// Submission time in milliseconds since the Unix epoch.
    pub created_at_ms: i64,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records of this page, in display order.
    pub list: Vec<T>,
    /// Number of pages for the requested page size; 0 for an empty listing.
    pub total_pages: u32,
    /// Number of records across all pages.
    #[serde(default)]
    pub total: u64,
}

/// A page of feedback records.
pub type FeedbackPage = Page<FeedbackRecord>;

impl<T> Page<T> {
    /// Whether `page` lies past the last page of a non-empty listing.
    pub fn is_beyond_end(&self, page: u32) -> bool {
        self.total_pages > 0 && page > self.total_pages
    }
}

/// Number of pages needed for `len` records at `size` per page.
pub fn total_pages(len: usize, size: u32) -> u32 {
    let size = size.max(1) as usize;
    let pages = len.div_ceil(size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Stable sort by the requested field; names compare case-insensitively.
pub fn sort_feedbacks(records: &mut [FeedbackRecord], sort: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &FeedbackRecord, b: &FeedbackRecord, sort: SortField) -> Ordering {
    match sort {
        SortField::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortField::Rating => a.rating.cmp(&b.rating),
        SortField::CreatedAt => a.created_at_ms.cmp(&b.created_at_ms),
    }
}

/// Cut one page out of an already sorted slice.
///
/// Pages past the end come back empty but still report `total_pages`, so a
/// caller holding a stale page number can clamp.
pub fn paginate_slice<T: Clone>(sorted: &[T], page: u32, size: u32) -> Page<T> {
    let size = size.max(1);
    let total_pages = total_pages(sorted.len(), size);
    let start = (page.max(1) as usize - 1).saturating_mul(size as usize);
    let list = if start >= sorted.len() {
        Vec::new()
    } else {
        let end = usize::min(start + size as usize, sorted.len());
        sorted[start..end].to_vec()
    };

    Page {
        list,
        total_pages,
        total: sorted.len() as u64,
    }
}

/// Sort a copy of `records` and slice out the requested page.
pub fn query_page(records: &[FeedbackRecord], request: &PageRequest) -> FeedbackPage {
    let mut sorted = records.to_vec();
    sort_feedbacks(&mut sorted, request.sort, request.order);
    paginate_slice(&sorted, request.page, request.size)
}
