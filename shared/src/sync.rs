//! Keeps the URL page, the displayed page and the page cache in agreement.
//!
//! The synchronizer is a plain state machine: it never performs I/O. Callers
//! feed it the request validated from the URL ([`PageStateSynchronizer::request`]),
//! perform the network fetch it asks for, and hand the outcome back with the
//! ticket they were given ([`PageStateSynchronizer::complete`]). Tickets carry
//! a sequence number; only the most recently issued one may change what is
//! displayed.

use std::{fmt, num::NonZeroUsize, ops::RangeInclusive};

use lru::LruCache;

use crate::{
    error::FetchError,
    feedback::Page,
    query::{PageRequest, SortField, SortOrder, MAX_PAGE_SIZE},
};

/// Pages kept in the cache when no capacity is given.
pub const DEFAULT_CACHE_PAGES: usize = 32;

/// Deterministic identity of one fetchable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    page: u32,
    size: u32,
    sort: SortField,
    order: SortOrder,
}

impl CacheKey {
    /// Key for `request`; equal requests give equal keys.
    pub fn of(request: &PageRequest) -> Self {
        Self {
            page: request.page,
            size: request.size,
            sort: request.sort,
            order: request.order,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feedbacks:{}:{}:{}:{}", self.page, self.size, self.sort, self.order)
    }
}

/// Cache key for `request`.
pub fn compute_cache_key(request: &PageRequest) -> CacheKey {
    CacheKey::of(request)
}

/// Handle for one network fetch. Must be returned to
/// [`PageStateSynchronizer::complete`] together with the fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    request: PageRequest,
}

impl FetchTicket {
    /// Monotonically increasing issue number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The request to fetch.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// What the caller has to do after [`PageStateSynchronizer::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    /// Served from the cache and already displayed.
    Cached,
    /// The same request is already in flight; nothing to do.
    InFlight,
    /// Fetch `ticket.request()` and report back.
    Fetch(FetchTicket),
    /// The page is out of range; replace the URL with this request instead.
    Redirect(PageRequest),
}

/// Result of handing a fetch outcome back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The page is now displayed.
    Committed,
    /// The fetch failed and the error is now displayed.
    Failed,
    /// A newer request superseded this one; nothing displayed changed.
    Discarded,
    /// The resolved page count puts the request out of range; replace the URL
    /// with this request.
    Redirect(PageRequest),
}

/// What the page should render right now.
#[derive(Debug, PartialEq, Eq)]
pub enum PageView<'a, T> {
    /// First request still in flight; nothing to show yet.
    Loading,
    /// Records to show. `refreshing` is set while a newer page is loading
    /// and `list` still belongs to the previous one.
    Ready {
        /// Records in display order.
        list: &'a [T],
        /// Page number to highlight.
        page: u32,
        /// Page count of the listing.
        total_pages: u32,
        /// Whether a newer request is in flight.
        refreshing: bool,
    },
    /// The latest fetch failed.
    Failed {
        /// Failure detail.
        message: &'a str,
        /// Page that failed to load.
        page: u32,
    },
    /// No response and nothing loading.
    NoData,
}

/// State of the Previous / page / Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    /// Highlighted page.
    pub current: u32,
    /// Page count; 0 until known or for an empty listing.
    pub total: u32,
    /// Whether Previous is disabled.
    pub previous_disabled: bool,
    /// Whether Next is disabled.
    pub next_disabled: bool,
}

impl PaginationControls {
    /// Every selectable page number.
    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.total
    }
}

#[derive(Debug, Clone, Copy)]
struct KnownTotal {
    size: u32,
    total_pages: u32,
}

/// Reconciles URL, displayed page and page cache.
pub struct PageStateSynchronizer<T> {
    current: PageRequest,
    displayed_page: u32,
    known_total: Option<KnownTotal>,
    cache: LruCache<CacheKey, Page<T>>,
    next_seq: u64,
    in_flight: Option<FetchTicket>,
    shown: Option<Page<T>>,
    failure: Option<String>,
    /// A redirect was handed out and the clamped request has not arrived yet.
    awaiting_redirect: bool,
    fetches_issued: u64,
}

impl<T: Clone> Default for PageStateSynchronizer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_PAGES)
    }
}

impl<T: Clone> PageStateSynchronizer<T> {
    /// Synchronizer caching at most `cache_pages` pages (at least one).
    pub fn new(cache_pages: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_pages).unwrap_or(NonZeroUsize::MIN);
        Self {
            current: PageRequest::default(),
            displayed_page: 1,
            known_total: None,
            cache: LruCache::new(capacity),
            next_seq: 0,
            in_flight: None,
            shown: None,
            failure: None,
            awaiting_redirect: false,
            fetches_issued: 0,
        }
    }

    /// The request the displayed state is converging on.
    pub fn current_request(&self) -> PageRequest {
        self.current
    }

    /// Page number the UI highlights.
    pub fn displayed_page(&self) -> u32 {
        self.displayed_page
    }

    /// Page count for the current page size, once a page of that size has
    /// resolved.
    pub fn total_pages(&self) -> Option<u32> {
        self.known_total
            .filter(|known| known.size == self.current.size)
            .map(|known| known.total_pages)
    }

    /// Number of network fetches handed out so far.
    pub fn fetches_issued(&self) -> u64 {
        self.fetches_issued
    }

    /// Number of pages currently cached.
    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }

    /// Make `request` the current one.
    ///
    /// Called whenever the validated URL query changes. Serves cached pages
    /// immediately, asks for a fetch otherwise, and refuses out-of-range pages
    /// once the page count for this page size is known.
    pub fn request(&mut self, request: PageRequest) -> FetchPlan {
        let clamped = request.with_page(self.clamp_page(request.page, request.size));
        if clamped != request {
            tracing::debug!(from = request.page, to = clamped.page, "clamping requested page");
            self.displayed_page = clamped.page;
            self.failure = None;
            self.awaiting_redirect = true;
            return FetchPlan::Redirect(clamped);
        }

        self.awaiting_redirect = false;
        self.current = request;
        self.displayed_page = request.page;

        if self.in_flight.is_some_and(|ticket| ticket.request == request) {
            return FetchPlan::InFlight;
        }

        self.failure = None;
        let key = CacheKey::of(&request);
        if let Some(page) = self.cache.get(&key).cloned() {
            tracing::debug!(key = %key, "feedback page cache hit");
            self.record_total(request.size, page.total_pages);
            self.shown = Some(page);
            self.in_flight = None;
            return FetchPlan::Cached;
        }

        self.next_seq += 1;
        self.fetches_issued += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            request,
        };
        tracing::debug!(key = %key, seq = ticket.seq, "feedback page cache miss");
        self.in_flight = Some(ticket);
        FetchPlan::Fetch(ticket)
    }

    /// Hand back the outcome of a fetch started from `ticket`.
    ///
    /// Successful pages are cached even when superseded; only the latest
    /// ticket may change what is displayed. Failures are never cached.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<T>, FetchError>,
    ) -> Completion {
        let key = CacheKey::of(&ticket.request);
        let latest = self.in_flight == Some(ticket);

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                if !latest {
                    tracing::debug!(key = %key, seq = ticket.seq, "discarding superseded failure");
                    return Completion::Discarded;
                }
                tracing::warn!(key = %key, seq = ticket.seq, "feedback page fetch failed: {err}");
                self.in_flight = None;
                self.failure = Some(err.to_string());
                return Completion::Failed;
            },
        };

        let out_of_range = page.is_beyond_end(ticket.request.page)
            || (page.total_pages == 0 && ticket.request.page > 1);
        if !out_of_range {
            self.cache.put(key, page.clone());
        }

        if !latest {
            tracing::debug!(key = %key, seq = ticket.seq, "discarding superseded response");
            return Completion::Discarded;
        }

        self.in_flight = None;
        self.record_total(ticket.request.size, page.total_pages);

        if out_of_range {
            let clamped = ticket.request.with_page(page.total_pages.max(1));
            tracing::debug!(
                from = ticket.request.page,
                to = clamped.page,
                total_pages = page.total_pages,
                "requested page is past the end"
            );
            self.displayed_page = clamped.page;
            self.awaiting_redirect = true;
            return Completion::Redirect(clamped);
        }

        self.failure = None;
        self.shown = Some(page);
        Completion::Committed
    }

    /// Move to `target`, clamped into `[1, total_pages]`.
    ///
    /// Updates the displayed page at once and returns the request the URL
    /// should now carry. Moving to the current page returns the current
    /// request unchanged, which the cache serves without a fetch. Until the
    /// page count for the current size is known, the displayed page is the
    /// upper bound.
    pub fn paginate(&mut self, target: u32) -> PageRequest {
        let last = self.total_pages().unwrap_or(self.displayed_page).max(1);
        let page = target.clamp(1, last);
        self.displayed_page = page;
        self.current.with_page(page)
    }

    /// [`Self::paginate`] to the page before the displayed one.
    pub fn previous(&mut self) -> PageRequest {
        self.paginate(self.displayed_page.saturating_sub(1))
    }

    /// [`Self::paginate`] to the page after the displayed one.
    pub fn next(&mut self) -> PageRequest {
        self.paginate(self.displayed_page.saturating_add(1))
    }

    /// Change the sort; starts over at page 1.
    pub fn resort(&mut self, sort: SortField, order: SortOrder) -> PageRequest {
        self.displayed_page = 1;
        PageRequest {
            page: 1,
            sort,
            order,
            ..self.current
        }
    }

    /// Change the page size; starts over at page 1.
    pub fn resize(&mut self, size: u32) -> PageRequest {
        self.displayed_page = 1;
        PageRequest {
            page: 1,
            size: size.clamp(1, MAX_PAGE_SIZE),
            ..self.current
        }
    }

    /// Fetch the current request again after a failure.
    pub fn retry(&mut self) -> FetchPlan {
        self.failure = None;
        let current = self.current;
        self.request(current)
    }

    /// What to render.
    pub fn view(&self) -> PageView<'_, T> {
        if let Some(message) = self.failure.as_deref() {
            return PageView::Failed {
                message,
                page: self.displayed_page,
            };
        }

        let pending = self.in_flight.is_some() || self.awaiting_redirect;
        match &self.shown {
            Some(page) => PageView::Ready {
                list: &page.list,
                page: self.displayed_page,
                total_pages: page.total_pages,
                refreshing: pending,
            },
            None if pending => PageView::Loading,
            None => PageView::NoData,
        }
    }

    /// State of the pagination controls.
    pub fn controls(&self) -> PaginationControls {
        let total = self.total_pages().unwrap_or(0);
        let current = self.displayed_page;
        PaginationControls {
            current,
            total,
            previous_disabled: total == 0 || current <= 1,
            next_disabled: total == 0 || current >= total,
        }
    }

    fn record_total(&mut self, size: u32, total_pages: u32) {
        self.known_total = Some(KnownTotal {
            size,
            total_pages,
        });
    }

    /// Clamp against the page count known for `size`; unknown counts only
    /// enforce the lower bound.
    fn clamp_page(&self, page: u32, size: u32) -> u32 {
        let page = page.max(1);
        match self.known_total {
            Some(known) if known.size == size => page.min(known.total_pages.max(1)),
            _ => page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::paginate_slice;

    type Synchronizer = PageStateSynchronizer<u32>;

    fn dataset(len: u32) -> Vec<u32> {
        (1..=len).collect()
    }

    /// Serve `ticket` from an in-memory dataset.
    fn serve(data: &[u32], ticket: &FetchTicket) -> Result<Page<u32>, FetchError> {
        let request = ticket.request();
        Ok(paginate_slice(data, request.page, request.size))
    }

    fn expect_fetch(plan: FetchPlan) -> FetchTicket {
        match plan {
            FetchPlan::Fetch(ticket) => ticket,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    /// Request `request` and, if a fetch is needed, resolve it against `data`.
    fn load(sync: &mut Synchronizer, data: &[u32], request: PageRequest) -> FetchPlan {
        let plan = sync.request(request);
        if let FetchPlan::Fetch(ticket) = plan {
            let result = serve(data, &ticket);
            assert_eq!(sync.complete(ticket, result), Completion::Committed);
        }
        plan
    }

    fn size(size: u32) -> PageRequest {
        PageRequest {
            size,
            ..PageRequest::default()
        }
    }

    #[test]
    fn cache_key_is_deterministic() {
        let a = PageRequest::default().with_page(3);
        let b = PageRequest::default().with_page(3);
        assert_eq!(compute_cache_key(&a), compute_cache_key(&b));
        assert_ne!(compute_cache_key(&a), compute_cache_key(&a.with_page(4)));
        assert_eq!(compute_cache_key(&a).to_string(), "feedbacks:3:10:name:asc");
    }

    #[test]
    fn first_request_shows_loading() {
        let mut sync = Synchronizer::default();
        assert_eq!(sync.view(), PageView::NoData);
        let ticket = expect_fetch(sync.request(PageRequest::default()));
        assert_eq!(sync.view(), PageView::Loading);

        let data = dataset(25);
        assert_eq!(sync.complete(ticket, serve(&data, &ticket)), Completion::Committed);
        match sync.view() {
            PageView::Ready {
                list,
                page,
                total_pages,
                refreshing,
            } => {
                assert_eq!(list, &dataset(10)[..]);
                assert_eq!(page, 1);
                assert_eq!(total_pages, 3);
                assert!(!refreshing);
            },
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn paginate_within_range_lands_on_target() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        for target in 1..=3 {
            let request = sync.paginate(target);
            assert_eq!(sync.displayed_page(), target);
            assert_eq!(request.page, target);
            assert_eq!(request.to_query().page.as_deref(), Some(target.to_string().as_str()));
            load(&mut sync, &data, request);
            assert_eq!(sync.displayed_page(), target);
        }
    }

    #[test]
    fn paginate_clamps_both_ends() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        assert_eq!(sync.paginate(0).page, 1);
        assert_eq!(sync.displayed_page(), 1);
        assert_eq!(sync.paginate(99).page, 3);
        assert_eq!(sync.displayed_page(), 3);
    }

    #[test]
    fn next_from_first_page_enables_previous() {
        let data = dataset(30);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        let controls = sync.controls();
        assert_eq!(controls.total, 3);
        assert!(controls.previous_disabled);
        assert!(!controls.next_disabled);

        let request = sync.next();
        assert_eq!(request.page, 2);
        assert_eq!(request.to_query().page.as_deref(), Some("2"));
        assert_eq!(sync.controls().current, 2);
        assert!(!sync.controls().previous_disabled);
        assert!(!sync.controls().next_disabled);

        let target = sync.paginate(3);
        load(&mut sync, &data, target);
        assert!(sync.controls().next_disabled);
        assert_eq!(sync.next().page, 3);
    }

    #[test]
    fn empty_listing_disables_both_controls() {
        let mut sync = Synchronizer::default();
        load(&mut sync, &[], PageRequest::default());

        let controls = sync.controls();
        assert_eq!(controls.total, 0);
        assert!(controls.previous_disabled);
        assert!(controls.next_disabled);
        assert_eq!(controls.pages().count(), 0);
        match sync.view() {
            PageView::Ready {
                list,
                total_pages,
                ..
            } => {
                assert!(list.is_empty());
                assert_eq!(total_pages, 0);
            },
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(sync.paginate(4).page, 1);
    }

    #[test]
    fn repeated_requests_hit_the_cache() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());
        load(&mut sync, &data, PageRequest::default().with_page(2));
        assert_eq!(sync.fetches_issued(), 2);

        assert_eq!(sync.request(PageRequest::default()), FetchPlan::Cached);
        assert_eq!(sync.request(PageRequest::default().with_page(2)), FetchPlan::Cached);
        assert_eq!(sync.fetches_issued(), 2);
        assert_eq!(sync.cached_pages(), 2);
    }

    #[test]
    fn paginate_to_current_page_is_a_cache_hit() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        let request = sync.paginate(1);
        assert_eq!(request, sync.current_request());
        assert_eq!(sync.request(request), FetchPlan::Cached);
        assert_eq!(sync.fetches_issued(), 1);
    }

    #[test]
    fn different_sort_is_a_different_page() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default().with_page(2));

        let resorted = sync.resort(SortField::Rating, SortOrder::Desc);
        assert_eq!(resorted.page, 1);
        assert_eq!(sync.displayed_page(), 1);
        assert!(matches!(sync.request(resorted), FetchPlan::Fetch(_)));
    }

    #[test]
    fn duplicate_request_while_in_flight_is_not_refetched() {
        let mut sync = Synchronizer::default();
        let first = sync.request(PageRequest::default());
        assert!(matches!(first, FetchPlan::Fetch(_)));
        assert_eq!(sync.request(PageRequest::default()), FetchPlan::InFlight);
        assert_eq!(sync.fetches_issued(), 1);
    }

    #[test]
    fn url_page_past_the_end_clamps_to_last_page() {
        let data = dataset(30);
        let mut sync = Synchronizer::default();

        let ticket = expect_fetch(sync.request(PageRequest::default().with_page(5)));
        let redirect = sync.complete(ticket, serve(&data, &ticket));
        let clamped = PageRequest::default().with_page(3);
        assert_eq!(redirect, Completion::Redirect(clamped));
        assert_eq!(sync.displayed_page(), 3);
        assert_eq!(sync.view(), PageView::Loading);
        assert_eq!(sync.cached_pages(), 0);

        load(&mut sync, &data, clamped);
        assert_eq!(sync.displayed_page(), 3);
        assert_eq!(sync.controls().current, 3);

        // Once the page count is known, out-of-range requests are never issued.
        assert_eq!(
            sync.request(PageRequest::default().with_page(7)),
            FetchPlan::Redirect(clamped)
        );
        assert_eq!(sync.fetches_issued(), 2);
    }

    #[test]
    fn page_count_from_another_size_does_not_clamp() {
        let data = dataset(30);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, size(10));

        let request = size(5).with_page(5);
        assert!(matches!(sync.request(request), FetchPlan::Fetch(_)));
    }

    #[test]
    fn failure_after_success_replaces_the_list() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        let target = sync.paginate(2);
        let ticket = expect_fetch(sync.request(target));
        match sync.view() {
            PageView::Ready {
                list,
                page,
                refreshing,
                ..
            } => {
                assert_eq!(list, &dataset(10)[..]);
                assert_eq!(page, 2);
                assert!(refreshing);
            },
            other => panic!("unexpected view {other:?}"),
        }

        let outcome = sync.complete(ticket, Err(FetchError::Http {
            status: 500,
        }));
        assert_eq!(outcome, Completion::Failed);
        assert_eq!(sync.view(), PageView::Failed {
            message: "HTTP error: 500",
            page: 2,
        });
        assert_eq!(sync.cached_pages(), 1);
    }

    #[test]
    fn retry_refetches_after_failure() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        let ticket = expect_fetch(sync.request(PageRequest::default()));
        sync.complete(ticket, Err(FetchError::Network("offline".to_string())));

        let ticket = expect_fetch(sync.retry());
        assert_eq!(sync.view(), PageView::Loading);
        assert_eq!(sync.complete(ticket, serve(&data, &ticket)), Completion::Committed);
        assert_eq!(sync.fetches_issued(), 2);
    }

    #[test]
    fn navigating_away_from_failure_uses_cache() {
        let data = dataset(25);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());
        let target = sync.paginate(2);
        let ticket = expect_fetch(sync.request(target));
        sync.complete(ticket, Err(FetchError::Decode("bad json".to_string())));

        let target = sync.paginate(1);
        assert_eq!(sync.request(target), FetchPlan::Cached);
        assert!(matches!(sync.view(), PageView::Ready { page: 1, .. }));
    }

    #[test]
    fn only_the_latest_response_is_committed() {
        let data = dataset(50);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());

        let target = sync.paginate(2);
        let second = expect_fetch(sync.request(target));
        let target = sync.paginate(3);
        let third = expect_fetch(sync.request(target));
        assert!(third.seq() > second.seq());

        assert_eq!(sync.complete(third, serve(&data, &third)), Completion::Committed);
        assert_eq!(sync.complete(second, serve(&data, &second)), Completion::Discarded);

        match sync.view() {
            PageView::Ready {
                list,
                page,
                refreshing,
                ..
            } => {
                assert_eq!(page, 3);
                assert_eq!(list.first(), Some(&21));
                assert!(!refreshing);
            },
            other => panic!("unexpected view {other:?}"),
        }
        // The superseded response is still reusable.
        assert_eq!(sync.request(PageRequest::default().with_page(2)), FetchPlan::Cached);
    }

    #[test]
    fn stale_failure_does_not_hide_newer_page() {
        let data = dataset(50);
        let mut sync = Synchronizer::default();
        let first = expect_fetch(sync.request(PageRequest::default()));
        let second = expect_fetch(sync.request(PageRequest::default().with_page(2)));

        assert_eq!(sync.complete(second, serve(&data, &second)), Completion::Committed);
        let outcome = sync.complete(first, Err(FetchError::Network("timeout".to_string())));
        assert_eq!(outcome, Completion::Discarded);
        assert!(matches!(sync.view(), PageView::Ready { page: 2, .. }));
    }

    #[test]
    fn cache_is_bounded() {
        let data = dataset(50);
        let mut sync = Synchronizer::new(2);
        for page in 1..=3 {
            load(&mut sync, &data, PageRequest::default().with_page(page));
        }
        assert_eq!(sync.cached_pages(), 2);
        assert!(matches!(
            sync.request(PageRequest::default().with_page(1)),
            FetchPlan::Fetch(_)
        ));
    }

    #[test]
    fn failed_resize_forgets_page_count_of_old_size() {
        let data = dataset(30);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());
        assert_eq!(sync.controls().total, 3);

        let resized = sync.resize(100);
        let ticket = expect_fetch(sync.request(resized));
        assert_eq!(sync.controls().total, 0);
        let outcome = sync.complete(ticket, Err(FetchError::Http {
            status: 500,
        }));
        assert_eq!(outcome, Completion::Failed);

        let controls = sync.controls();
        assert_eq!(controls.total, 0);
        assert!(controls.previous_disabled);
        assert!(controls.next_disabled);
        assert_eq!(sync.total_pages(), None);
        assert_eq!(sync.next(), resized);
        assert_eq!(sync.paginate(3), resized);
        assert_eq!(sync.displayed_page(), 1);
    }

    #[test]
    fn redirect_clears_previous_failure() {
        let data = dataset(30);
        let mut sync = Synchronizer::default();
        load(&mut sync, &data, PageRequest::default());
        let target = sync.paginate(2);
        let ticket = expect_fetch(sync.request(target));
        sync.complete(ticket, Err(FetchError::Network("offline".to_string())));
        assert!(matches!(sync.view(), PageView::Failed { .. }));

        let plan = sync.request(PageRequest::default().with_page(7));
        assert_eq!(plan, FetchPlan::Redirect(PageRequest::default().with_page(3)));
        assert!(matches!(sync.view(), PageView::Ready {
            page: 3,
            refreshing: true,
            ..
        }));
    }

    #[test]
    fn resize_caps_and_restarts() {
        let mut sync = Synchronizer::default();
        let request = sync.resize(500);
        assert_eq!(request.size, MAX_PAGE_SIZE);
        assert_eq!(request.page, 1);
        assert_eq!(sync.resize(0).size, 1);
    }
}
