use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use feedback_admin_shared::{
    Completion, FeedbackQuery, FeedbackRecord, FetchPlan, PageRequest, PageStateSynchronizer,
    SortField, SortOrder,
};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api::fetch_feedback_page, config::CACHE_PAGES, router::Route};

type SharedSynchronizer = Rc<RefCell<PageStateSynchronizer<FeedbackRecord>>>;

/// The URL asked for a page past the end and was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampNotice {
    pub requested: u32,
    pub shown: u32,
}

/// Handle returned by [`use_feedback_pages`].
#[derive(Clone)]
pub struct FeedbackPages {
    sync: SharedSynchronizer,
    pub clamp_notice: Option<ClampNotice>,
    pub on_select_page: Callback<u32>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_sort: Callback<(SortField, SortOrder)>,
    pub on_resize: Callback<u32>,
    pub on_retry: Callback<()>,
    pub on_dismiss_notice: Callback<()>,
}

impl FeedbackPages {
    /// Read access for rendering. Do not hold across callbacks.
    pub fn state(&self) -> Ref<'_, PageStateSynchronizer<FeedbackRecord>> {
        self.sync.borrow()
    }
}

/// Glue between the synchronizer, the router and the scheduler.
#[derive(Clone)]
struct Driver {
    sync: SharedSynchronizer,
    navigator: Option<Navigator>,
    redraw: UseForceUpdateHandle,
    clamp_notice: UseStateHandle<Option<ClampNotice>>,
}

impl Driver {
    /// Put `request` into the URL through the router. A new page gets its own
    /// history entry; re-selecting the current page only rewrites the entry.
    fn navigate(&self, request: PageRequest) {
        let current = self.sync.borrow().current_request();
        if let Some(navigator) = self.navigator.as_ref() {
            let query = request.to_query();
            let result = if request == current {
                navigator.replace_with_query(&Route::AdminFeedback, &query)
            } else {
                navigator.push_with_query(&Route::AdminFeedback, &query)
            };
            if let Err(err) = result {
                web_sys::console::error_1(&format!("Failed to update URL: {:?}", err).into());
            }
        }
        self.redraw.force_update();
    }

    fn redirect(&self, requested_page: u32, clamped: PageRequest) {
        self.clamp_notice.set(Some(ClampNotice {
            requested: requested_page,
            shown: clamped.page,
        }));
        if let Some(navigator) = self.navigator.as_ref() {
            if let Err(err) = navigator.replace_with_query(&Route::AdminFeedback, &clamped.to_query())
            {
                web_sys::console::error_1(&format!("Failed to update URL: {:?}", err).into());
            }
        }
        self.redraw.force_update();
    }

    fn run(&self, plan: FetchPlan, requested: PageRequest) {
        match plan {
            FetchPlan::Cached | FetchPlan::InFlight => self.redraw.force_update(),
            FetchPlan::Redirect(clamped) => self.redirect(requested.page, clamped),
            FetchPlan::Fetch(ticket) => {
                self.redraw.force_update();
                let driver = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_feedback_page(ticket.request()).await;
                    if let Err(err) = &result {
                        web_sys::console::error_1(
                            &format!("Feedback fetch failed ({}): {}", ticket.seq(), err).into(),
                        );
                    }

                    let completion = driver.sync.borrow_mut().complete(ticket, result);
                    match completion {
                        Completion::Redirect(clamped) => {
                            driver.redirect(ticket.request().page, clamped)
                        },
                        Completion::Committed | Completion::Failed => driver.redraw.force_update(),
                        Completion::Discarded => {},
                    }
                });
            },
        }
    }
}

/// Paged, URL-synchronized feedback listing.
///
/// The router's validated query is the only source of the requested page:
/// every control writes the URL through the navigator, and the effect below
/// turns URL changes into cache lookups or fetches.
///
/// # Example
/// ```rust,ignore
/// #[function_component(Listing)]
/// fn listing() -> Html {
///     let pages = use_feedback_pages();
///     let controls = pages.state().controls();
///     html! {
///         <Pagination
///             controls={controls}
///             on_previous={pages.on_previous.clone()}
///             on_next={pages.on_next.clone()}
///             on_select_page={pages.on_select_page.clone()}
///         />
///     }
/// }
/// ```
#[hook]
pub fn use_feedback_pages() -> FeedbackPages {
    let location = use_location();
    let navigator = use_navigator();
    let requested = location
        .as_ref()
        .and_then(|loc| loc.query::<FeedbackQuery>().ok())
        .unwrap_or_default()
        .to_request();
    let sync = use_mut_ref(|| PageStateSynchronizer::<FeedbackRecord>::new(CACHE_PAGES));
    let redraw = use_force_update();
    let clamp_notice = use_state(|| None::<ClampNotice>);

    let driver = Driver {
        sync: sync.clone(),
        navigator,
        redraw,
        clamp_notice: clamp_notice.clone(),
    };

    {
        let driver = driver.clone();
        use_effect_with(requested, move |request| {
            let plan = driver.sync.borrow_mut().request(*request);
            driver.run(plan, *request);
            || ()
        });
    }

    let on_select_page = {
        let driver = driver.clone();
        Callback::from(move |page: u32| {
            let request = driver.sync.borrow_mut().paginate(page);
            driver.navigate(request);
        })
    };

    let on_previous = {
        let driver = driver.clone();
        Callback::from(move |_| {
            let request = driver.sync.borrow_mut().previous();
            driver.navigate(request);
        })
    };

    let on_next = {
        let driver = driver.clone();
        Callback::from(move |_| {
            let request = driver.sync.borrow_mut().next();
            driver.navigate(request);
        })
    };

    let on_sort = {
        let driver = driver.clone();
        Callback::from(move |(sort, order): (SortField, SortOrder)| {
            let request = driver.sync.borrow_mut().resort(sort, order);
            driver.navigate(request);
        })
    };

    let on_resize = {
        let driver = driver.clone();
        Callback::from(move |size: u32| {
            let request = driver.sync.borrow_mut().resize(size);
            driver.navigate(request);
        })
    };

    let on_retry = {
        let driver = driver.clone();
        Callback::from(move |_| {
            let current = driver.sync.borrow().current_request();
            let plan = driver.sync.borrow_mut().retry();
            driver.run(plan, current);
        })
    };

    let on_dismiss_notice = {
        let clamp_notice = clamp_notice.clone();
        Callback::from(move |_| clamp_notice.set(None))
    };

    FeedbackPages {
        sync,
        clamp_notice: *clamp_notice,
        on_select_page,
        on_previous,
        on_next,
        on_sort,
        on_resize,
        on_retry,
        on_dismiss_notice,
    }
}

/// Scroll back to the top whenever `page` changes, so a new page starts at
/// its first row.
#[hook]
pub fn use_scroll_to_top_on(page: u32) {
    use_effect_with(page, move |_| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        || ()
    });
}
