use feedback_admin_shared::PageView;
use yew::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner,
        feedback_list::FeedbackList,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        sort_toolbar::SortToolbar,
    },
    hooks::{use_feedback_pages, use_scroll_to_top_on},
    i18n::{current::admin_feedback as t, fill_two},
};

/// Admin listing of user feedback at `/admin/feedback`.
#[function_component(AdminFeedbackPage)]
pub fn admin_feedback_page() -> Html {
    let pages = use_feedback_pages();
    let state = pages.state();
    let controls = state.controls();
    let request = state.current_request();
    use_scroll_to_top_on(controls.current);

    let body = match state.view() {
        PageView::Loading => html! { <LoadingSpinner size={SpinnerSize::Large} show_label={true} /> },
        PageView::NoData => html! {
            <p class="py-10 text-center text-[var(--muted)]">{ t::NO_DATA }</p>
        },
        PageView::Failed {
            message,
            ..
        } => {
            let on_retry = pages.on_retry.clone();
            html! {
                <ErrorBanner title={t::ERROR_LOADING} message={message.to_string()}>
                    <button
                        type="button"
                        class="rounded-lg border border-[var(--border)] px-3 py-1 text-sm font-semibold"
                        onclick={Callback::from(move |_| on_retry.emit(()))}
                    >
                        { t::RETRY }
                    </button>
                </ErrorBanner>
            }
        },
        PageView::Ready {
            list,
            refreshing,
            ..
        } => html! {
            <>
                if refreshing {
                    <LoadingSpinner size={SpinnerSize::Small} />
                }
                <FeedbackList feedbacks={list.to_vec()} dimmed={refreshing} />
            </>
        },
    };

    let clamp_notice = pages.clamp_notice.map(|notice| {
        html! {
            <div class="mb-4">
                <ErrorBanner
                    title={t::CLAMPED_TITLE}
                    message={fill_two(t::CLAMPED_TEMPLATE, notice.requested, notice.shown)}
                    on_close={pages.on_dismiss_notice.clone()}
                    auto_dismiss={true}
                />
            </div>
        }
    });

    let summary = (controls.total > 0)
        .then(|| html! {
            <p class="text-sm text-[var(--muted)]">
                { fill_two(t::SUMMARY_TEMPLATE, controls.current, controls.total) }
            </p>
        });

    html! {
        <main class="mx-auto w-full max-w-4xl p-6">
            <header class="mb-6 flex flex-wrap items-baseline justify-between gap-2">
                <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
                { summary }
            </header>
            { clamp_notice }
            <SortToolbar
                request={request}
                on_sort={pages.on_sort.clone()}
                on_resize={pages.on_resize.clone()}
            />
            { body }
            <Pagination
                controls={controls}
                on_previous={pages.on_previous.clone()}
                on_next={pages.on_next.clone()}
                on_select_page={pages.on_select_page.clone()}
            />
        </main>
    }
}
