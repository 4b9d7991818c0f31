use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found_page as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-3xl p-6">
            <h2 class="text-xl font-semibold">{ t::TITLE }</h2>
            <p class="mt-2 text-[var(--muted)]">{ t::DETAIL }</p>
            <Link<Route> to={Route::AdminFeedback} classes={classes!("mt-4", "inline-block", "text-[var(--primary)]")}>
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
