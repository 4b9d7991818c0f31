use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/feedback_admin/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/admin/feedback")]
    AdminFeedback,
    #[cfg(feature = "mock")]
    #[at("/feedback_admin/admin/feedback")]
    AdminFeedback,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/feedback_admin/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::AdminFeedback} /> },
        Route::AdminFeedback => html! { <pages::admin_feedback::AdminFeedbackPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
