//! Admin listing of user feedback: a Yew single-page application that pages
//! through feedback records and keeps the page number in the URL.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
