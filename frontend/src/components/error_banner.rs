use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    #[prop_or(AttrValue::from(t::TITLE))]
    pub title: AttrValue,
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Hide after three seconds. Off for errors that replace page content.
    #[prop_or(false)]
    pub auto_dismiss: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((*is_open, props.auto_dismiss), move |(visible, auto_dismiss)| {
            if *auto_dismiss && *visible {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    if !*is_open {
        return Html::default();
    }

    let close_button = props.on_close.is_some().then(|| {
        let dismiss = dismiss.clone();
        html! {
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full text-lg hover:bg-black/10"
                aria-label={t::CLOSE_ARIA}
                onclick={Callback::from(move |_| dismiss.emit(()))}
            >
                {"×"}
            </button>
        }
    });

    html! {
        <div
            class="error-banner flex w-full items-start gap-3 rounded-2xl border border-red-500/30 bg-red-500/10 px-5 py-4 text-sm"
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-2">
                <p class="text-base font-semibold">{ props.title.clone() }</p>
                if !props.message.trim().is_empty() {
                    <p class="text-[var(--muted)]">{ props.message.clone() }</p>
                }
                { props.children.clone() }
            </div>
            { close_button }
        </div>
    }
}
