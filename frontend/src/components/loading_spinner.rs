use yew::prelude::*;

use crate::i18n::current::{common, loading_spinner as t};

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Large)]
    pub size: SpinnerSize,
    /// Show the text next to the spinner instead of only to screen readers.
    #[prop_or(false)]
    pub show_label: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let label_classes = if props.show_label {
        classes!("text-sm", "text-[var(--muted)]")
    } else {
        classes!("sr-only")
    };

    html! {
        <div
            class="flex items-center justify-center gap-3 p-6"
            role="status"
            aria-live="polite"
            aria-busy="true"
            aria-label={t::ARIA_LABEL}
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "bg-[conic-gradient(var(--primary),transparent)]",
                    "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
            />
            <span class={label_classes}>{ common::LOADING }</span>
        </div>
    }
}
