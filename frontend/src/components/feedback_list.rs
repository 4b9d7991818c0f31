use feedback_admin_shared::FeedbackRecord;
use yew::prelude::*;

use crate::{
    i18n::{current::feedback_list as t, fill_one},
    utils::{format_ms, rating_stars},
};

#[derive(Properties, PartialEq)]
pub struct FeedbackListProps {
    pub feedbacks: Vec<FeedbackRecord>,
    /// Set while a newer page is loading and these rows are about to be
    /// replaced.
    #[prop_or(false)]
    pub dimmed: bool,
}

#[function_component(FeedbackList)]
pub fn feedback_list(props: &FeedbackListProps) -> Html {
    if props.feedbacks.is_empty() {
        return html! {
            <p class="py-10 text-center text-[var(--muted)]">{ t::EMPTY }</p>
        };
    }

    let list_classes = classes!(
        "grid",
        "gap-4",
        "transition-opacity",
        "duration-200",
        if props.dimmed { "opacity-60" } else { "opacity-100" }
    );

    html! {
        <ul class={list_classes} aria-busy={props.dimmed.to_string()}>
            { for props.feedbacks.iter().map(|feedback| html! {
                <FeedbackCard key={feedback.id.clone()} feedback={feedback.clone()} />
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct FeedbackCardProps {
    feedback: FeedbackRecord,
}

#[function_component(FeedbackCard)]
fn feedback_card(props: &FeedbackCardProps) -> Html {
    let feedback = &props.feedback;
    let name = if feedback.name.trim().is_empty() {
        t::ANONYMOUS.to_string()
    } else {
        feedback.name.clone()
    };

    html! {
        <li class="rounded-xl border border-[var(--border)] bg-[var(--surface)] p-5 shadow-sm">
            <div class="flex flex-wrap items-baseline justify-between gap-2">
                <div class="flex flex-col">
                    <span class="font-semibold text-[var(--text)]">{ name }</span>
                    if let Some(email) = feedback.email.as_ref() {
                        <a class="text-xs text-[var(--muted)]" href={format!("mailto:{email}")}>
                            { email.clone() }
                        </a>
                    }
                </div>
                <span
                    class="text-amber-500 tracking-[0.12em]"
                    aria-label={fill_one(t::RATING_ARIA_TEMPLATE, feedback.rating)}
                >
                    { rating_stars(feedback.rating) }
                </span>
            </div>
            <p class="mt-3 whitespace-pre-line text-sm leading-relaxed">{ feedback.comment.clone() }</p>
            <time class="mt-3 block text-xs text-[var(--muted)]">
                { format_ms(feedback.created_at_ms) }
            </time>
        </li>
    }
}
