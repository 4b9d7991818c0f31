use feedback_admin_shared::PaginationControls;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: PaginationControls,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_select_page: Callback<u32>,
}

#[derive(Debug, PartialEq)]
enum PageSlot {
    Page(u32),
    Ellipsis(&'static str),
}

/// Previous / numbered pages / Next. An empty listing still renders both
/// arrows, disabled.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let controls = props.controls;
    let slots = visible_slots(controls.current, controls.total);

    let prev_onclick = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_| {
            if !controls.previous_disabled {
                on_previous.emit(());
            }
        })
    };

    let next_onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            if !controls.next_disabled {
                on_next.emit(());
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[rgba(var(--surface-rgb),0.95)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed",
        "disabled:pointer-events-none"
    );

    html! {
        <nav class="mt-10 flex flex-wrap items-center justify-center gap-3" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={base_btn_classes.clone()}
                disabled={controls.previous_disabled}
                onclick={prev_onclick}
            >
                { t::PREVIOUS }
            </button>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
                { for slots.into_iter().map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let active = page == controls.current;
                        let page_classes = classes!(
                            base_btn_classes.clone(),
                            active.then_some(
                                "bg-[var(--primary)] text-white border-transparent cursor-default"
                            )
                        );
                        let onclick = {
                            let on_select_page = props.on_select_page.clone();
                            Callback::from(move |_| on_select_page.emit(page))
                        };

                        html! {
                            <button
                                key={format!("page-{page}")}
                                type="button"
                                class={page_classes}
                                aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                                aria-current={active.then(|| AttrValue::from("page"))}
                                onclick={onclick}
                            >
                                { page }
                            </button>
                        }
                    }
                    PageSlot::Ellipsis(id) => html! {
                        <span
                            key={format!("ellipsis-{id}")}
                            class={classes!(base_btn_classes.clone(), "select-none", "opacity-60")}
                            aria-hidden="true"
                        >
                            {"..."}
                        </span>
                    },
                }) }
            </div>
            <button
                type="button"
                class={base_btn_classes}
                disabled={controls.next_disabled}
                onclick={next_onclick}
            >
                { t::NEXT }
            </button>
        </nav>
    }
}

/// Page buttons to show: all of them up to seven, otherwise the first, the
/// last and a window around `current` with ellipses for the gaps.
fn visible_slots(current: u32, total: u32) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total);
    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total.saturating_sub(4).max(2), total - 1)
    } else {
        (current - 2, current + 2)
    };

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));
    slots
}
