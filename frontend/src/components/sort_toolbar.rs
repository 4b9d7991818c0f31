use feedback_admin_shared::{PageRequest, SortField, SortOrder};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::current::sort_toolbar as t;

const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

#[derive(Properties, PartialEq)]
pub struct SortToolbarProps {
    pub request: PageRequest,
    pub on_sort: Callback<(SortField, SortOrder)>,
    pub on_resize: Callback<u32>,
}

fn field_label(field: SortField) -> &'static str {
    match field {
        SortField::Name => t::FIELD_NAME,
        SortField::Rating => t::FIELD_RATING,
        SortField::CreatedAt => t::FIELD_CREATED_AT,
    }
}

#[function_component(SortToolbar)]
pub fn sort_toolbar(props: &SortToolbarProps) -> Html {
    let request = props.request;

    let on_field_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(field) = SortField::from_param(&select.value()) {
                on_sort.emit((field, request.order));
            }
        })
    };

    let on_order_toggle = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |_| on_sort.emit((request.sort, request.order.toggled())))
    };

    let on_size_change = {
        let on_resize = props.on_resize.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Ok(size) = select.value().parse::<u32>() {
                on_resize.emit(size);
            }
        })
    };

    let order_label = match request.order {
        SortOrder::Asc => t::ORDER_ASC,
        SortOrder::Desc => t::ORDER_DESC,
    };
    let select_classes = classes!(
        "h-9",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-2",
        "text-sm"
    );

    html! {
        <div class="mb-6 flex flex-wrap items-center gap-4 text-sm">
            <label class="flex items-center gap-2">
                <span class="text-[var(--muted)]">{ t::SORT_LABEL }</span>
                <select class={select_classes.clone()} onchange={on_field_change}>
                    { for SortField::ALL.into_iter().map(|field| html! {
                        <option
                            value={field.as_param()}
                            selected={field == request.sort}
                        >
                            { field_label(field) }
                        </option>
                    }) }
                </select>
            </label>
            <button
                type="button"
                class={classes!(select_classes.clone(), "font-semibold")}
                aria-pressed={(request.order == SortOrder::Desc).to_string()}
                onclick={on_order_toggle}
            >
                { order_label }
            </button>
            <label class="flex items-center gap-2">
                <span class="text-[var(--muted)]">{ t::SIZE_LABEL }</span>
                <select class={select_classes} onchange={on_size_change}>
                    { for PAGE_SIZES.into_iter().map(|size| html! {
                        <option value={size.to_string()} selected={size == request.size}>
                            { size }
                        </option>
                    }) }
                </select>
            </label>
        </div>
    }
}
