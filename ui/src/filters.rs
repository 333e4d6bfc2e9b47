//! Catalog filter panel.
//!
//! Binds directly to the shared [`CatalogQuery`] signal: every edit is one
//! query transition, and the catalog view answers each transition with one
//! fetch. Clear All resets the whole query in a single write.

use dioxus::prelude::*;
use store::{CatalogQuery, SortKey, SortOrder, PRICE_CEILING};

use crate::format_inr;
use crate::icons::FaFilter;
use crate::Icon;

const PRICE_STEP: i64 = 10_000;

#[component]
pub fn FilterPanel(query: Signal<CatalogQuery>) -> Element {
    let mut query = query;
    let current = query();
    let active = current.active_filter_count();
    let min_label = format_inr(current.min_price);
    let max_label = format_inr(current.max_price);
    let sort_by = current.sort_by.as_str();
    let order = current.order.as_str();

    rsx! {
        div {
            class: "filters",

            div {
                class: "filters-header",
                Icon { icon: FaFilter, width: 16, height: 16 }
                h2 { "Filters" }
                if active > 0 {
                    button {
                        class: "filters-clear",
                        onclick: move |_| query.write().clear_filters(),
                        "Clear All"
                    }
                }
            }

            div {
                class: "filters-field",
                label { "Search Products" }
                input {
                    r#type: "text",
                    placeholder: "Search for products...",
                    value: "{current.search}",
                    oninput: move |evt: FormEvent| query.write().search = evt.value(),
                }
            }

            div {
                class: "filters-field",
                label { "Category" }
                input {
                    r#type: "text",
                    placeholder: "Filter by category...",
                    value: "{current.category}",
                    oninput: move |evt: FormEvent| query.write().category = evt.value(),
                }
            }

            div {
                class: "filters-field",
                label { "Price Range" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{PRICE_CEILING}",
                    step: "{PRICE_STEP}",
                    value: "{current.min_price}",
                    oninput: move |evt: FormEvent| {
                        let min = evt.value().parse().unwrap_or(0);
                        let max = query.peek().max_price;
                        query.write().set_price_range(min, max);
                    },
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{PRICE_CEILING}",
                    step: "{PRICE_STEP}",
                    value: "{current.max_price}",
                    oninput: move |evt: FormEvent| {
                        let max = evt.value().parse().unwrap_or(PRICE_CEILING);
                        let min = query.peek().min_price;
                        query.write().set_price_range(min, max);
                    },
                }
                div {
                    class: "filters-price-labels",
                    span { "Min: {min_label}" }
                    span { "Max: {max_label}" }
                }
            }

            div {
                class: "filters-field",
                label { "Sort By" }
                select {
                    value: "{sort_by}",
                    onchange: move |evt: FormEvent| {
                        query.write().sort_by = SortKey::from_str(&evt.value());
                    },
                    option { value: "title", "Product Name" }
                    option { value: "price", "Price" }
                }
            }

            div {
                class: "filters-field",
                label { "Order" }
                select {
                    value: "{order}",
                    onchange: move |evt: FormEvent| {
                        query.write().order = SortOrder::from_str(&evt.value());
                    },
                    option { value: "asc", "Ascending (A-Z, Low-High)" }
                    option { value: "desc", "Descending (Z-A, High-Low)" }
                }
            }

            if active > 0 {
                div {
                    class: "filters-active",
                    span { "Active Filters" }
                    span { class: "filters-active-count", "{active}" }
                }
            }
        }
    }
}
