//! Catalog page: filter sidebar plus the product grid.
//!
//! The product list re-fetches on every query transition and each response
//! wholly replaces the displayed list. Responses carry a sequence ticket so
//! a slow early fetch cannot overwrite a faster later one.

use api::Backend;
use dioxus::prelude::*;
use store::{CatalogQuery, Product, RequestSequence, SortOrder};
use ui::{push_toast, use_toasts, FilterPanel, Footer, Navbar, ProductCard, ToastLevel};

#[component]
pub fn Home() -> Element {
    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let query = use_signal(CatalogQuery::default);
    let sequence = use_hook(RequestSequence::new);
    let mut toasts = use_toasts();

    // One fetch per query change; newest ticket wins.
    let _loader = use_resource(move || {
        let query = query();
        let sequence = sequence.clone();
        async move {
            let ticket = sequence.begin();
            loading.set(true);
            match Backend::from_env().list_products(&query).await {
                Ok(list) => {
                    if sequence.is_current(ticket) {
                        products.set(list);
                    }
                }
                Err(err) => {
                    tracing::error!("product fetch failed: {err}");
                    if sequence.is_current(ticket) {
                        push_toast(&mut toasts, ToastLevel::Error, &err.user_message());
                    }
                }
            }
            if sequence.is_current(ticket) {
                loading.set(false);
            }
        }
    });

    let current = query();
    let count = products().len();
    let sort_label = match current.order {
        SortOrder::Asc => "A-Z",
        SortOrder::Desc => "Z-A",
    };
    let sort_by = current.sort_by.as_str();

    rsx! {
        div {
            class: "page",
            Navbar {}

            header {
                class: "hero",
                h1 { "Discover Amazing Products" }
                p { "Explore our curated collection of premium products designed to enhance your lifestyle" }
            }

            main {
                class: "catalog-layout",

                aside {
                    class: "catalog-sidebar",
                    FilterPanel { query }
                }

                section {
                    class: "catalog-results",

                    div {
                        class: "catalog-results-header",
                        div {
                            h2 {
                                if loading() {
                                    "Loading..."
                                } else {
                                    "{count} Products Found"
                                }
                            }
                            p {
                                class: "catalog-results-scope",
                                if !current.search.is_empty() {
                                    "Showing results for \"{current.search}\""
                                }
                                if !current.category.is_empty() {
                                    " in {current.category}"
                                }
                            }
                        }
                        if count > 0 && !loading() {
                            p {
                                class: "catalog-results-sort",
                                "Sorted by: "
                                span { "{sort_by} ({sort_label})" }
                            }
                        }
                    }

                    if loading() {
                        div {
                            class: "product-grid",
                            for index in 0..8 {
                                div {
                                    key: "{index}",
                                    class: "skeleton product-card-skeleton",
                                }
                            }
                        }
                    } else if count == 0 {
                        div {
                            class: "empty-state",
                            h3 { "No Products Found" }
                            p {
                                "We couldn't find any products matching your criteria. Try adjusting your filters or search terms."
                            }
                        }
                    } else {
                        div {
                            class: "product-grid",
                            for product in products() {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}
