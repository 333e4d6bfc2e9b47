//! Product card with an add-to-cart action.
//!
//! The button walks through three visual states: idle, adding (spinner,
//! disabled), and a transient "Added to Cart!" that resets after two
//! seconds. A failed add (typically an anonymous user) toasts and leaves
//! the card usable.

use std::time::Duration;

use api::Backend;
use dioxus::prelude::*;
use store::Product;

use crate::session::use_session;
use crate::toast::{push_toast, use_toasts, ToastLevel};
use crate::{format_inr, Icon};
use crate::icons::{FaCartShopping, FaCheck};

const ADDED_RESET: Duration = Duration::from_secs(2);

#[component]
pub fn ProductCard(product: Product) -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut adding = use_signal(|| false);
    let mut added = use_signal(|| false);
    let mut image_loaded = use_signal(|| false);

    let product_id = product.id;
    let price = format_inr(product.price);

    let add_to_cart = move |_| async move {
        if adding() || added() {
            return;
        }
        adding.set(true);

        // Latest token, not a captured copy: a logout between render and
        // click must not send a stale credential.
        let token = session
            .peek()
            .token()
            .map(str::to_string)
            .unwrap_or_default();

        match Backend::from_env().mutate_cart(&token, product_id, 1).await {
            Ok(()) => {
                added.set(true);
            }
            Err(err) => {
                tracing::error!("add to cart failed: {err}");
                push_toast(&mut toasts, ToastLevel::Error, "Login and please try again.");
            }
        }
        adding.set(false);

        if added() {
            crate::sleep(ADDED_RESET).await;
            added.set(false);
        }
    };

    let image_class = if image_loaded() {
        "product-card-image product-card-image--loaded"
    } else {
        "product-card-image"
    };
    let add_class = if added() {
        "product-card-add product-card-add--added"
    } else {
        "product-card-add"
    };

    rsx! {
        div {
            class: "product-card",

            div {
                class: "product-card-media",
                if !image_loaded() {
                    div { class: "skeleton product-card-image-skeleton" }
                }
                img {
                    class: "{image_class}",
                    src: "{product.image_url}",
                    alt: "{product.title}",
                    onload: move |_| image_loaded.set(true),
                    onerror: move |_| image_loaded.set(true),
                }
                if !product.category.is_empty() {
                    span { class: "product-card-category", "{product.category}" }
                }
            }

            div {
                class: "product-card-body",
                h3 { class: "product-card-title", "{product.title}" }
                if !product.description.is_empty() {
                    p { class: "product-card-description", "{product.description}" }
                }
                span { class: "product-card-price", "{price}" }

                button {
                    class: "{add_class}",
                    disabled: adding() || added(),
                    onclick: add_to_cart,
                    if adding() {
                        span { class: "spinner" }
                        span { "Adding to Cart..." }
                    } else if added() {
                        Icon { icon: FaCheck, width: 16, height: 16 }
                        span { "Added to Cart!" }
                    } else {
                        Icon { icon: FaCartShopping, width: 16, height: 16 }
                        span { "Add to Cart" }
                    }
                }
            }
        }
    }
}
