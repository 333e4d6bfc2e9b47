//! Cart page: lines, quantity controls, and the order summary.
//!
//! The cart list is a read-through cache of the backend's state. Quantity
//! changes post a signed delta, then resynchronize with a full refetch on
//! success and failure alike. No optimistic update, no local clamping at
//! the zero boundary. While a line's change is in flight its product id sits
//! in the pending set and the line's controls are disabled.

use api::Backend;
use dioxus::prelude::*;
use store::{cart_total, cart_total_items, CartLine, PendingSet};
use ui::{format_inr, push_toast, use_session, use_toasts, Footer, Navbar, ToastLevel, Toasts};

async fn load_cart(
    token: Option<String>,
    mut cart: Signal<Vec<CartLine>>,
    mut loading: Signal<bool>,
    mut toasts: Signal<Toasts>,
) {
    loading.set(true);
    match token {
        Some(token) => match Backend::from_env().fetch_cart(&token).await {
            Ok(lines) => cart.set(lines),
            Err(err) => {
                tracing::error!("cart fetch failed: {err}");
                push_toast(&mut toasts, ToastLevel::Error, &err.user_message());
            }
        },
        None => cart.set(Vec::new()),
    }
    loading.set(false);
}

#[component]
pub fn Cart() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let cart = use_signal(Vec::<CartLine>::new);
    let loading = use_signal(|| true);
    let mut pending = use_signal(PendingSet::new);

    // Load on mount and again whenever the session changes.
    let _loader = use_resource(move || {
        let token = session().token().map(str::to_string);
        load_cart(token, cart, loading, toasts)
    });

    let update_quantity = move |product_id: i64, delta: i64| {
        spawn(async move {
            pending.write().insert(product_id);
            let mut toasts = toasts;

            let token = session
                .peek()
                .token()
                .map(str::to_string)
                .unwrap_or_default();
            if let Err(err) = Backend::from_env()
                .mutate_cart(&token, product_id, delta)
                .await
            {
                tracing::error!("cart update failed: {err}");
                push_toast(&mut toasts, ToastLevel::Error, &err.user_message());
            }

            // Guaranteed cleanup, then the authoritative resync.
            pending.write().remove(product_id);
            let token = session.peek().token().map(str::to_string);
            load_cart(token, cart, loading, toasts).await;
        });
    };

    let lines = cart();
    let total = format_inr(cart_total(&lines));
    let total_items = cart_total_items(&lines);
    let item_word = if total_items == 1 { "item" } else { "items" };

    rsx! {
        div {
            class: "page",
            Navbar {}

            header {
                class: "hero hero--cart",
                div {
                    h1 { "Shopping Cart" }
                    p {
                        if loading() {
                            "Loading your items..."
                        } else {
                            "{total_items} {item_word} in your cart"
                        }
                    }
                }
                if !loading() && !lines.is_empty() {
                    div {
                        class: "hero-total",
                        p { "Total Amount" }
                        p { class: "hero-total-value", "{total}" }
                    }
                }
            }

            main {
                class: "cart-layout",

                if loading() {
                    div {
                        class: "cart-lines",
                        for index in 0..3 {
                            div {
                                key: "{index}",
                                class: "skeleton cart-line-skeleton",
                            }
                        }
                    }
                } else if lines.is_empty() {
                    div {
                        class: "empty-state",
                        h2 { "Your cart is empty" }
                        p {
                            "Looks like you haven't added any items to your cart yet. Start shopping to fill it up!"
                        }
                        a {
                            class: "btn btn--primary",
                            href: "/",
                            "Continue Shopping"
                        }
                    }
                } else {
                    div {
                        class: "cart-lines",
                        div {
                            class: "cart-lines-header",
                            h2 { "Cart Items" }
                            span { "{total_items} {item_word}" }
                        }
                        for (product_id, line) in lines.iter().map(|line| (line.product_id, line.clone())) {
                            CartLineRow {
                                key: "{line.id}",
                                line,
                                pending: pending().contains(product_id),
                                on_decrement: move |_| update_quantity(product_id, -1),
                                on_increment: move |_| update_quantity(product_id, 1),
                            }
                        }
                    }

                    aside {
                        class: "cart-summary",
                        h3 { "Order Summary" }
                        div {
                            class: "cart-summary-row",
                            span { "Items ({total_items})" }
                            span { "{total}" }
                        }
                        div {
                            class: "cart-summary-row",
                            span { "Shipping" }
                            span { class: "cart-summary-free", "Free" }
                        }
                        div {
                            class: "cart-summary-row cart-summary-row--total",
                            span { "Total" }
                            span { "{total}" }
                        }
                        button {
                            class: "btn btn--primary cart-summary-checkout",
                            "Proceed to Checkout"
                        }
                        p {
                            class: "cart-summary-note",
                            "Free shipping on orders over ₹999"
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

/// One cart line with its quantity controls.
///
/// The increment button is not rendered once the line holds the product's
/// whole stock; both buttons are disabled while this line has an update in
/// flight.
#[component]
fn CartLineRow(
    line: CartLine,
    pending: bool,
    on_decrement: EventHandler<MouseEvent>,
    on_increment: EventHandler<MouseEvent>,
) -> Element {
    let price = format_inr(line.product.price);
    let subtotal = format_inr(line.product.price * line.quantity);

    rsx! {
        div {
            class: "cart-line",
            img {
                class: "cart-line-image",
                src: "{line.product.image_url}",
                alt: "{line.product.title}",
            }
            div {
                class: "cart-line-details",
                if !line.product.category.is_empty() {
                    span { class: "cart-line-category", "{line.product.category}" }
                }
                h3 { "{line.product.title}" }
                p { class: "cart-line-price", "{price}" }
                p { class: "cart-line-subtotal", "Subtotal: {subtotal}" }
            }
            div {
                class: "cart-line-controls",
                button {
                    class: "cart-line-button cart-line-button--minus",
                    disabled: pending,
                    onclick: move |evt| on_decrement.call(evt),
                    if pending {
                        span { class: "spinner" }
                    } else {
                        "−"
                    }
                }
                span { class: "cart-line-quantity", "{line.quantity}" }
                if line.can_increment() {
                    button {
                        class: "cart-line-button cart-line-button--plus",
                        disabled: pending,
                        onclick: move |evt| on_increment.call(evt),
                        if pending {
                            span { class: "spinner" }
                        } else {
                            "+"
                        }
                    }
                }
            }
        }
    }
}
