//! This crate contains all shared UI for the workspace.

use std::time::Duration;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod session;
pub use session::{use_session, AppSession, AppTokenStore, SessionProvider};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod price;
pub use price::format_inr;

mod product_card;
pub use product_card::ProductCard;

mod filters;
pub use filters::FilterPanel;

mod login_form;
pub use login_form::LoginForm;

mod signup_form;
pub use signup_form::SignupForm;

/// Full-page navigation, bypassing the client router.
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Platform-aware async sleep.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
