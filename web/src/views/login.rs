//! Login page wrapping the shared sign-in form.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: nothing to do here.
    if session().is_logged_in() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "auth-brand", "Astrape" }
                LoginForm {}
            }
        }
    }
}
