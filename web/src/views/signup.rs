//! Signup page wrapping the shared registration form.

use dioxus::prelude::*;
use ui::{use_session, SignupForm};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();

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
                SignupForm {}
            }
        }
    }
}
