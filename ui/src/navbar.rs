//! Top navigation bar: brand, cart link, and the login/logout controls.

use dioxus::prelude::*;

use crate::icons::{FaCartShopping, FaUser};
use crate::session::use_session;
use crate::{navigate_to, Icon};

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let logged_in = session().is_logged_in();

    rsx! {
        nav {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                "Astrape"
            }

            div {
                class: "navbar-links",
                a {
                    class: "navbar-link",
                    href: "/cart",
                    Icon { icon: FaCartShopping, width: 18, height: 18 }
                    span { "Cart" }
                }

                if logged_in {
                    span {
                        class: "navbar-user",
                        title: "Signed in",
                        Icon { icon: FaUser, width: 16, height: 16 }
                    }
                    button {
                        class: "navbar-button navbar-button--logout",
                        onclick: move |_| {
                            session.write().logout();
                            navigate_to("/");
                        },
                        "Log out"
                    }
                } else {
                    a {
                        class: "navbar-link",
                        href: "/login",
                        "Login"
                    }
                    a {
                        class: "navbar-button",
                        href: "/signup",
                        "Signup"
                    }
                }
            }
        }
    }
}
