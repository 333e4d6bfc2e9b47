use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    class: "footer-brand",
                    h2 { "Astrape" }
                    p {
                        "Your one-stop tech gadget e-commerce store. Discover the latest and greatest in technology."
                    }
                }
                div {
                    class: "footer-links",
                    h3 { "Quick Links" }
                    a { href: "/", "Products" }
                    a { href: "#", "About" }
                    a { href: "#", "Contact" }
                    a { href: "#", "FAQs" }
                }
            }
            p {
                class: "footer-copy",
                "© Astrape. All rights reserved."
            }
        }
    }
}
