//! Sign-in form with per-field validation.
//!
//! The input re-validates on every keystroke; submit stays disabled until
//! the report is clean, and a `submitting` flag swallows re-entrant submits
//! so a double click cannot fire two sign-in requests.

use std::collections::HashSet;

use api::Backend;
use dioxus::prelude::*;
use store::SignInInput;

use crate::components::{Button, ButtonVariant, Input};
use crate::navigate_to;
use crate::session::use_session;
use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn LoginForm() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let mut input = use_signal(SignInInput::default);
    let mut touched = use_signal(HashSet::<&'static str>::new);
    let mut submitting = use_signal(|| false);

    let report = use_memo(move || input().validate());
    let show_errors =
        move |field: &'static str| touched().contains(field) && report().has_field_errors(field);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() || !report.peek().is_valid() {
            return;
        }
        spawn(async move {
            submitting.set(true);

            let credentials = input.peek().clone();
            match Backend::from_env().sign_in(&credentials).await {
                Ok(token) => {
                    session.write().login(&token);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Welcome back! Sign in successful.",
                    );
                    input.set(SignInInput::default());
                    touched.set(HashSet::new());
                    navigate_to("/");
                }
                Err(err) => {
                    tracing::error!("sign-in failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, &err.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-form",
            h1 { "Welcome Back" }
            p { class: "auth-form-subtitle", "Sign in to your account to continue" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "email", "Email Address" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email address",
                        value: input().email,
                        invalid: show_errors("email"),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| {
                            touched.write().insert("email");
                            input.write().email = evt.value();
                        },
                    }
                    if show_errors("email") {
                        for message in report().field_messages("email") {
                            p { class: "field-error", "{message}" }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: input().password,
                        invalid: show_errors("password"),
                        disabled: submitting(),
                        oninput: move |evt: FormEvent| {
                            touched.write().insert("password");
                            input.write().password = evt.value();
                        },
                    }
                    if show_errors("password") {
                        for message in report().field_messages("password") {
                            p { class: "field-error", "{message}" }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-form-submit".to_string(),
                    r#type: "submit".to_string(),
                    disabled: submitting() || !report().is_valid(),
                    if submitting() {
                        span { class: "spinner" }
                        span { "Signing in..." }
                    } else {
                        "Sign In"
                    }
                }
            }

            p {
                class: "auth-form-switch",
                "Don't have an account? "
                a { href: "/signup", "Create one here" }
            }
        }
    }
}
