//! Registration form: name fields plus the shared credential rules.

use std::collections::HashSet;

use api::Backend;
use dioxus::prelude::*;
use store::SignUpInput;

use crate::components::{Button, ButtonVariant, Input};
use crate::navigate_to;
use crate::toast::{push_toast, use_toasts, ToastLevel};

#[component]
pub fn SignupForm() -> Element {
    let mut toasts = use_toasts();
    let mut input = use_signal(SignUpInput::default);
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

            let details = input.peek().clone();
            match Backend::from_env().register(&details).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "User registered successfully");
                    input.set(SignUpInput::default());
                    touched.set(HashSet::new());
                    navigate_to("/login");
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, &err.user_message());
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-form",
            h1 { "Create an account" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "firstname", "First Name" }
                        Input {
                            id: "firstname",
                            placeholder: "First name",
                            value: input().firstname,
                            invalid: show_errors("firstname"),
                            disabled: submitting(),
                            oninput: move |evt: FormEvent| {
                                touched.write().insert("firstname");
                                input.write().firstname = evt.value();
                            },
                        }
                        if show_errors("firstname") {
                            for message in report().field_messages("firstname") {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "lastname", "Last Name" }
                        Input {
                            id: "lastname",
                            placeholder: "Last name",
                            value: input().lastname,
                            invalid: show_errors("lastname"),
                            disabled: submitting(),
                            oninput: move |evt: FormEvent| {
                                touched.write().insert("lastname");
                                input.write().lastname = evt.value();
                            },
                        }
                        if show_errors("lastname") {
                            for message in report().field_messages("lastname") {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    }
                }

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
                        placeholder: "Choose a password",
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
                        span { "Creating account..." }
                    } else {
                        "Sign up"
                    }
                }
            }

            p {
                class: "auth-form-switch",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
