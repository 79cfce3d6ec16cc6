use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, NavLink};

/// Signup screen. Same placeholder semantics as login: prevent default,
/// echo the fields, keep everything local.
#[component]
pub fn Signup(home: NavLink, login: NavLink) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "creator".to_string());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        println!(
            "[auth] signup submitted: {} <{}> as {}",
            name(),
            email(),
            role()
        );
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        div { class: "auth",
            div { class: "hero__glow hero__glow--purple", aria_hidden: "true" }
            div { class: "hero__glow hero__glow--orange", aria_hidden: "true" }

            div { class: "auth__card",
                div { class: "auth__logo",
                    {(home)("GoViral")}
                }

                h2 { class: "auth__title", {crate::t!("signup-title")} }
                p { class: "auth__subtitle", {crate::t!("signup-subtitle")} }

                form { class: "auth__form", onsubmit: on_submit,
                    div { class: "auth__field",
                        span { class: "auth__field-icon", "👤" }
                        input {
                            r#type: "text",
                            required: true,
                            placeholder: crate::t!("signup-name-placeholder"),
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div { class: "auth__field",
                        span { class: "auth__field-icon", "✉️" }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: crate::t!("signup-email-placeholder"),
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "auth__field",
                        span { class: "auth__field-icon", "🔒" }
                        input {
                            r#type: "password",
                            required: true,
                            placeholder: crate::t!("signup-password-placeholder"),
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div { class: "auth__role",
                        label { r#for: "signup-role", {crate::t!("signup-role-label")} }
                        select {
                            id: "signup-role",
                            value: "{role}",
                            oninput: move |evt: FormEvent| role.set(evt.value()),
                            option { value: "creator", {crate::t!("signup-role-creator")} }
                            option { value: "promoter", {crate::t!("signup-role-promoter")} }
                        }
                    }
                    Button { variant: ButtonVariant::Primary, submit: true,
                        {crate::t!("signup-submit")}
                    }
                }

                p { class: "auth__switch",
                    {crate::t!("signup-have-account")}
                    " "
                    {(login)(&crate::t!("signup-login-link"))}
                }
            }
        }
    }
}
