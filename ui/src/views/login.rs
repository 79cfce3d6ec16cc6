use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, NavLink};

/// Login screen. Placeholder semantics: the submit handler prevents the
/// browser's default submission and echoes the captured fields to the
/// console. Nothing is validated beyond native constraints, stored, or
/// transmitted.
#[component]
pub fn Login(home: NavLink, signup: NavLink) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        println!("[auth] login submitted: {} / {}", email(), password());
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }

        div { class: "auth",
            div { class: "hero__glow hero__glow--pink", aria_hidden: "true" }
            div { class: "hero__glow hero__glow--purple", aria_hidden: "true" }

            div { class: "auth__card",
                div { class: "auth__logo",
                    {(home)("GoViral")}
                }

                h2 { class: "auth__title", {crate::t!("login-title")} }
                p { class: "auth__subtitle", {crate::t!("login-subtitle")} }

                form { class: "auth__form", onsubmit: on_submit,
                    div { class: "auth__field",
                        span { class: "auth__field-icon", "✉️" }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: crate::t!("login-email-placeholder"),
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "auth__field",
                        span { class: "auth__field-icon", "🔒" }
                        input {
                            r#type: "password",
                            required: true,
                            placeholder: crate::t!("login-password-placeholder"),
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button { variant: ButtonVariant::Primary, submit: true,
                        {crate::t!("login-submit")}
                    }
                }

                p { class: "auth__switch",
                    {crate::t!("login-no-account")}
                    " "
                    {(signup)(&crate::t!("login-signup-link"))}
                }
            }
        }
    }
}
