use dioxus::prelude::*;

use crate::components::{Button, Card, CardContent, Input};
use crate::section::Section;
use crate::state::{login_fields, OtpField, Role};

/// The login section: one panel per role, side by side.
#[component]
pub fn LoginPortal() -> Element {
    rsx! {
        section {
            id: Section::Login.anchor(),
            class: "login",
            h2 { class: "section-title", "Login Portal" }
            p { class: "section-text", "Access your account securely as a Tenant or an Owner." }
            div {
                class: "login-panels",
                LoginPanel { role: Role::Tenant }
                LoginPanel { role: Role::Owner }
            }
        }
    }
}

/// A login form that owns its own OTP visibility.
#[component]
pub fn LoginPanel(role: Role) -> Element {
    let mut otp = use_signal(OtpField::default);

    rsx! {
        LoginPanelView {
            role: role,
            otp: otp(),
            on_request_otp: move |_| {
                if otp().is_shown() {
                    return;
                }
                tracing::debug!(role = role.as_str(), "otp input revealed");
                otp.set(otp().reveal());
            },
        }
    }
}

/// Stateless rendering of a login form for a given OTP visibility.
///
/// The form is a placeholder: the Login button is not a submitter and the
/// inputs are never read.
#[component]
pub fn LoginPanelView(role: Role, otp: OtpField, on_request_otp: EventHandler<()>) -> Element {
    rsx! {
        Card {
            class: "login-card",
            CardContent {
                h3 { class: "card-title login-title", "{role.title()}" }
                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    for field in login_fields(otp) {
                        Input {
                            key: "{field.name()}",
                            id: "{role.as_str()}-{field.name()}",
                            name: "{field.name()}",
                            r#type: "{field.input_type()}",
                            placeholder: "{field.placeholder()}",
                        }
                    }
                    Button { class: "btn-block", "Login" }
                    div {
                        class: "login-links",
                        button {
                            class: "link-button",
                            r#type: "button",
                            onclick: move |_| on_request_otp.call(()),
                            "Login with OTP"
                        }
                        a { class: "link", href: "#", "Forgot Password?" }
                    }
                }
            }
        }
    }
}
