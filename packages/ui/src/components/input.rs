use dioxus::prelude::*;

/// An uncontrolled form input. Nothing reads its value.
#[component]
pub fn Input(id: String, name: String, r#type: String, placeholder: String) -> Element {
    rsx! {
        input {
            id: id,
            name: name,
            class: "input",
            r#type: r#type,
            placeholder: placeholder,
        }
    }
}
