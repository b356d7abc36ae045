use dioxus::prelude::*;

use crate::navbar::NavLinks;
use crate::site::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site();

    rsx! {
        footer {
            class: "footer",
            p { "{site.footer.copyright}" }
            div {
                class: "footer-links",
                NavLinks { class: "footer-link" }
            }
        }
    }
}
