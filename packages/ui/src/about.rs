use dioxus::prelude::*;

use crate::components::Button;
use crate::section::Section;
use crate::site::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();

    rsx! {
        section {
            id: Section::About.anchor(),
            class: "about",
            h2 { class: "section-title", "About Our Software" }
            p { class: "section-text", "{site.about.blurb}" }
            Button { "Explore Features" }
        }
    }
}
