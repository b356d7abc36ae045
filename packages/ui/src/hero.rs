use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::section::Section;
use crate::site::use_site;

#[component]
pub fn Hero() -> Element {
    let site = use_site();

    rsx! {
        section {
            id: Section::Home.anchor(),
            class: "hero",
            h1 { class: "hero-headline", "{site.hero.headline}" }
            p { class: "hero-tagline", "{site.hero.tagline}" }
            div {
                class: "hero-actions",
                Button { "Get a Free Demo" }
                Button { variant: ButtonVariant::Outline, "Learn More" }
            }
        }
    }
}
