use dioxus::prelude::*;

use crate::components::{Card, CardContent};
use crate::section::Section;
use crate::site::use_site;

#[component]
pub fn Features() -> Element {
    let site = use_site();

    rsx! {
        section {
            id: Section::Features.anchor(),
            class: "features",
            h2 { class: "section-title", "Key Features" }
            div {
                class: "features-grid",
                for (index, feature) in site.features.iter().enumerate() {
                    Card {
                        key: "{index}",
                        class: "feature-card",
                        CardContent {
                            h3 { class: "card-title", "{feature.title}" }
                            p { class: "card-text", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
