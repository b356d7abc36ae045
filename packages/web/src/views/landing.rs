use dioxus::prelude::*;
use ui::LandingPage;

#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingPage {}
    }
}
