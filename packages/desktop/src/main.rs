use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Anchor links scroll inside the webview, so no router is needed here.
#[component]
fn App() -> Element {
    rsx! {
        ui::LandingPage {}
    }
}
