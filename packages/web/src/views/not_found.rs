use dioxus::prelude::*;

/// Anything other than `/`. The page only has in-page anchors, so there is
/// nowhere to go but back.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| tracing::warn!("No page at /{}", path));

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            a { href: "/", "Back to home" }
        }
    }
}
