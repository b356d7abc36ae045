use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::section::Section;
use crate::state::MenuState;
use crate::Icon;

/// Fixed top bar. Wide viewports get the inline link list; narrow ones get a
/// toggle button that opens [`MobileMenu`].
#[component]
pub fn Navbar(brand: String) -> Element {
    let mut menu = use_signal(MenuState::default);
    let open = menu().is_open();

    rsx! {
        nav {
            class: "navbar",
            h1 { class: "navbar-brand", "{brand}" }

            div {
                class: "navbar-links",
                NavLinks { class: "nav-link" }
            }

            button {
                class: "navbar-toggle",
                r#type: "button",
                aria_label: "Toggle navigation",
                aria_expanded: if open { "true" } else { "false" },
                onclick: move |_| {
                    let next = menu().toggle();
                    tracing::debug!(open = next.is_open(), "mobile menu toggled");
                    menu.set(next);
                },
                if open {
                    Icon { icon: FaXmark, width: 24, height: 24, class: "navbar-icon-close" }
                } else {
                    Icon { icon: FaBars, width: 24, height: 24, class: "navbar-icon-open" }
                }
            }

            if open {
                MobileMenu {
                    on_navigate: move |section: Section| {
                        tracing::debug!(anchor = section.anchor(), "mobile menu closed by navigation");
                        menu.set(menu().close());
                    },
                }
            }
        }
    }
}

/// Vertical link list for narrow viewports. The link still follows its
/// `href`; `on_navigate` only reports which section was picked.
#[component]
pub fn MobileMenu(on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        div {
            class: "mobile-menu",
            for section in Section::NAV_ORDER {
                a {
                    key: "{section.anchor()}",
                    class: "mobile-menu-link",
                    href: section.href(),
                    onclick: move |_| on_navigate.call(section),
                    "{section.label()}"
                }
            }
        }
    }
}

/// Plain anchor links, shared by the navbar and the footer.
#[component]
pub fn NavLinks(class: String) -> Element {
    rsx! {
        for section in Section::NAV_ORDER {
            a {
                key: "{section.anchor()}",
                class: "{class}",
                href: section.href(),
                "{section.label()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render_to_string, Harness};

    fn app() -> Element {
        rsx! {
            Navbar { brand: "Rental Management" }
        }
    }

    fn assert_closed(html: &str) {
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("navbar-icon-open"));
        assert!(!html.contains("navbar-icon-close"));
        assert!(!html.contains("mobile-menu"));
    }

    #[test]
    fn test_closed_navbar_has_no_mobile_menu() {
        let html = render_to_string(app);
        assert!(html.contains("Rental Management"));
        assert_closed(&html);
    }

    #[test]
    fn test_mobile_menu_lists_every_link() {
        fn menu() -> Element {
            rsx! {
                MobileMenu { on_navigate: move |_| {} }
            }
        }

        let html = render_to_string(menu);
        assert_eq!(html.matches("mobile-menu-link").count(), Section::NAV_ORDER.len());
        for section in Section::NAV_ORDER {
            assert!(html.contains(&format!("href=\"{}\"", section.href())));
        }
    }

    #[test]
    fn test_toggle_opens_and_closes_menu() {
        let (mut harness, listeners) = Harness::mount(app);
        // The toggle is the only clickable element while the menu is closed.
        assert_eq!(listeners.len(), 1);
        let toggle = listeners[0];

        let links = harness.click(toggle);
        let html = harness.html();
        assert_eq!(links.len(), Section::NAV_ORDER.len());
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("navbar-icon-close"));
        assert!(!html.contains("navbar-icon-open"));
        assert_eq!(html.matches("mobile-menu-link").count(), Section::NAV_ORDER.len());

        let links = harness.click(toggle);
        assert!(links.is_empty());
        assert_closed(&harness.html());

        harness.click(toggle);
        assert!(harness.html().contains("class=\"mobile-menu\""));
    }

    #[test]
    fn test_following_a_link_closes_menu() {
        for index in 0..Section::NAV_ORDER.len() {
            let (mut harness, listeners) = Harness::mount(app);
            let links = harness.click(listeners[0]);
            assert!(harness.html().contains("class=\"mobile-menu\""));

            harness.click(links[index]);
            assert_closed(&harness.html());
        }
    }
}
