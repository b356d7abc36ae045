use dioxus::prelude::*;

use crate::about::About;
use crate::contact::Contact;
use crate::features::Features;
use crate::footer::Footer;
use crate::hero::Hero;
use crate::login::LoginPortal;
use crate::navbar::Navbar;
use crate::site::SiteConfig;
use crate::LANDING_CSS;

/// The whole page: navbar, the five anchor sections in order, footer.
///
/// Provides [`SiteConfig`] to everything below it.
#[component]
pub fn LandingPage() -> Element {
    let site = use_context_provider(SiteConfig::load);

    rsx! {
        document::Title { "{site.brand.name}" }
        document::Stylesheet { href: LANDING_CSS }

        div {
            class: "landing",
            Navbar { brand: site.brand.name.clone() }
            main {
                Hero {}
                Features {}
                About {}
                LoginPortal {}
                Contact {}
            }
            Footer {}
        }
    }
}
