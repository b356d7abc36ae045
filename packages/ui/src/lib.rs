//! This crate contains the landing page and everything it is built from.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

pub mod section;
pub use section::Section;

pub mod state;
pub use state::{login_fields, LoginField, MenuState, OtpField, Role};

pub mod site;
pub use site::{use_site, SiteConfig, SiteConfigError};

mod navbar;
pub use navbar::{MobileMenu, NavLinks, Navbar};

mod hero;
pub use hero::Hero;

mod features;
pub use features::Features;

mod about;
pub use about::About;

mod login;
pub use login::{LoginPanel, LoginPanelView, LoginPortal};

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;

mod landing;
pub use landing::LandingPage;

#[cfg(test)]
mod testing;
