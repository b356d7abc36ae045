//! Anchor sections of the landing page and their navigation links.

/// A page region addressable by a same-page `#fragment` link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Features,
    About,
    Login,
    Contact,
}

impl Section {
    /// Vertical order in which the sections are laid out.
    pub const PAGE_ORDER: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::About,
        Section::Login,
        Section::Contact,
    ];

    /// Order of the links in the navbar and the footer.
    pub const NAV_ORDER: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::About,
        Section::Contact,
        Section::Login,
    ];

    /// The `id` carried by the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::About => "about",
            Section::Login => "login",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Features => "#features",
            Section::About => "#about",
            Section::Login => "#login",
            Section::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::About => "About",
            Section::Login => "Login",
            Section::Contact => "Contact",
        }
    }
}
