//! # Site content: `site.toml`
//!
//! All copy shown on the landing page (brand, hero, features, contact
//! details, footer) is defined once, in the `Default` impls below.
//! `assets/site.toml` is embedded at compile time and overrides only what it
//! names:
//!
//! ```toml
//! [brand]
//! name = "Acme Rentals"
//!
//! [[features]]
//! title = "Parking"
//! description = "Assign slots to flats."
//! ```
//!
//! [`SiteConfig::load`] never fails: a file that does not parse or validate is
//! logged and replaced by the defaults.

use dioxus::prelude::use_context;
use serde::Deserialize;
use thiserror::Error;

const SITE_TOML: &str = include_str!("../assets/site.toml");

#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("site.toml lists no features")]
    MissingFeatures,
    #[error("site.toml field `{field}` is blank")]
    Blank { field: &'static str },
}

/// Top-level site content.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub features: FeatureList,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Rental Management".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub headline: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Smart Rental & Maintenance Management Software".into(),
            tagline: "Simplify rent collection, utility tracking, and tenant communication \
                      for 650+ flats — all in one platform."
                .into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub blurb: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            blurb: "Our platform helps apartment societies and property managers automate \
                    rent collection, track bills, manage tenants, and send smart reminders \
                    — making community management simple and efficient."
                .into(),
        }
    }
}

/// One card in the features grid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The features grid, in display order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FeatureList(pub Vec<Feature>);

impl Default for FeatureList {
    fn default() -> Self {
        Self(vec![
            Feature::new(
                "Rent Collection & Receipts",
                "Automatic rent generation, instant digital receipts, and real-time tracking dashboard.",
            ),
            Feature::new(
                "Utility Bill Tracking",
                "Monitor electricity, water, and maintenance bills with reminders and reports.",
            ),
            Feature::new(
                "Smart Reminders",
                "Automatic alerts for due dates, rent payments, and maintenance schedules.",
            ),
            Feature::new(
                "Tenant & Owner Management",
                "Manage secure profiles, KYC, agreements, and occupancy status easily.",
            ),
            Feature::new(
                "Dashboard & Reports",
                "Transparent financial insights and exportable reports in PDF or Excel.",
            ),
            Feature::new(
                "Secure & Reliable",
                "Role-based access, data encryption, and cloud backups for 24/7 availability.",
            ),
        ])
    }
}

impl FeatureList {
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            intro: "We’d love to show you how our software can simplify your apartment operations."
                .into(),
            email: "info@rentalsystem.com".into(),
            phone: "+91 98765 43210".into(),
            address: "Hyderabad, India".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            copyright: "© 2025 Sri Industries Global Solutions. All Rights Reserved.".into(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the content file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Content embedded in the binary, falling back to the defaults.
    pub fn load() -> Self {
        match Self::from_toml(SITE_TOML) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SiteConfigError> {
        if self.features.is_empty() {
            return Err(SiteConfigError::MissingFeatures);
        }

        let required = [
            ("brand.name", &self.brand.name),
            ("hero.headline", &self.hero.headline),
            ("contact.email", &self.contact.email),
            ("contact.phone", &self.contact.phone),
            ("contact.address", &self.contact.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SiteConfigError::Blank { field });
            }
        }

        if self.features.iter().any(|f| f.title.trim().is_empty()) {
            return Err(SiteConfigError::Blank {
                field: "features.title",
            });
        }
        Ok(())
    }
}

/// Site content provided by [`LandingPage`](crate::LandingPage).
pub fn use_site() -> SiteConfig {
    use_context::<SiteConfig>()
}
