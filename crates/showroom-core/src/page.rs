//! # Page Composition
//!
//! The ordered section list and the configuration the page is built from.
//!
//! Reveal regions are declared here explicitly. Hosts hand
//! [`Page::reveal_regions`] to the observer instead of discovering regions by
//! querying markup.

use crate::observer::{RevealOptions, DEFAULT_REVEAL_CLASS};
use crate::{RegionId, ShowroomError};
use serde::{Deserialize, Serialize};

/// Sections of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    Stats,
    About,
    Features,
    Clients,
    Values,
    Contact,
    Footer,
}

impl Section {
    /// Every section in render order.
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Stats,
        Section::About,
        Section::Features,
        Section::Clients,
        Section::Values,
        Section::Contact,
        Section::Footer,
    ];

    /// Slug used as region id and CSS class.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::About => "about",
            Section::Features => "features",
            Section::Clients => "clients",
            Section::Values => "values",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    #[must_use]
    pub fn region_id(self) -> RegionId {
        RegionId::new(self.slug())
    }

    /// Whether the section fades in on scroll. The hero is on screen from the
    /// start and the footer is never animated.
    #[must_use]
    pub fn reveals(self) -> bool {
        !matches!(self, Section::Hero | Section::Footer)
    }
}

/// Page-level settings.
///
/// Smooth scrolling lives here rather than being toggled on the document as a
/// global side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub smooth_scroll: bool,
    pub include_footer: bool,
    pub reveal: RevealOptions,
    /// Class applied to a region once revealed.
    pub reveal_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            include_footer: true,
            reveal: RevealOptions::default(),
            reveal_class: DEFAULT_REVEAL_CLASS.to_string(),
        }
    }
}

impl PageConfig {
    /// Check settings that cannot be expressed in the types.
    ///
    /// The reveal class is written into markup, a stylesheet and a script, so
    /// it must be a plain CSS identifier.
    pub fn validate(&self) -> Result<(), ShowroomError> {
        let class = self.reveal_class.as_str();
        let plain = class
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        let starts_ok = class
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'-');
        if !plain || !starts_ok {
            return Err(ShowroomError::InvalidClassName(self.reveal_class.clone()));
        }
        Ok(())
    }
}

/// A composed page: configuration plus the sections it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    config: PageConfig,
    sections: Vec<Section>,
}

impl Page {
    /// Compose the page for `config`.
    #[must_use]
    pub fn compose(config: PageConfig) -> Self {
        let sections = Section::ALL
            .into_iter()
            .filter(|section| config.include_footer || *section != Section::Footer)
            .collect();
        Self { config, sections }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The regions to hand to the observer, in page order.
    #[must_use]
    pub fn reveal_regions(&self) -> Vec<RegionId> {
        self.sections
            .iter()
            .filter(|section| section.reveals())
            .map(|section| section.region_id())
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_has_every_section() {
        let page = Page::compose(PageConfig::default());
        assert_eq!(page.sections(), &Section::ALL);
    }

    #[test]
    fn footer_can_be_omitted() {
        let config = PageConfig {
            include_footer: false,
            ..PageConfig::default()
        };
        let page = Page::compose(config);
        assert!(!page.sections().contains(&Section::Footer));
        assert_eq!(page.sections().len(), 7);
    }

    #[test]
    fn reveal_class_must_be_identifier() {
        assert!(PageConfig::default().validate().is_ok());
        for bad in ["", "9lives", "fade in", "x\"><script>"] {
            let config = PageConfig {
                reveal_class: bad.to_string(),
                ..PageConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn reveal_regions_skip_hero_and_footer() {
        let page = Page::compose(PageConfig::default());
        let regions: Vec<_> = page
            .reveal_regions()
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();
        assert_eq!(
            regions,
            vec!["stats", "about", "features", "clients", "values", "contact"]
        );
    }
}
