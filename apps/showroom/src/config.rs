//! # Site Configuration
//!
//! JSON configuration for the CLI and server. Every field is optional;
//! missing fields take the defaults below.
//!
//! ```json
//! {
//!   "smooth_scroll": true,
//!   "include_footer": true,
//!   "reveal": { "threshold": "0.1", "margin": "0px 0px -50px 0px", "class": "animate-fade-in" },
//!   "server": { "addr": "127.0.0.1:8080", "cors": false }
//! }
//! ```
//!
//! Threshold, margin and class are validated while loading, so a bad config
//! fails before anything is served.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use showroom_core::observer::{DEFAULT_MARGIN, DEFAULT_REVEAL_CLASS};
use showroom_core::{Insets, PageConfig, RevealOptions, Threshold};
use std::net::SocketAddr;
use std::path::Path;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// Reveal behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealSettings {
    pub threshold: Threshold,
    pub margin: Insets,
    pub class: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            margin: DEFAULT_MARGIN,
            class: DEFAULT_REVEAL_CLASS.to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub addr: String,
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            cors: false,
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub smooth_scroll: bool,
    pub include_footer: bool,
    pub reveal: RevealSettings,
    pub server: ServerSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            include_footer: true,
            reveal: RevealSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl SiteConfig {
    /// Load from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let config = match path {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|e| AppError::file(path, e))?;
                Self::from_json(&text)?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(text)?;
        config.page_config().validate()?;
        config.socket_addr()?;
        Ok(config)
    }

    /// Observer options derived from the reveal settings.
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions::new(self.reveal.threshold, self.reveal.margin)
    }

    /// Page settings handed to the core.
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            smooth_scroll: self.smooth_scroll,
            include_footer: self.include_footer,
            reveal: self.reveal_options(),
            reveal_class: self.reveal.class.clone(),
        }
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        self.server
            .addr
            .parse()
            .map_err(|source| AppError::Addr {
                addr: self.server.addr.clone(),
                source,
            })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_json("{}").ok();
        assert_eq!(config, Some(SiteConfig::default()));
    }

    #[test]
    fn defaults_match_page_defaults() {
        assert_eq!(SiteConfig::default().page_config(), PageConfig::default());
    }

    #[test]
    fn partial_reveal_section_is_merged() {
        let config = SiteConfig::from_json(r#"{"reveal": {"threshold": "0.25"}}"#).ok();
        let config = config.map(|c| (c.reveal.threshold.permille(), c.reveal.margin));
        assert_eq!(config, Some((250, DEFAULT_MARGIN)));
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let result = SiteConfig::from_json(r#"{"reveal": {"threshold": "0"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_margin_is_rejected() {
        let result = SiteConfig::from_json(r#"{"reveal": {"margin": "ten pixels"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_class_is_rejected() {
        let result = SiteConfig::from_json(r#"{"reveal": {"class": "a b"}}"#);
        assert!(matches!(result, Err(AppError::Core(_))));
    }

    #[test]
    fn invalid_addr_is_rejected() {
        let result = SiteConfig::from_json(r#"{"server": {"addr": "nowhere"}}"#);
        assert!(matches!(result, Err(AppError::Addr { .. })));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(SiteConfig::from_json(r#"{"smooth": true}"#).is_err());
    }
}
