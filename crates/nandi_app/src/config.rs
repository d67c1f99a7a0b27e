//! Site configuration
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [header]
//! scroll_threshold_px = 50.0
//!
//! [hero]
//! highlight_period_ms = 3000
//! tween = { duration_ms = 2000, steps = 60, delay_ms = 1000 }
//!
//! [contact]
//! submit_delay_ms = 2000
//! success_hold_ms = 3000
//! ```

use std::fs;
use std::path::Path;

use nandi_animation::TweenConfig;
use nandi_widgets::FormTimings;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub hero: HeroConfig,
    pub routes: RoutesConfig,
    pub features: FeaturesConfig,
    pub contact: FormTimings,
    pub layout: LayoutConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset past which the header turns solid
    pub scroll_threshold_px: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: nandi_widgets::scroll_phase::DEFAULT_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Count-up of the headline statistics
    #[serde(default = "TweenConfig::hero_stats")]
    pub tween: TweenConfig,
    /// Rotation period of the highlighted statistic
    pub highlight_period_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            tween: TweenConfig::hero_stats(),
            highlight_period_ms: 3000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Count-up of the route prices
    #[serde(default = "TweenConfig::route_prices")]
    pub tween: TweenConfig,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            tween: TweenConfig::route_prices(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Rotation period of the active feature card
    pub rotation_period_ms: u64,
    /// Fraction of the section that must be visible to reveal the stats row
    pub reveal_threshold: f32,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            rotation_period_ms: 4000,
            reveal_threshold: 0.3,
        }
    }
}

/// Section geometry used in place of a layout engine
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport height assumed when a scroll event does not carry one
    pub viewport_height: f32,
    /// Document offset of the features section
    pub features_top: f32,
    pub features_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            features_top: 2400.0,
            features_height: 1200.0,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
