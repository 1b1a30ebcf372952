// License: MIT

use crate::core::error::{ConfigError, Error};

/// Session configuration, fixed at construction.
///
/// Nothing here is runtime-reconfigurable; a changed configuration means a
/// fresh session.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Emit highlight/overlay actions on every active tick.
    pub debug: bool,

    /// CSS selectors the host matches when building snapshots.
    pub selectors: Vec<String>,

    /// Scheduler tick interval.
    pub poll_interval_ms: u64,

    /// Inactivity grace period mid-document.
    pub inactivity_ms: u64,

    /// Shorter grace period near the top/bottom of the document.
    pub short_inactivity_ms: u64,

    /// Within this many pixels of the document top counts as "near top".
    pub top_offset_px: f64,

    /// Within this many pixels of the document bottom counts as "near bottom".
    pub bottom_offset_px: f64,

    /// Top fraction of the viewport that counts as the active zone; the
    /// rest is a dead zone even when pixels are on-screen.
    pub active_zone_fraction: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debug: false,
            selectors: vec!["h1".to_string(), "h2".to_string(), "h3".to_string()],
            poll_interval_ms: 500,
            inactivity_ms: 3000,
            short_inactivity_ms: 1000,
            top_offset_px: 100.0,
            bottom_offset_px: 100.0,
            active_zone_fraction: 0.8,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.selectors.is_empty() {
            return Err(Error::InvalidConfig(ConfigError::NoSelectors));
        }

        if self.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroPollInterval));
        }

        if self.inactivity_ms == 0 || self.short_inactivity_ms == 0 {
            return Err(Error::InvalidConfig(ConfigError::ZeroThreshold));
        }

        if !(self.active_zone_fraction > 0.0 && self.active_zone_fraction <= 1.0) {
            return Err(Error::InvalidConfig(ConfigError::ActiveZoneOutOfRange));
        }

        Ok(())
    }

    /// The combined selector list the host should match, e.g. `"h1, h2, h3"`.
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}
