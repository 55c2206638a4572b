//! Storefront configuration.
//!
//! Every section has defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [device]
//! mobile_breakpoint_px = 768
//!
//! [search]
//! debounce_ms = 300
//! listing_route = "/shop"
//!
//! [layout]
//! retention = "per_layout"
//!
//! [logging]
//! filter = "info,verdant_client=debug"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::layout::StoreRetention;

/// Top-level storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub device: DeviceConfig,
    pub search: SearchConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ClientError> {
        let config: StorefrontConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.device.mobile_breakpoint_px == 0 {
            return Err(ClientError::Config(
                "device.mobile_breakpoint_px must be positive".to_string(),
            ));
        }
        if self.search.debounce_ms == 0 {
            return Err(ClientError::Config(
                "search.debounce_ms must be positive".to_string(),
            ));
        }
        if self.search.recent_storage_key.trim().is_empty() {
            return Err(ClientError::Config(
                "search.recent_storage_key must not be empty".to_string(),
            ));
        }
        for (name, route) in [
            ("search.listing_route", &self.search.listing_route),
            ("search.suggestions_endpoint", &self.search.suggestions_endpoint),
        ] {
            if !route.starts_with('/') {
                return Err(ClientError::Config(format!(
                    "{name} must be an absolute path, got {route:?}"
                )));
            }
        }
        Ok(())
    }

    /// Set the mobile breakpoint.
    pub fn with_breakpoint(mut self, px: u32) -> Self {
        self.device.mobile_breakpoint_px = px;
        self
    }

    /// Set the search debounce window.
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.search.debounce_ms = delay.as_millis() as u64;
        self
    }

    /// Set the cart/wishlist retention policy across layout switches.
    pub fn with_retention(mut self, retention: StoreRetention) -> Self {
        self.layout.retention = retention;
        self
    }
}

/// Device classification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Viewports this wide or narrower are classified as mobile.
    pub mobile_breakpoint_px: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: crate::device::MOBILE_BREAKPOINT_PX,
        }
    }
}

/// Search pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before suggestions are evaluated.
    pub debounce_ms: u64,
    /// Local storage key for the recent-search list.
    pub recent_storage_key: String,
    /// Path of the remote suggestion endpoint.
    pub suggestions_endpoint: String,
    /// Listing route that receives `?search=` and `?category=`.
    pub listing_route: String,
    /// Remote request timeout (host builds only).
    pub request_timeout_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            recent_storage_key: "recentSearches".to_string(),
            suggestions_endpoint: "/api/search/suggestions".to_string(),
            listing_route: "/shop".to_string(),
            request_timeout_ms: 3000,
        }
    }
}

/// Layout switching settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    pub retention: StoreRetention,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Emit ANSI colour codes.
    pub ansi: bool,
    /// Prefix lines with timestamps. Browsers have no wall clock for the formatter.
    pub timestamps: bool,
    /// Include the event target (module path).
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: false,
            timestamps: false,
            with_target: true,
        }
    }
}
