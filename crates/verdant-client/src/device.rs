//! Mobile/desktop device classification.
//!
//! A device is mobile when its user agent names a mobile platform OR its
//! viewport is at most [`MOBILE_BREAKPOINT_PX`] wide. Either signal alone is
//! enough.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default breakpoint in logical pixels.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

static MOBILE_USER_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini|Mobile")
        .expect("mobile user-agent pattern is valid")
});

/// Classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the user agent names a known mobile platform.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}

/// Classify from a user agent and a viewport width.
pub fn classify(user_agent: &str, viewport_width: u32, breakpoint: u32) -> DeviceType {
    if is_mobile_user_agent(user_agent) || viewport_width <= breakpoint {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

/// Reactive device flag plus a loading marker.
///
/// `is_loading` is true only until the first measurement, so callers can
/// hold back layout-specific rendering until the classification is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceState {
    pub is_mobile: bool,
    pub is_loading: bool,
}

impl DeviceState {
    /// State before the first measurement.
    pub const LOADING: DeviceState = DeviceState {
        is_mobile: false,
        is_loading: true,
    };

    /// A measured state.
    pub fn measured(device: DeviceType) -> Self {
        Self {
            is_mobile: device == DeviceType::Mobile,
            is_loading: false,
        }
    }

    pub fn is_desktop(&self) -> bool {
        !self.is_mobile
    }

    pub fn device_type(&self) -> DeviceType {
        if self.is_mobile {
            DeviceType::Mobile
        } else {
            DeviceType::Desktop
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::LOADING
    }
}

/// Source of the signals the classifier reads.
pub trait Environment {
    fn user_agent(&self) -> String;

    /// Viewport width in logical pixels.
    fn viewport_width(&self) -> u32;
}

/// Fixed environment, used for server rendering and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub user_agent: String,
    pub viewport_width: u32,
}

impl StaticEnvironment {
    pub fn new(user_agent: impl Into<String>, viewport_width: u32) -> Self {
        Self {
            user_agent: user_agent.into(),
            viewport_width,
        }
    }
}

impl Environment for StaticEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }
}

/// Holds the current [`DeviceState`] and recomputes it on demand.
#[derive(Debug, Clone)]
pub struct DeviceClassifier {
    breakpoint: u32,
    state: DeviceState,
}

impl DeviceClassifier {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            breakpoint,
            state: DeviceState::LOADING,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Measure the environment. Called on mount and on every resize.
    ///
    /// Returns true when the state changed, including the first measurement.
    pub fn measure(&mut self, env: &impl Environment) -> bool {
        let device = classify(&env.user_agent(), env.viewport_width(), self.breakpoint);
        let next = DeviceState::measured(device);
        let changed = next != self.state;
        if changed {
            tracing::debug!(
                device = %device,
                width = env.viewport_width(),
                "device classification changed"
            );
        }
        self.state = next;
        changed
    }
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX)
    }
}
