//! Layout selection from the device classification.

use serde::{Deserialize, Serialize};

use crate::device::DeviceState;

/// Which layout subtree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Classification pending; only a neutral spinner is shown.
    Loading,
    Mobile,
    Desktop,
}

impl LayoutVariant {
    pub fn select(state: &DeviceState) -> Self {
        if state.is_loading {
            LayoutVariant::Loading
        } else if state.is_mobile {
            LayoutVariant::Mobile
        } else {
            LayoutVariant::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Loading => "loading",
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::Desktop => "desktop",
        }
    }
}

/// Where the cart and wishlist containers live relative to the layout switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreRetention {
    /// Switching layouts empties the cart and wishlist, as if each variant
    /// owned its own containers.
    #[default]
    PerLayout,
    /// Cart and wishlist survive a layout switch.
    Hoisted,
}

/// A change of layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTransition {
    pub from: LayoutVariant,
    pub to: LayoutVariant,
    /// The layout subtree is torn down and mounted again.
    pub remount: bool,
    /// Cart and wishlist are emptied.
    pub reset_stores: bool,
}

/// Tracks the rendered variant and reports transitions.
#[derive(Debug, Clone)]
pub struct LayoutSelector {
    retention: StoreRetention,
    current: LayoutVariant,
}

impl LayoutSelector {
    pub fn new(retention: StoreRetention) -> Self {
        Self {
            retention,
            current: LayoutVariant::Loading,
        }
    }

    pub fn current(&self) -> LayoutVariant {
        self.current
    }

    pub fn retention(&self) -> StoreRetention {
        self.retention
    }

    /// Select a variant for `state`.
    ///
    /// Returns `None` when the variant is unchanged, so repeated resize events
    /// within one classification never remount anything.
    pub fn apply(&mut self, state: &DeviceState) -> Option<LayoutTransition> {
        let next = LayoutVariant::select(state);
        if next == self.current {
            return None;
        }

        let from = self.current;
        self.current = next;

        // Leaving the spinner mounts the first layout; there is no state to lose yet.
        let reset_stores = self.retention == StoreRetention::PerLayout
            && from != LayoutVariant::Loading;

        tracing::debug!(
            from = from.as_str(),
            to = next.as_str(),
            reset_stores,
            "layout switched"
        );

        Some(LayoutTransition {
            from,
            to: next,
            remount: true,
            reset_stores,
        })
    }
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new(StoreRetention::default())
    }
}
