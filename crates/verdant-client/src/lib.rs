//! Client-side logic for the Verdant storefront.
//!
//! This crate is platform-neutral; the Leptos application supplies the
//! browser-specific pieces through small traits:
//!
//! - [`device::Environment`] - user agent and viewport width
//! - [`runtime::Runtime`] - cancellable timers and local task spawning
//! - [`verdant_cache::KeyValueStore`] - persisted recent searches
//!
//! Modules:
//! - `device` - mobile/desktop classification
//! - `layout` - layout variant selection and store retention
//! - `search` - debounced suggestion pipeline with recent-search history
//! - `config` / `logging` - ambient setup

pub mod config;
pub mod device;
pub mod error;
pub mod layout;
pub mod logging;
pub mod runtime;
pub mod search;

pub use config::StorefrontConfig;
pub use error::ClientError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{DeviceConfig, LayoutConfig, LoggingConfig, SearchConfig, StorefrontConfig};
    pub use crate::device::{DeviceClassifier, DeviceState, DeviceType, Environment};
    pub use crate::error::ClientError;
    pub use crate::layout::{LayoutSelector, LayoutTransition, LayoutVariant, StoreRetention};
    pub use crate::runtime::{Debouncer, Runtime, TimerHandle};
    pub use crate::search::{
        category_url, search_url, CatalogSource, PanelContent, PanelControl, RecentSearches,
        RemoteSuggestions, SearchPhase, SearchPipeline, SearchSession, SearchSnapshot,
        SuggestionProvider, SuggestionSource,
    };
}
