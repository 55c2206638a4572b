//! Debounced search suggestions with a recent-search history.
//!
//! [`SearchSession`] is the synchronous state machine; [`SearchPipeline`]
//! drives it with a debounce timer and an asynchronous [`SuggestionSource`].

mod navigation;
mod panel;
mod pipeline;
mod recent;
mod remote;
mod session;
mod suggest;

pub use navigation::{category_url, search_url};
pub use panel::PanelControl;
pub use pipeline::{Navigator, SearchPipeline, SearchPipelineBuilder, SnapshotObserver};
pub use recent::{RecentSearches, RECENT_SEARCH_LIMIT};
pub use remote::RemoteSuggestions;
pub use session::{
    PanelContent, SearchPhase, SearchSession, SearchSnapshot, Settled, SuggestionRequest,
};
pub use suggest::{filter_catalog, CatalogSource, SuggestionProvider, SuggestionSource};

/// Maximum number of suggestions shown in the panel.
pub const SUGGESTION_LIMIT: usize = 5;
