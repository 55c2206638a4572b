//! Search state machine.
//!
//! All transitions are synchronous. Asynchronous work (the debounce timer and
//! the suggestion fetch) is driven from outside: [`SearchSession::input`]
//! returns a generation to hand back to [`SearchSession::settle`] when the
//! timer fires, and `settle` returns a [`SuggestionRequest`] whose id must be
//! passed to [`SearchSession::complete`] or [`SearchSession::fail`].

use serde::Serialize;
use verdant_cache::Cache;
use verdant_commerce::catalog::ProductSuggestion;

use crate::config::SearchConfig;
use crate::search::{search_url, PanelControl, RecentSearches, SUGGESTION_LIMIT};

/// Where the search widget is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    /// The raw query has changed since the last settle.
    Typing,
    Loading,
    ShowingSuggestions,
    ShowingEmpty,
    ShowingRecent,
}

/// What the suggestion panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelContent {
    #[default]
    Closed,
    /// Open with nothing to show.
    Nothing,
    Recent,
    Loading,
    Suggestions,
    /// "No products found".
    Empty,
}

/// A suggestion evaluation to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub id: u64,
    /// Trimmed, never empty.
    pub query: String,
    pub limit: usize,
}

/// Outcome of a debounce timer firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// A newer keystroke superseded this timer.
    Stale,
    /// The query is blank; suggestions were cleared.
    Cleared,
    Evaluate(SuggestionRequest),
}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub raw_query: String,
    pub debounced_query: String,
    pub suggestions: Vec<ProductSuggestion>,
    pub is_loading: bool,
    pub is_open: bool,
    pub recent: Vec<String>,
    pub phase: SearchPhase,
    pub panel: PanelContent,
}

/// State of one mounted search widget.
#[derive(Debug)]
pub struct SearchSession {
    raw_query: String,
    debounced_query: String,
    suggestions: Vec<ProductSuggestion>,
    is_loading: bool,
    recent: RecentSearches,
    panel: PanelControl,
    input_generation: u64,
    latest_request: u64,
    listing_route: String,
    storage_key: String,
    cache: Cache,
}

impl SearchSession {
    /// Create a session, loading recent searches from `cache`.
    pub fn new(config: &SearchConfig, cache: Cache, panel: PanelControl) -> Self {
        let recent = RecentSearches::load(&cache, &config.recent_storage_key);
        Self {
            raw_query: String::new(),
            debounced_query: String::new(),
            suggestions: Vec::new(),
            is_loading: false,
            recent,
            panel,
            input_generation: 0,
            latest_request: 0,
            listing_route: config.listing_route.clone(),
            storage_key: config.recent_storage_key.clone(),
            cache,
        }
    }

    /// Pre-fill the query, e.g. from the listing page's `?search=` parameter.
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.raw_query = query.into();
        self.debounced_query = self.raw_query.clone();
        self
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn suggestions(&self) -> &[ProductSuggestion] {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// Record a keystroke. Returns the generation the debounce timer settles.
    pub fn input(&mut self, value: &str) -> u64 {
        self.raw_query = value.to_string();
        self.input_generation += 1;
        if !value.trim().is_empty() {
            self.panel.set_open(true);
        }
        self.input_generation
    }

    /// The debounce window for `generation` elapsed.
    pub fn settle(&mut self, generation: u64) -> Settled {
        if generation != self.input_generation {
            return Settled::Stale;
        }

        self.debounced_query = self.raw_query.clone();
        self.latest_request += 1;

        let query = self.debounced_query.trim();
        if query.is_empty() {
            self.suggestions.clear();
            self.is_loading = false;
            return Settled::Cleared;
        }

        self.is_loading = true;
        tracing::debug!(query, request = self.latest_request, "evaluating suggestions");
        Settled::Evaluate(SuggestionRequest {
            id: self.latest_request,
            query: query.to_string(),
            limit: SUGGESTION_LIMIT,
        })
    }

    /// Apply results for `request`. Returns false if they were stale.
    pub fn complete(&mut self, request: u64, mut suggestions: Vec<ProductSuggestion>) -> bool {
        if request != self.latest_request {
            tracing::debug!(request, latest = self.latest_request, "discarding stale suggestions");
            return false;
        }
        suggestions.truncate(SUGGESTION_LIMIT);
        self.suggestions = suggestions;
        self.is_loading = false;
        self.panel.set_open(true);
        true
    }

    /// Evaluation for `request` failed; show no suggestions.
    pub fn fail(&mut self, request: u64) -> bool {
        if request != self.latest_request {
            return false;
        }
        self.suggestions.clear();
        self.is_loading = false;
        true
    }

    /// Submit a query. Returns the listing URL to navigate to, or `None` for a
    /// blank query.
    pub fn submit(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if self.recent.push(query) {
            if let Err(e) = self.recent.save(&self.cache, &self.storage_key) {
                tracing::warn!(error = %e, "failed to persist recent searches");
            }
        }

        self.raw_query = query.to_string();
        self.debounced_query = self.raw_query.clone();
        self.input_generation += 1;
        self.latest_request += 1;
        self.is_loading = false;
        self.panel.set_open(false);

        Some(search_url(&self.listing_route, query))
    }

    pub fn select_suggestion(&mut self, suggestion: &ProductSuggestion) -> Option<String> {
        self.submit(&suggestion.name)
    }

    pub fn select_recent(&mut self, query: &str) -> Option<String> {
        self.submit(query)
    }

    /// Listing URL for the current query, without recording it.
    pub fn view_all(&mut self) -> Option<String> {
        let query = self.raw_query.trim();
        if query.is_empty() {
            return None;
        }
        let url = search_url(&self.listing_route, query);
        self.input_generation += 1;
        self.latest_request += 1;
        self.is_loading = false;
        self.panel.set_open(false);
        Some(url)
    }

    /// Reset the query, drop pending work and close the panel.
    pub fn clear(&mut self) {
        self.raw_query.clear();
        self.debounced_query.clear();
        self.suggestions.clear();
        self.is_loading = false;
        self.input_generation += 1;
        self.latest_request += 1;
        self.panel.set_open(false);
    }

    /// Click outside: close without touching the query.
    pub fn dismiss(&mut self) {
        self.panel.set_open(false);
    }

    pub fn focus(&mut self) {
        self.panel.set_open(true);
    }

    /// Forget all recent searches, in memory and in storage.
    pub fn clear_recent(&mut self) {
        self.recent.clear();
        if let Err(e) = self.cache.delete(&self.storage_key) {
            tracing::warn!(error = %e, "failed to remove recent searches");
        }
    }

    pub fn phase(&self) -> SearchPhase {
        if self.raw_query.trim().is_empty() {
            return if self.is_open() && !self.recent.is_empty() {
                SearchPhase::ShowingRecent
            } else {
                SearchPhase::Idle
            };
        }
        if self.is_loading {
            SearchPhase::Loading
        } else if self.raw_query != self.debounced_query {
            SearchPhase::Typing
        } else if self.suggestions.is_empty() {
            SearchPhase::ShowingEmpty
        } else {
            SearchPhase::ShowingSuggestions
        }
    }

    pub fn panel_content(&self) -> PanelContent {
        if !self.is_open() {
            return PanelContent::Closed;
        }
        match self.phase() {
            SearchPhase::Idle => PanelContent::Nothing,
            // Keep the previous results visible until the new query settles.
            SearchPhase::Typing if self.suggestions.is_empty() => PanelContent::Nothing,
            SearchPhase::Typing | SearchPhase::ShowingSuggestions => PanelContent::Suggestions,
            SearchPhase::Loading => PanelContent::Loading,
            SearchPhase::ShowingEmpty => PanelContent::Empty,
            SearchPhase::ShowingRecent => PanelContent::Recent,
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            raw_query: self.raw_query.clone(),
            debounced_query: self.debounced_query.clone(),
            suggestions: self.suggestions.clone(),
            is_loading: self.is_loading,
            is_open: self.is_open(),
            recent: self.recent.entries().to_vec(),
            phase: self.phase(),
            panel: self.panel_content(),
        }
    }
}
