//! Suggestion sources.

use std::rc::Rc;

use async_trait::async_trait;
use verdant_commerce::catalog::ProductSuggestion;

use crate::error::ClientError;
use crate::search::RemoteSuggestions;

/// Produces suggestions for a settled query.
#[async_trait(?Send)]
pub trait SuggestionSource {
    /// At most `limit` suggestions for the trimmed, non-empty `query`.
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<ProductSuggestion>, ClientError>;
}

/// Case-insensitive substring match on name and category, in catalog order.
pub fn filter_catalog(catalog: &[ProductSuggestion], query: &str, limit: usize) -> Vec<ProductSuggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|s| s.matches(&needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Filters an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    catalog: Rc<[ProductSuggestion]>,
}

impl CatalogSource {
    pub fn new(catalog: impl Into<Rc<[ProductSuggestion]>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[async_trait(?Send)]
impl SuggestionSource for CatalogSource {
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<ProductSuggestion>, ClientError> {
        Ok(filter_catalog(&self.catalog, query, limit))
    }
}

/// Local catalog when one is supplied, the remote endpoint otherwise.
#[derive(Debug, Clone)]
pub enum SuggestionProvider {
    Catalog(CatalogSource),
    Remote(RemoteSuggestions),
}

impl SuggestionProvider {
    /// An empty catalog counts as "not supplied".
    pub fn choose(catalog: Vec<ProductSuggestion>, remote: RemoteSuggestions) -> Self {
        if catalog.is_empty() {
            SuggestionProvider::Remote(remote)
        } else {
            SuggestionProvider::Catalog(CatalogSource::new(catalog))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SuggestionProvider::Remote(_))
    }
}

#[async_trait(?Send)]
impl SuggestionSource for SuggestionProvider {
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<ProductSuggestion>, ClientError> {
        match self {
            SuggestionProvider::Catalog(catalog) => catalog.suggest(query, limit).await,
            SuggestionProvider::Remote(remote) => remote.suggest(query, limit).await,
        }
    }
}
