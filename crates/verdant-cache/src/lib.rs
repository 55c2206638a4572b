//! Type-safe client-side key-value storage for Verdant.
//!
//! Wraps a string key-value backend (the browser's `localStorage` on wasm32,
//! an in-memory map elsewhere) with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use verdant_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("recentSearches", &vec!["tea".to_string()])?;
//! let recent: Option<Vec<String>> = cache.get("recentSearches")?;
//! cache.delete("recentSearches")?;
//! ```

mod error;
mod kv;
mod memory;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use error::CacheError;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore};
}
