//! Cart, wishlist and toast state.

use std::time::Duration;

use leptos::prelude::*;
use verdant_cache::Cache;
use verdant_commerce::cart::{Cart, Wishlist};
use verdant_commerce::catalog::{find_product, CatalogProduct};
use verdant_commerce::{CommerceError, ProductId};

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Cart and wishlist containers.
#[derive(Debug, Clone, Copy)]
pub struct StoreContext {
    pub cart: RwSignal<Cart>,
    pub wishlist: RwSignal<Wishlist>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            wishlist: RwSignal::new(Wishlist::new()),
        }
    }

    /// Add one unit of `product_id` and report the outcome as a toast.
    pub fn add_to_cart(&self, catalog: &[CatalogProduct], product_id: &ProductId, toasts: Toasts) {
        let cart = self.cart;
        let outcome = add_outcome(catalog, product_id, |product| {
            cart.try_update(|cart| cart.add_product(product, 1))
        });

        match outcome {
            Some(Ok(name)) => toasts.success(format!("{name} added to cart")),
            Some(Err(e)) => {
                tracing::warn!(product = %product_id, error = %e, "add to cart failed");
                toasts.error(e.to_string());
            }
            None => tracing::debug!(product = %product_id, "cart disposed, nothing added"),
        }
    }

    pub fn toggle_wishlist(&self, product_id: &ProductId, toasts: Toasts) {
        match self.wishlist.try_update(|wishlist| wishlist.toggle(product_id)) {
            Some(true) => toasts.success("Added to wishlist"),
            Some(false) => toasts.success("Removed from wishlist"),
            None => tracing::debug!(product = %product_id, "wishlist disposed, nothing toggled"),
        }
    }

    /// Empty both containers.
    pub fn reset(&self) {
        self.cart.set(Cart::new());
        self.wishlist.set(Wishlist::new());
    }
}

/// Look up `product_id` and add it with `add`. `None` when `add` could not
/// reach the cart.
fn add_outcome(
    catalog: &[CatalogProduct],
    product_id: &ProductId,
    add: impl FnOnce(&CatalogProduct) -> Option<Result<(), CommerceError>>,
) -> Option<Result<String, CommerceError>> {
    let product = match find_product(catalog, product_id.as_str()) {
        Ok(product) => product,
        Err(e) => return Some(Err(e)),
    };
    add(product).map(|added| added.map(|()| product.name.clone()))
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}

/// Browser storage, or an in-memory map where none is available.
pub fn open_cache() -> Cache {
    #[cfg(target_arch = "wasm32")]
    {
        match verdant_cache::LocalStorage::open() {
            Ok(storage) => return Cache::new(storage),
            Err(e) => tracing::warn!(error = %e, "localStorage unavailable, recent searches will not persist"),
        }
    }
    Cache::new(verdant_cache::MemoryStore::new())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications, dismissed automatically.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_DURATION);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_add_outcome_names_product() {
        let catalog = Catalog::demo();
        let cart = RwSignal::new(Cart::new());
        let outcome = add_outcome(catalog.products(), &ProductId::new("1"), |product| {
            cart.try_update(|cart| cart.add_product(product, 1))
        });
        assert_eq!(outcome, Some(Ok("Cold Pressed Olive Oil".to_string())));
        assert_eq!(cart.with(|cart| cart.item_count()), 1);
    }

    #[test]
    fn test_add_outcome_unknown_product() {
        let catalog = Catalog::demo();
        let outcome = add_outcome(catalog.products(), &ProductId::new("missing"), |_| {
            panic!("nothing to add")
        });
        assert_eq!(outcome, Some(Err(CommerceError::ProductNotFound("missing".to_string()))));
    }

    #[test]
    fn test_add_outcome_disposed_cart_is_not_success() {
        let catalog = Catalog::demo();
        let cart = RwSignal::new(Cart::new());
        cart.dispose();
        let outcome = add_outcome(catalog.products(), &ProductId::new("1"), |product| {
            cart.try_update(|cart| cart.add_product(product, 1))
        });
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_reset_empties_containers() {
        let catalog = Catalog::demo();
        let store = StoreContext::new();
        let id = ProductId::new("1");
        store.cart.update(|cart| {
            let product = find_product(catalog.products(), "1").unwrap();
            cart.add_product(product, 2).unwrap();
        });
        store.wishlist.update(|wishlist| {
            wishlist.toggle(&id);
        });

        store.reset();
        assert_eq!(store.cart.with(|cart| cart.item_count()), 0);
        assert!(store.wishlist.with(|wishlist| wishlist.is_empty()));
    }
}
