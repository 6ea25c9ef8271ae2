//! Cart store and its state snapshot.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A catalog product selected by the shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Id of the source product.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Display attributes copied from the product.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            attributes: product.attributes.clone(),
        }
    }
}

/// Snapshot of the cart after an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Whether the cart drawer is visible.
    pub open: bool,
    /// Selected items in insertion order. Ids are unique.
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an item with `id` is present.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }
}

/// Shopping cart state owned by one shopper session.
///
/// Every mutating operation returns the resulting [`CartState`]. None of
/// them can fail.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the cart.
    pub fn open(&mut self) -> CartState {
        self.state.open = true;
        debug!("cart opened");
        self.state()
    }

    /// Hide the cart.
    pub fn close(&mut self) -> CartState {
        self.state.open = false;
        debug!("cart closed");
        self.state()
    }

    /// Add a product to the cart.
    ///
    /// Adding a product that is already in the cart is a no-op: the existing
    /// item keeps its position and no duplicate is created.
    pub fn add_product(&mut self, product: &Product) -> CartState {
        if self.product_is_in_the_cart(product) {
            debug!(product_id = %product.id, "product already in cart");
        } else {
            self.state.items.push(CartItem::from(product));
            debug!(
                product_id = %product.id,
                items = self.state.items.len(),
                "product added to cart"
            );
        }
        self.state()
    }

    /// Remove the item with `id`, if present.
    pub fn remove_product(&mut self, id: &ProductId) -> CartState {
        let len_before = self.state.items.len();
        self.state.items.retain(|i| &i.id != id);
        if self.state.items.len() < len_before {
            debug!(
                product_id = %id,
                items = self.state.items.len(),
                "product removed from cart"
            );
        }
        self.state()
    }

    /// Remove every item. Visibility is left as is.
    pub fn clear_products(&mut self) -> CartState {
        self.state.items.clear();
        debug!("cart cleared");
        self.state()
    }

    /// Check whether `product` is in the cart.
    pub fn product_is_in_the_cart(&self, product: &Product) -> bool {
        self.state.contains(&product.id)
    }

    /// Current snapshot.
    pub fn state(&self) -> CartState {
        self.state.clone()
    }

    /// Whether the cart is visible.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str) -> Product {
        Product::new(title, title)
            .with_attribute("price", 10.0)
            .with_attribute("image", "https://example.test/item.jpg")
    }

    fn ids(state: &CartState) -> Vec<ProductId> {
        state.items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_new_cart_is_closed_and_empty() {
        let cart = CartStore::new();
        let state = cart.state();
        assert!(!state.open);
        assert!(state.is_empty());
    }

    #[test]
    fn test_open() {
        let mut cart = CartStore::new();
        let state = cart.open();
        assert!(state.open);
        assert!(cart.is_open());
    }

    #[test]
    fn test_close() {
        let mut cart = CartStore::new();
        cart.open();
        let state = cart.close();
        assert!(!state.open);
    }

    #[test]
    fn test_add_product_only_once() {
        let mut cart = CartStore::new();
        let p = product("Relógio");

        cart.add_product(&p);
        let state = cart.add_product(&p);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, p.id);
    }

    #[test]
    fn test_re_adding_keeps_position() {
        let mut cart = CartStore::new();
        let (p1, p2) = (product("A"), product("B"));

        cart.add_product(&p1);
        cart.add_product(&p2);
        let state = cart.add_product(&p1);

        assert_eq!(ids(&state), vec![p1.id.clone(), p2.id.clone()]);
    }

    #[test]
    fn test_product_is_in_the_cart() {
        let mut cart = CartStore::new();
        let p = product("Relógio");
        assert!(!cart.product_is_in_the_cart(&p));

        cart.add_product(&p);
        assert!(cart.product_is_in_the_cart(&p));

        cart.remove_product(&p.id);
        assert!(!cart.product_is_in_the_cart(&p));
    }

    #[test]
    fn test_remove_product() {
        let mut cart = CartStore::new();
        let p = product("Relógio");
        cart.add_product(&p);

        let state = cart.remove_product(&p.id);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let mut cart = CartStore::new();
        let p = product("Relógio");
        cart.add_product(&p);

        let state = cart.remove_product(&ProductId::new("missing"));
        assert_eq!(ids(&state), vec![p.id]);
    }

    #[test]
    fn test_order_preserved_after_removing_middle() {
        let mut cart = CartStore::new();
        let (p1, p2, p3) = (product("A"), product("B"), product("C"));

        cart.add_product(&p1);
        cart.add_product(&p2);
        let state = cart.add_product(&p3);
        assert_eq!(ids(&state), vec![p1.id.clone(), p2.id.clone(), p3.id.clone()]);

        let state = cart.remove_product(&p2.id);
        assert_eq!(ids(&state), vec![p1.id, p3.id]);
    }

    #[test]
    fn test_clear_products_keeps_visibility() {
        let mut cart = CartStore::new();
        cart.open();
        cart.add_product(&product("A"));
        cart.add_product(&product("B"));

        let state = cart.clear_products();
        assert!(state.items.is_empty());
        assert!(state.open);
    }

    #[test]
    fn test_item_carries_product_attributes() {
        let mut cart = CartStore::new();
        let p = product("Relógio");

        let state = cart.add_product(&p);
        let item = &state.items[0];
        assert_eq!(item.title, "Relógio");
        assert_eq!(item.attributes, p.attributes);
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut cart = CartStore::new();
        let before = cart.add_product(&product("A"));
        cart.clear_products();

        assert_eq!(before.len(), 1);
        assert!(cart.is_empty());
    }
}
