//! Shopping cart module.
//!
//! Contains the cart store, its items, and the state snapshot it returns.

mod store;

pub use store::{CartItem, CartState, CartStore};
