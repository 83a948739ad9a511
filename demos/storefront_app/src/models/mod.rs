// demos/storefront_app/src/models/mod.rs

//! Data handed back by the cart service.

pub mod cart_item;

pub use cart_item::CartLine;
