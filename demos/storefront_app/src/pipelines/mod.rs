// demos/storefront_app/src/pipelines/mod.rs

//! Request pipelines used by the storefront handlers.

pub mod cart_pipeline;
pub mod contexts;

pub use cart_pipeline::build_add_to_cart_pipeline;
