// demos/storefront_app/src/pipelines/contexts.rs

//! Per-request data structs the pipelines run against.
//! Handlers receive these wrapped in `cart_request::ContextData`.

use crate::models::CartLine;
use crate::services::CartService;
use cart_request::CartItemRequest;
use std::sync::Arc;

#[derive(Clone)]
pub struct AddToCartCtxData {
  pub cart_service: Arc<dyn CartService>,
  pub request: CartItemRequest,
  /// Set by the handoff step once the cart service accepted the item.
  pub added_line: Option<CartLine>,
}

impl AddToCartCtxData {
  pub fn new(cart_service: Arc<dyn CartService>, request: CartItemRequest) -> Self {
    Self {
      cart_service,
      request,
      added_line: None,
    }
  }
}
