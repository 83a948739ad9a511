// cart_request/src/request.rs

//! The inbound payload for adding an item to a cart.

use crate::error::ValidationError;
use crate::validate::Validate;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

/// Identifier of a product in the catalog. Opaque at this layer: no sign,
/// range or existence check is applied.
pub type ProductId = i64;

/// Request payload for "add item to cart".
///
/// Deserializes from `{"productId": <i64>}`. A missing key and an explicit
/// `null` both leave `product_id` empty; that is a legal construction and is
/// reported by [`CartItemRequest::validate`], not by deserialization.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
  #[serde(default)]
  #[validate(required(message = "must pass a product id to be added to cart"))]
  product_id: Option<ProductId>,
}

impl CartItemRequest {
  pub fn new(product_id: ProductId) -> Self {
    Self {
      product_id: Some(product_id),
    }
  }

  /// A request with no product id, as produced by `{}` or `{"productId": null}`.
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn product_id(&self) -> Option<ProductId> {
    self.product_id
  }

  pub fn set_product_id(&mut self, product_id: Option<ProductId>) {
    self.product_id = product_id;
  }

  /// Checks that the product id is present.
  ///
  /// Any `i64` passes, including zero and negatives. Calling this repeatedly
  /// on the same instance always gives the same answer.
  pub fn validate(&self) -> Result<(), ValidationError> {
    validator::Validate::validate(self).map_err(|errors| {
      event!(Level::DEBUG, field = crate::error::PRODUCT_ID_FIELD, %errors, "Cart item request rejected.");
      ValidationError::from(errors)
    })
  }

  /// Validates and hands back the raw id for the cart domain service.
  pub fn into_validated(self) -> Result<ValidatedCartItem, ValidationError> {
    self.validate()?;
    self
      .product_id
      .map(|product_id| ValidatedCartItem { product_id })
      .ok_or_else(ValidationError::missing_product_id)
  }
}

impl Validate for CartItemRequest {
  fn validate(&self) -> Result<(), ValidationError> {
    CartItemRequest::validate(self)
  }
}

/// A request that passed validation. Only obtainable via
/// [`CartItemRequest::into_validated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedCartItem {
  product_id: ProductId,
}

impl ValidatedCartItem {
  pub fn product_id(&self) -> ProductId {
    self.product_id
  }
}
