// demos/storefront_app/src/models/cart_item.rs

use cart_request::ProductId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A product id accepted by the cart service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub id: Uuid,
  pub product_id: ProductId,
  pub added_at: DateTime<Utc>,
}
