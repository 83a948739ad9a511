// demos/storefront_app/src/services/cart_service.rs

use async_trait::async_trait;
use cart_request::ProductId;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::CartLine;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartServiceError {
  #[error("cart already holds the maximum of {limit} lines")]
  CartFull { limit: usize },
}

/// Cart domain service: receives product ids that passed request validation.
///
/// Whether the product exists or is in stock is decided here, never by the
/// request payload.
#[async_trait]
pub trait CartService: Send + Sync {
  async fn add_item(&self, product_id: ProductId) -> Result<CartLine, CartServiceError>;

  async fn list_items(&self) -> Vec<CartLine>;
}

/// Single shared cart kept in memory. Accepts any id it is given.
#[derive(Debug)]
pub struct InMemoryCartService {
  lines: Mutex<Vec<CartLine>>,
  max_lines: usize,
}

impl InMemoryCartService {
  pub fn new(max_lines: usize) -> Self {
    Self {
      lines: Mutex::new(Vec::new()),
      max_lines,
    }
  }
}

#[async_trait]
impl CartService for InMemoryCartService {
  async fn add_item(&self, product_id: ProductId) -> Result<CartLine, CartServiceError> {
    let mut lines = self.lines.lock();
    if lines.len() >= self.max_lines {
      warn!(product_id, limit = self.max_lines, "Cart is full, refusing item.");
      return Err(CartServiceError::CartFull { limit: self.max_lines });
    }

    let line = CartLine {
      id: Uuid::new_v4(),
      product_id,
      added_at: chrono::Utc::now(),
    };
    lines.push(line.clone());
    info!(product_id, line_id = %line.id, "Cart line added.");
    Ok(line)
  }

  async fn list_items(&self) -> Vec<CartLine> {
    self.lines.lock().clone()
  }
}
