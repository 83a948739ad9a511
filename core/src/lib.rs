// src/lib.rs

//! cart_request: the validated payload behind "add item to cart".
//!
//! The crate has two parts:
//!  - [`CartItemRequest`], the inbound shape `{"productId": <i64>}`, with a
//!    presence-only [`CartItemRequest::validate`] that reports the fixed
//!    message `must pass a product id to be added to cart` when the id is
//!    missing or null.
//!  - A small asynchronous step [`Pipeline`] a request-handling layer can push
//!    the payload through, with [`Pipeline::on_validate`] as the gate that
//!    keeps invalid requests away from downstream cart logic.
//!
//! ```
//! use cart_request::CartItemRequest;
//!
//! let request = CartItemRequest::new(42);
//! assert!(request.validate().is_ok());
//!
//! let err = CartItemRequest::empty().validate().unwrap_err();
//! assert_eq!(err.to_string(), "must pass a product id to be added to cart");
//! ```

pub mod core;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod validate;

// --- Re-exports for the Public API ---

pub use crate::request::{CartItemRequest, ProductId, ValidatedCartItem};
pub use crate::validate::Validate;

pub use crate::error::{PipelineError, ValidationError, MISSING_PRODUCT_ID_MESSAGE, PRODUCT_ID_FIELD};

pub use crate::core::{ContextData, Handler, PipelineControl, PipelineResult, StepDef};
pub use crate::pipeline::Pipeline;
