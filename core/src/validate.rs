// cart_request/src/validate.rs

//! The validation seam the pipeline gates on.
//!
//! Payloads declare their rules with `validator`'s derive. This trait reports
//! the outcome as a single field-level [`ValidationError`] instead of the
//! derive's `ValidationErrors` map.

use crate::error::ValidationError;

/// A payload that can check its own structural constraints.
///
/// Implementations must be pure: no I/O, no mutation, same answer every time.
/// They usually delegate to `validator::Validate` and convert its errors.
pub trait Validate {
  fn validate(&self) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
  fn validate(&self) -> Result<(), ValidationError> {
    (**self).validate()
  }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
  fn validate(&self) -> Result<(), ValidationError> {
    (**self).validate()
  }
}
