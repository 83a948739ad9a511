// cart_request/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Wire name of the product identifier field.
pub const PRODUCT_ID_FIELD: &str = "productId";

/// Message reported when an add-to-cart request carries no product id.
pub const MISSING_PRODUCT_ID_MESSAGE: &str = "must pass a product id to be added to cart";

/// Field-level failure produced by request validation.
///
/// There is a single kind at this boundary. The `Display` output is the
/// message alone so the request layer can echo it to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{message}")]
  MissingRequiredField {
    field: &'static str,
    message: &'static str,
  },
}

impl ValidationError {
  pub fn missing_product_id() -> Self {
    ValidationError::MissingRequiredField {
      field: PRODUCT_ID_FIELD,
      message: MISSING_PRODUCT_ID_MESSAGE,
    }
  }

  /// Wire name of the offending field.
  pub fn field(&self) -> &'static str {
    match self {
      ValidationError::MissingRequiredField { field, .. } => field,
    }
  }

  pub fn message(&self) -> &'static str {
    match self {
      ValidationError::MissingRequiredField { message, .. } => message,
    }
  }
}

// The payload carries a single rule, so any rejection from the derived
// checks is the missing product id.
impl From<validator::ValidationErrors> for ValidationError {
  fn from(_errors: validator::ValidationErrors) -> Self {
    ValidationError::missing_product_id()
  }
}

/// Errors raised by the step pipeline itself, as opposed to the handlers it runs.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step already defined: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Error in pipeline handler. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for PipelineError {
  fn from(err: AnyhowError) -> Self {
    PipelineError::Handler { source: err }
  }
}

// Lets pipelines whose error type is `PipelineError` run validation steps.
impl From<ValidationError> for PipelineError {
  fn from(err: ValidationError) -> Self {
    PipelineError::Handler { source: err.into() }
  }
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
