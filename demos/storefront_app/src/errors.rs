// demos/storefront_app/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use cart_request::{PipelineError, ValidationError};
use serde_json::json;
use thiserror::Error;

use crate::services::CartServiceError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Payload deserialized but failed its field-level checks.
  #[error("Validation Error: {0}")]
  Validation(#[from] ValidationError),

  /// Body was not JSON, or a field had the wrong type.
  #[error("Malformed request payload: {0}")]
  MalformedPayload(String),

  #[error("Request body exceeds {limit} bytes")]
  PayloadTooLarge { limit: usize },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Cart Service Error: {0}")]
  CartService(#[from] CartServiceError),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: PipelineError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
      AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let body = match self {
      // 4xx bodies; those cases are logged where they are detected.
      AppError::Validation(e) => json!({"error": e.message(), "field": e.field()}),
      AppError::MalformedPayload(m) => json!({"error": "Malformed request payload", "detail": m}),
      AppError::PayloadTooLarge { limit } => json!({"error": "Request body too large", "limit": limit}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::CartService(e) => json!({"error": "Cart service error", "detail": e.to_string()}),
      AppError::Workflow { source } => json!({"error": "Workflow processing error", "detail": source.to_string()}),
      AppError::Internal(_) => json!({"error": "An internal error occurred"}),
    };
    if self.status_code().is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    }
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
