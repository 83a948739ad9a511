// demos/storefront_app/src/web/mod.rs

pub mod handlers;
pub mod routes;

pub use routes::configure_app_routes;

use crate::errors::AppError;
use actix_web::{error::JsonPayloadError, web};

/// JSON extractor settings: body size limit, and deserialization failures
/// (bad JSON, wrong field types) reported as `AppError::MalformedPayload`.
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
  web::JsonConfig::default()
    .limit(max_payload_bytes)
    .error_handler(move |err, _req| {
      tracing::warn!(error = %err, "Rejecting request body that failed to deserialize.");
      match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
          AppError::PayloadTooLarge { limit: max_payload_bytes }.into()
        }
        other => AppError::MalformedPayload(other.to_string()).into(),
      }
    })
}
