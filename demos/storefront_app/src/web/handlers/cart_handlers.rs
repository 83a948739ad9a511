// demos/storefront_app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use cart_request::{CartItemRequest, ContextData, PipelineResult};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::AddToCartCtxData;
use crate::state::AppState;

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = ?req_payload.product_id())
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CartItemRequest>,
) -> Result<HttpResponse, AppError> {
  // 1. Prepare the per-request context; the payload is moved in as deserialized.
  let ctx_data = ContextData::new(AddToCartCtxData::new(
    app_state.cart_service.clone(),
    req_payload.into_inner(),
  ));

  // 2. Validate and hand off
  match app_state.add_to_cart_pipeline.run(ctx_data.clone()).await {
    Ok(PipelineResult::Completed) => {
      let added_line = ctx_data.read().added_line.clone().ok_or_else(|| {
        warn!("Add to Cart pipeline completed but no cart line was recorded.");
        AppError::Internal("Cart update completed, but item details are unavailable.".to_string())
      })?;

      info!(
        "Add to cart successful. Line ID: {}, Product ID: {}",
        added_line.id, added_line.product_id
      );

      // 3. Construct and return HTTP response
      Ok(HttpResponse::Ok().json(json!({
          "message": "Item added to cart successfully.",
          "cartItem": added_line
      })))
    }
    Ok(PipelineResult::Stopped) => {
      warn!("Add to Cart pipeline was stopped before the cart hand-off.");
      Err(AppError::Internal("Add to cart stopped before reaching the cart.".to_string()))
    }
    Err(AppError::Validation(e)) => {
      warn!(field = e.field(), "Add to cart rejected: {}", e);
      Err(AppError::Validation(e))
    }
    Err(app_err) => {
      warn!("Add to Cart pipeline failed: {:?}", app_err);
      Err(app_err)
    }
  }
}

#[instrument(name = "handler::list_cart", skip(app_state))]
pub async fn list_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.cart_service.list_items().await;
  Ok(HttpResponse::Ok().json(json!({
      "items": items,
      "maxLines": app_state.config.cart_max_lines
  })))
}
