// demos/storefront_app/src/pipelines/cart_pipeline.rs

use crate::errors::AppError;
use crate::pipelines::contexts::AddToCartCtxData;
use cart_request::{ContextData, Pipeline, PipelineControl, PipelineError};
use tracing::info;

pub const VALIDATE_STEP: &str = "validate_cart_request";
pub const HAND_OFF_STEP: &str = "hand_off_to_cart";

pub fn build_add_to_cart_pipeline() -> Result<Pipeline<AddToCartCtxData, AppError>, PipelineError> {
  let mut p = Pipeline::<AddToCartCtxData, AppError>::new(&[(VALIDATE_STEP, false), (HAND_OFF_STEP, false)]);

  // Step 1: presence check on productId. Failure ends the run before the cart service is touched.
  p.on_validate(VALIDATE_STEP, |ctx: &AddToCartCtxData| &ctx.request)?;

  // Step 2: pass the raw id downstream and keep what the cart service recorded.
  p.on(HAND_OFF_STEP, |ctx_data: ContextData<AddToCartCtxData>| {
    let prepared = {
      let guard = ctx_data.read();
      guard
        .request
        .clone()
        .into_validated()
        .map(|item| (item, guard.cart_service.clone()))
    };

    async move {
      let (item, cart_service) = prepared?;
      let line = cart_service.add_item(item.product_id()).await?;
      info!(
        "Add to Cart Pipeline: product {} handed off, cart line {}.",
        line.product_id, line.id
      );
      ctx_data.write().added_line = Some(line);
      Ok::<_, AppError>(PipelineControl::Continue)
    }
  })?;

  Ok(p)
}
