// cart_request/examples/add_item_request.rs

use cart_request::{CartItemRequest, ContextData, Pipeline, PipelineControl, PipelineError, PipelineResult, ProductId};
use tracing::{info, warn};

// 1. The per-request context: the payload plus whatever the later steps produce.
#[derive(Debug, Default)]
struct AddItemContext {
  request: CartItemRequest,
  forwarded: Option<ProductId>,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Add Item Request Example ---");

  // 2. A validation gate followed by the downstream handoff.
  let mut pipeline = Pipeline::<AddItemContext, PipelineError>::new(&[("validate", false), ("forward", false)]);
  pipeline.on_validate("validate", |ctx: &AddItemContext| &ctx.request)?;
  pipeline.on("forward", |ctx: ContextData<AddItemContext>| async move {
    let mut data = ctx.write();
    data.forwarded = data.request.product_id();
    Ok::<_, PipelineError>(PipelineControl::Continue)
  })?;

  // 3. Feed it the payload shapes a client might send.
  for body in [r#"{"productId": 42}"#, "{}", r#"{"productId": null}"#, r#"{"productId": -1}"#] {
    let request: CartItemRequest = match serde_json::from_str(body) {
      Ok(request) => request,
      Err(e) => {
        warn!(body, error = %e, "Payload did not deserialize.");
        continue;
      }
    };

    let ctx = ContextData::new(AddItemContext {
      request,
      ..Default::default()
    });
    match pipeline.run(ctx.clone()).await {
      Ok(PipelineResult::Completed) => info!(body, forwarded = ?ctx.read().forwarded, "Accepted."),
      Ok(PipelineResult::Stopped) => info!(body, "Stopped early."),
      Err(e) => {
        let reason = std::error::Error::source(&e).map(ToString::to_string).unwrap_or_else(|| e.to_string());
        warn!(body, %reason, "Rejected.");
      }
    }
  }

  Ok(())
}
