// tests/validation_pipeline_tests.rs
mod common;

use cart_request::{CartItemRequest, ContextData, Pipeline, PipelineError, PipelineResult, ValidationError};
use common::*;
use serial_test::serial;
use std::error::Error as _;

fn add_item_pipeline() -> Pipeline<AddItemContext, TestError> {
  let mut p = Pipeline::<AddItemContext, TestError>::new(&[("validate_request", false), ("hand_off", false)]);
  p.on_validate("validate_request", |ctx: &AddItemContext| &ctx.request)
    .unwrap();
  p.on("hand_off", create_handoff_handler()).unwrap();
  p
}

async fn run_with_body(body: &str) -> (Result<PipelineResult, TestError>, AddItemContext) {
  let request: CartItemRequest = serde_json::from_str(body).unwrap();
  let ctx = ContextData::new(AddItemContext {
    request,
    ..Default::default()
  });
  let result = add_item_pipeline().run(ctx.clone()).await;
  let snapshot = ctx.read().clone();
  (result, snapshot)
}

#[tokio::test]
#[serial]
async fn test_valid_request_reaches_handoff() {
  setup_tracing();
  let (result, ctx) = run_with_body(r#"{"productId": 42}"#).await;
  assert_eq!(result.unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.handed_off, vec![42]);
}

#[tokio::test]
#[serial]
async fn test_missing_product_id_never_reaches_handoff() {
  setup_tracing();
  for body in ["{}", r#"{"productId": null}"#] {
    let (result, ctx) = run_with_body(body).await;
    assert_eq!(
      result.unwrap_err(),
      TestError::Validation(ValidationError::missing_product_id()),
      "body: {body}"
    );
    assert!(ctx.handed_off.is_empty());
  }
}

#[tokio::test]
#[serial]
async fn test_negative_product_id_is_handed_off_unchanged() {
  setup_tracing();
  let (result, ctx) = run_with_body(r#"{"productId": -1}"#).await;
  assert_eq!(result.unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.handed_off, vec![-1]);
}

#[tokio::test]
#[serial]
async fn test_same_pipeline_serves_independent_requests() {
  setup_tracing();
  let pipeline = add_item_pipeline();

  let good = ContextData::new(AddItemContext {
    request: CartItemRequest::new(1),
    ..Default::default()
  });
  let bad = ContextData::new(AddItemContext::default());

  let (good_result, bad_result) = tokio::join!(pipeline.run(good.clone()), pipeline.run(bad.clone()));
  assert_eq!(good_result.unwrap(), PipelineResult::Completed);
  assert!(bad_result.is_err());
  assert_eq!(good.read().handed_off, vec![1]);
  assert!(bad.read().handed_off.is_empty());
}

#[tokio::test]
#[serial]
async fn test_validation_with_pipeline_error_type() {
  setup_tracing();
  let mut p = Pipeline::<AddItemContext, PipelineError>::new(&[("validate_request", false)]);
  p.on_validate("validate_request", |ctx: &AddItemContext| &ctx.request)
    .unwrap();

  let err = p.run(ContextData::new(AddItemContext::default())).await.unwrap_err();
  let source = err.source().expect("validation error kept as source");
  assert_eq!(source.to_string(), "must pass a product id to be added to cart");
}

#[tokio::test]
#[serial]
async fn test_context_can_be_reclaimed_after_run() {
  setup_tracing();
  let ctx = ContextData::new(AddItemContext {
    request: CartItemRequest::new(3),
    ..Default::default()
  });
  add_item_pipeline().run(ctx.clone()).await.unwrap();

  let data = ctx.try_into_inner().expect("no other handles remain");
  assert_eq!(data.handed_off, vec![3]);
}
