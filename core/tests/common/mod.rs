// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use cart_request::{CartItemRequest, ContextData, PipelineControl, PipelineError, ProductId, ValidationError};
use tracing::Level;

// --- Common Context Structs ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

/// Context for pipelines that gate on a cart item request.
#[derive(Clone, Debug, Default)]
pub struct AddItemContext {
  pub request: CartItemRequest,
  pub handed_off: Vec<ProductId>,
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Pipeline error: {0}")]
  Pipeline(String), // Stored as Debug text so the enum stays Eq.

  #[error("{0}")]
  Validation(ValidationError),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<PipelineError> for TestError {
  fn from(pe: PipelineError) -> Self {
    TestError::Pipeline(format!("{:?}", pe))
  }
}

impl From<ValidationError> for TestError {
  fn from(ve: ValidationError) -> Self {
    TestError::Validation(ve)
  }
}

// --- Common Handler Creators ---
pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> impl Fn(ContextData<TestContext>) -> std::future::Ready<Result<PipelineControl, TestError>> + Send + Sync + 'static {
  move |ctx: ContextData<TestContext>| {
    let mut guard = ctx.write();
    guard.counter += 1;
    guard.message.push_str(message_to_append);
    guard.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_handlers", step = step_name, "executed, counter: {}", guard.counter);
    let stop = guard.should_stop_at.as_deref() == Some(step_name);
    std::future::ready(Ok(if stop {
      PipelineControl::Stop
    } else {
      PipelineControl::Continue
    }))
  }
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(ContextData<TestContext>) -> std::future::Ready<Result<PipelineControl, TestError>> + Send + Sync + 'static {
  move |ctx: ContextData<TestContext>| {
    ctx.write().steps_executed.push(step_name.to_string());
    tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", error_message);
    std::future::ready(Err(TestError::Handler(error_message.to_string())))
  }
}

/// Records the product id into `handed_off`, standing in for the cart service.
pub fn create_handoff_handler(
) -> impl Fn(ContextData<AddItemContext>) -> std::future::Ready<Result<PipelineControl, TestError>> + Send + Sync + 'static {
  move |ctx: ContextData<AddItemContext>| {
    let mut guard = ctx.write();
    let outcome = guard.request.clone().into_validated().map_err(TestError::from);
    std::future::ready(outcome.map(|item| {
      guard.handed_off.push(item.product_id());
      PipelineControl::Continue
    }))
  }
}

// --- Helper for Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
