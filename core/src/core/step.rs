// cart_request/src/core/step.rs

use super::ContextData;
use super::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A named slot in a pipeline. Handlers attach to steps by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
  /// An optional step without handlers is skipped instead of failing the run.
  pub optional: bool,
}

impl StepDef {
  pub fn new(name: impl Into<String>, optional: bool) -> Self {
    Self {
      name: name.into(),
      optional,
    }
  }
}

/// Boxed async step handler.
///
/// Takes a clone of the run's `ContextData<TData>` and resolves to the flow
/// signal or the pipeline's error type. Lock guards taken inside the handler
/// must be released before it awaits.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
