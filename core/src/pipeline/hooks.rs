// cart_request/src/pipeline/hooks.rs

//! Registration of `before`, `on` and `after` handlers, plus the
//! validation step helper built on top of `on`.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::core::step::Handler;
use crate::error::{PipelineError, Result, ValidationError};
use crate::pipeline::definition::Pipeline;
use crate::validate::Validate;
use std::collections::HashMap;
use std::future::Future;
use tracing::{event, Level};

#[derive(Debug, Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  fn phase_mut(&mut self, phase: Phase) -> &mut HashMap<String, Vec<Handler<TData, Err>>> {
    match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    }
  }

  fn register<F, UserProvidedErr>(
    &mut self,
    phase: Phase,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) -> Result<()>
  where
    F: Future<Output = std::result::Result<PipelineControl, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<Err> + Send + Sync + 'static,
  {
    self.position_of(step_name)?;
    let handler: Handler<TData, Err> = Box::new(move |ctx_data| {
      let user_fut = handler_fn(ctx_data);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    event!(Level::TRACE, step = step_name, ?phase, "Handler registered.");
    self
      .phase_mut(phase)
      .entry(step_name.to_string())
      .or_default()
      .push(handler);
    Ok(())
  }

  /// Registers a handler that runs before the step's `on` handlers.
  ///
  /// The handler's error type only has to convert into the pipeline's `Err`.
  pub fn before<F, UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) -> Result<()>
  where
    F: Future<Output = std::result::Result<PipelineControl, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<Err> + Send + Sync + 'static,
  {
    self.register(Phase::Before, step_name, handler_fn)
  }

  pub fn on<F, UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) -> Result<()>
  where
    F: Future<Output = std::result::Result<PipelineControl, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<Err> + Send + Sync + 'static,
  {
    self.register(Phase::On, step_name, handler_fn)
  }

  pub fn after<F, UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) -> Result<()>
  where
    F: Future<Output = std::result::Result<PipelineControl, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<Err> + Send + Sync + 'static,
  {
    self.register(Phase::After, step_name, handler_fn)
  }

  /// Makes `step_name` a validation gate.
  ///
  /// `accessor` picks the payload out of the context. When its
  /// [`Validate::validate`] fails, the run ends with that error converted
  /// into `Err` and no later step executes.
  pub fn on_validate<V, A>(&mut self, step_name: &str, accessor: A) -> Result<()>
  where
    V: Validate + ?Sized + 'static,
    A: Fn(&TData) -> &V + Send + Sync + 'static,
    Err: From<ValidationError>,
  {
    let step = step_name.to_string();
    self.register(Phase::On, step_name, move |ctx_data: ContextData<TData>| {
      let outcome = {
        let guard = ctx_data.read();
        accessor(&*guard).validate()
      };
      if let Err(e) = &outcome {
        event!(Level::DEBUG, step = %step, field = e.field(), "Validation step rejected payload.");
      }
      async move { outcome.map(|()| PipelineControl::Continue).map_err(Err::from) }
    })
  }
}
