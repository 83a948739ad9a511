// cart_request/src/pipeline/execution.rs

//! `Pipeline::run()`: drives the steps against one request's context.

use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::step::Handler;
use crate::error::PipelineError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

/// What a phase asked the run loop to do next.
enum PhaseOutcome {
  Proceed,
  Halt,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Executes every step in order against `ctx_data`.
  ///
  /// Within a step, `before` handlers run first, then `on`, then `after`.
  /// A handler returning `Stop` ends the run with [`PipelineResult::Stopped`];
  /// the first handler error ends it with that error. A non-optional step with
  /// no handlers at all fails with [`PipelineError::HandlerMissing`].
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            context_type = %std::any::type_name::<TData>(),
            num_steps = self.steps.len(),
        ),
        err(level = Level::DEBUG, Display)
    )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = span!(
        Level::INFO,
        "pipeline_step",
        step_name = step_name,
        step_index = step_idx,
        optional = step_def.optional
      );

      let has_handlers = [&self.before, &self.on, &self.after]
        .iter()
        .any(|phase| phase.get(step_name).is_some_and(|v| !v.is_empty()));

      if !has_handlers {
        if step_def.optional {
          event!(parent: &step_span, Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(parent: &step_span, Level::ERROR, "Non-optional step has no handlers.");
        return Err(Err::from(PipelineError::HandlerMissing {
          step_name: step_def.name.clone(),
        }));
      }

      for (phase_name, phase) in [("before", &self.before), ("on", &self.on), ("after", &self.after)] {
        let Some(handlers) = phase.get(step_name) else {
          continue;
        };
        let outcome = Self::run_phase(phase_name, handlers, &ctx_data)
          .instrument(step_span.clone())
          .await?;
        if let PhaseOutcome::Halt = outcome {
          event!(parent: &step_span, Level::INFO, phase = phase_name, "Pipeline stopped by a handler.");
          return Ok(PipelineResult::Stopped);
        }
      }

      event!(parent: &step_span, Level::DEBUG, "Step finished.");
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }

  async fn run_phase(
    phase_name: &'static str,
    handlers: &[Handler<TData, Err>],
    ctx_data: &ContextData<TData>,
  ) -> Result<PhaseOutcome, Err> {
    for (handler_idx, handler_fn) in handlers.iter().enumerate() {
      let handler_span = span!(Level::DEBUG, "handler", phase = phase_name, handler_index = handler_idx);
      match handler_fn(ctx_data.clone()).instrument(handler_span).await {
        Ok(PipelineControl::Continue) => {}
        Ok(PipelineControl::Stop) => return Ok(PhaseOutcome::Halt),
        Err(e) => {
          event!(Level::DEBUG, phase = phase_name, error = %e, "Handler failed.");
          return Err(e);
        }
      }
    }
    Ok(PhaseOutcome::Proceed)
  }
}
