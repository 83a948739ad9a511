// cart_request/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its structural operations.

use crate::core::step::{Handler, StepDef};
use crate::error::{PipelineError, Result};
use std::collections::HashMap;
use std::fmt;

/// An ordered list of named steps, each with `before`, `on` and `after` handlers.
///
/// `TData` is the per-request context type. `Err` is what handlers return
/// and what [`Pipeline::run`] reports; it must absorb [`PipelineError`] so
/// configuration faults surface through the same channel.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef>,
  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Creates a pipeline from `(name, optional)` pairs, in execution order.
  ///
  /// A repeated name keeps its first position.
  pub fn new(step_defs: &[(&str, bool)]) -> Self {
    let mut steps: Vec<StepDef> = Vec::with_capacity(step_defs.len());
    for (name, optional) in step_defs {
      if !steps.iter().any(|s| s.name == *name) {
        steps.push(StepDef::new(*name, *optional));
      }
    }

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub(crate) fn position_of(&self, step_name: &str) -> Result<usize> {
    self
      .steps
      .iter()
      .position(|s| s.name == step_name)
      .ok_or_else(|| PipelineError::StepNotFound {
        step_name: step_name.to_string(),
      })
  }

  fn ensure_step_not_exists(&self, step_name: &str) -> Result<()> {
    if self.steps.iter().any(|s| s.name == step_name) {
      return Err(PipelineError::DuplicateStep {
        step_name: step_name.to_string(),
      });
    }
    Ok(())
  }

  pub fn insert_before_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
  ) -> Result<()> {
    let idx = self.position_of(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx, StepDef::new(name, optional));
    Ok(())
  }

  pub fn insert_after_step<S: Into<String>>(
    &mut self,
    existing_step_name: &str,
    new_step_name: S,
    optional: bool,
  ) -> Result<()> {
    let idx = self.position_of(existing_step_name)?;
    let name: String = new_step_name.into();
    self.ensure_step_not_exists(&name)?;
    self.steps.insert(idx + 1, StepDef::new(name, optional));
    Ok(())
  }

  /// Removes a step and every handler attached to it. Unknown names are a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Ok(idx) = self.position_of(step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }

  pub fn set_optional(&mut self, step_name: &str, optional: bool) -> Result<()> {
    let idx = self.position_of(step_name)?;
    if let Some(step) = self.steps.get_mut(idx) {
      step.optional = optional;
    }
    Ok(())
  }
}

impl<TData, Err> fmt::Debug for Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline")
      .field("steps", &self.steps)
      .field("before_handlers", &self.before.values().map(Vec::len).sum::<usize>())
      .field("on_handlers", &self.on.values().map(Vec::len).sum::<usize>())
      .field("after_handlers", &self.after.values().map(Vec::len).sum::<usize>())
      .finish()
  }
}
