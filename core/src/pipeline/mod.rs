// cart_request/src/pipeline/mod.rs

//! Step pipeline: definition, handler registration and execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Pipeline;
