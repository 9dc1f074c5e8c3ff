//! Service layer
//!
//! Trait-based so the connection loop can be driven with test doubles.

mod compositor;
mod execution;

pub use compositor::{CommandCompositor, Compositor, CompositorError};
pub use execution::{ExecutionError, ExecutionService, StandardExecutionService};
