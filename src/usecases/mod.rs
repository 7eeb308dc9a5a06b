//! Application use cases: startup wiring and the prompt orchestrator.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod prompt;
