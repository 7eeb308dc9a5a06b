//! Domain layer: events and the prompt state machine.

pub mod events;
pub mod prompt_state;
