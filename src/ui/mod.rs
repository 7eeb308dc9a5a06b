//! UI layer: terminal session, event source, and the prompt screen.

mod event_source;
pub mod shell;
mod terminal;
mod view;

pub use event_source::CrosstermEventSource;
