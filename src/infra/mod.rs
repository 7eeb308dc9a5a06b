//! Infrastructure layer: configuration, logging, and error taxonomy.

pub mod config;
pub mod error;
pub mod logging;
