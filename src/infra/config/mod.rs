mod loader;
mod merge;
mod settings;

pub use loader::load;
pub use settings::{DbSettings, LoggingSettings, ServiceSettings, WalletyConfig};
