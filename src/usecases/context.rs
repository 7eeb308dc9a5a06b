use crate::infra::config::WalletyConfig;

#[derive(Debug)]
pub struct AppContext {
    pub config: WalletyConfig,
}

impl AppContext {
    pub fn new(config: WalletyConfig) -> Self {
        Self { config }
    }
}
