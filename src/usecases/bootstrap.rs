use std::path::Path;

use crate::{
    infra::{
        self,
        error::AppError,
        logging::{LoggingHandle, LogSink},
    },
    usecases::context::AppContext,
};

/// Loads the merged configuration and installs logging, in that order.
/// Configuration is a precondition for everything else, so any failure here
/// ends the run before the shell can start.
pub fn bootstrap(
    config_dir: Option<&Path>,
    sink: LogSink,
) -> Result<(AppContext, LoggingHandle), AppError> {
    let context = build_context(config_dir)?;
    let logging = infra::logging::init(&context.config.logging, sink)?;

    Ok((context, logging))
}

fn build_context(config_dir: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_dir)?;

    Ok(AppContext::new(config))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn builds_context_from_a_valid_config_pair() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        fs::write(
            dir.path().join("config.yaml"),
            "app_name: Wallety\nlogging:\n  debuglevel: info\n",
        )
        .expect("must write config fixture");
        fs::write(dir.path().join("credentials.yaml"), "db:\n  username: alice\n")
            .expect("must write credentials fixture");

        let context = build_context(Some(dir.path())).expect("context should build");

        assert_eq!(context.config.app_name, "Wallety");
        assert_eq!(context.config.db.username, "alice");
    }

    #[test]
    fn refuses_to_build_context_without_config_files() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");

        let result = build_context(Some(dir.path()));

        assert!(matches!(result, Err(AppError::ConfigRead { .. })));
    }
}
