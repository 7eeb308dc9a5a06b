use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    infra::logging::LogSink,
    ui,
    usecases::{bootstrap, prompt::DefaultPromptOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command_or_default();

    // The shell owns the terminal while it runs, so interactive mode routes
    // log records to a file instead of stdout.
    let sink = match command {
        Command::Run => LogSink::LogFile,
        Command::Headless => LogSink::Stdout,
    };

    let (context, _logging) = bootstrap::bootstrap(cli.config_dir.as_deref(), sink)?;

    tracing::debug!(
        app = %context.config.app_name,
        structured_logging = context.config.logging.structured_logging,
        service_port = context.config.service.port,
        service_debug = context.config.service.debug,
        db_variant = %context.config.db.variant,
        db_username = %context.config.db.username,
        db_name = %context.config.db.dbname,
        "configuration loaded"
    );
    tracing::debug!("Version 1 of Wallety");
    tracing::debug!(
        format = "DD-MM-YYYY\tTYPE\tCATEGORY\tMOP\tSOURCE\tDESCRIPTION",
        "add your expenses below"
    );

    match command {
        Command::Run => {
            let mut event_source = ui::CrosstermEventSource::default();
            let mut orchestrator = DefaultPromptOrchestrator::default();
            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Headless => {
            tracing::info!("headless bootstrap complete, no shell requested");
        }
    }

    Ok(())
}
