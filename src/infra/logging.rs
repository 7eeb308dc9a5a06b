use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LoggingSettings, error::AppError};

const DEFAULT_LEVEL: Level = Level::DEBUG;
const LOG_FILE: &str = "wallety.log";

/// Where log records go. The interactive shell owns the terminal, so it
/// routes records to a file; headless runs write to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    LogFile,
}

/// Keeps the non-blocking log worker alive; dropping it flushes and stops
/// the writer. Hold it until process exit.
pub struct LoggingHandle {
    _guard: Option<WorkerGuard>,
}

/// Outcome of parsing the configured level name. Garbage input never fails,
/// it falls back to debug and carries the rejected string so a warning can
/// be emitted once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLevel {
    pub level: Level,
    pub fallback_from: Option<String>,
}

pub fn resolve_level(raw: &str) -> ResolvedLevel {
    match raw.parse::<Level>() {
        Ok(level) => ResolvedLevel {
            level,
            fallback_from: None,
        },
        Err(_) => ResolvedLevel {
            level: DEFAULT_LEVEL,
            fallback_from: Some(raw.to_owned()),
        },
    }
}

/// Installs the process-wide JSON subscriber, filtered at the configured
/// level. `RUST_LOG` overrides the configured level when set.
pub fn init(settings: &LoggingSettings, sink: LogSink) -> Result<LoggingHandle, AppError> {
    let resolved = resolve_level(&settings.debug_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(resolved.level.to_string()));

    let guard = match sink {
        LogSink::Stdout => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .map_err(AppError::LoggingInit)?;
            None
        }
        LogSink::LogFile => {
            let appender = tracing_appender::rolling::never(".", LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(AppError::LoggingInit)?;
            Some(guard)
        }
    };

    emit_fallback_warning(&resolved);

    Ok(LoggingHandle { _guard: guard })
}

fn emit_fallback_warning(resolved: &ResolvedLevel) {
    if let Some(raw) = &resolved.fallback_from {
        tracing::warn!(level = %raw, "unrecognized log level in config, defaulting to debug");
    }
}
