//! Tracing setup for the host.

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use switcher_config::LoggingConfig;

/// Initialize tracing.
///
/// `RUST_LOG` wins over `logging.level`. Console output goes to stderr so it
/// never mixes with the rendered widget on stdout. With `logging.directory`
/// set, logs are also written there with daily rotation.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = match &logging.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("switcher")
                .filename_suffix("log")
                .max_log_files(30)
                .build(log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes the file on drop; keep it for the whole run.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(file_layer)
        .try_init()?;

    Ok(())
}
