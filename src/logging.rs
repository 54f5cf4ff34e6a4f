//! Tracing subscriber setup.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name prefix; the appender adds the date.
const LOG_FILE_PREFIX: &str = "holiday-manager.log";

/// Per-user directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "holiday-manager").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber: stdout always, a daily file when `file_enabled`.
///
/// Keep the returned guard alive for the lifetime of the program, dropping it flushes the file.
pub fn init(file_enabled: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let (file_layer, guard) = match log_dir().filter(|_| file_enabled) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
