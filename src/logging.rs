use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file when `--log-file` is not given.
pub const LOG_ENV: &str = "POSTBOARD_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so the TUI is not corrupted.
/// `log_path` (or `POSTBOARD_LOG`) enables it; the file is created as
/// `{path}.{timestamp}.{pid}` so parallel runs never share a file.
pub fn init_tracing(log_path: Option<&Path>) {
    let log_path = match log_path {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV) {
            Ok(path) => path,
            Err(_) => return,
        },
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
