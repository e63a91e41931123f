//! Tracing subscriber setup for the server binary.
//!
//! Environment variables:
//!   LOG_FORMAT  - "json" or "text" (default: "text")
//!   LOG_FILE    - path to a log file, rotated daily (default: stdout)
//!   LOG_ANSI    - "true"/"1" or "false"/"0" (default: on for stdout, off for files)
//!   RUST_LOG    - standard env filter (default: [`DEFAULT_FILTER`])

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str =
    "article_portal=debug,portal_web=debug,portal_client=debug,portal_core=debug,tower_http=debug";

const DEFAULT_LOG_FILE_NAME: &str = "article-portal.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Where and how log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub ansi: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("LOG_FORMAT").ok().as_deref(),
            std::env::var("LOG_FILE").ok().as_deref(),
            std::env::var("LOG_ANSI").ok().as_deref(),
        )
    }

    fn from_values(format: Option<&str>, file: Option<&str>, ansi: Option<&str>) -> Self {
        let format = match format.map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let file = file
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(PathBuf::from);
        let ansi = match ansi.map(str::trim) {
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            // escape codes only make sense on a terminal
            _ => file.is_none(),
        };
        Self { format, file, ansi }
    }

    /// Directory and file name for the rolling appender.
    fn file_parts(path: &Path) -> (PathBuf, String) {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME)
            .to_string();
        (dir, name)
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live as long
/// as the process when logging to a file.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, guard) = match &settings.file {
        Some(path) => {
            let (dir, name) = LogSettings::file_parts(path);
            let appender = tracing_appender::rolling::daily(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(settings.ansi);
    let registry = tracing_subscriber::registry().with(env_filter);
    match settings.format {
        LogFormat::Json => registry.with(layer.json()).init(),
        LogFormat::Text => registry.with(layer).init(),
    }

    info!(
        log_format = ?settings.format,
        log_file = %settings
            .file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string()),
        "Logging initialized"
    );
    guard
}
