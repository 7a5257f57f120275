//! Logging
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].
//! `RUST_LOG` wins over the configured level when set.

use std::path::Path;

use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Errors installing the subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file: {0}")]
    File(#[from] InitError),

    #[error("Subscriber already installed: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Install the subscriber; fails if one is already set or the log file
/// cannot be opened
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let mut layers: Vec<BoxedLayer> = vec![console_layer(&config.format)];
    if let Some(file) = config.file.as_deref().filter(|f| !f.is_empty()) {
        layers.push(file_layer(Path::new(file))?);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;
    Ok(())
}

/// A bare level applies to this crate and the HTTP trace layer;
/// anything else is taken as a full directive string
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        return "linktree=info,tower_http=info".to_string();
    }
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    format!("linktree={level},tower_http={level}")
}

fn console_layer(format: &str) -> BoxedLayer {
    match format {
        "json" => tracing_subscriber::fmt::layer().json().boxed(),
        "compact" => tracing_subscriber::fmt::layer().compact().boxed(),
        _ => tracing_subscriber::fmt::layer().boxed(),
    }
}

fn file_layer(path: &Path) -> Result<BoxedLayer, InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "linktree.log".to_string());

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(appender)
        .boxed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives("debug"), "linktree=debug,tower_http=debug");
        assert_eq!(filter_directives(""), "linktree=info,tower_http=info");
        assert_eq!(filter_directives("warn,linktree=trace"), "warn,linktree=trace");
        assert_eq!(filter_directives("hyper=off"), "hyper=off");
    }

    #[test]
    fn test_directives_parse() {
        for level in ["info", "trace", "warn,linktree=debug"] {
            assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
        }
    }

    #[test]
    fn test_file_layer_opens_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linktree.log");

        assert!(file_layer(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file() {
        let config = LoggingConfig {
            file: Some("/proc/linktree-missing/logs/linktree.log".to_string()),
            ..Default::default()
        };

        let err = init(&config).unwrap_err();
        assert!(matches!(err, LoggingError::File(_)));
        assert!(err.to_string().starts_with("Cannot open log file"));
    }
}
