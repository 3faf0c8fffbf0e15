//! Library error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by lookups and configuration loading.
///
/// Form validation problems are not errors: they are reported as
/// [`FormErrors`](crate::core::FormErrors) data.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("unknown view '{0}' (expected /, /alerts, /map or /feedback)")]
    UnknownView(String),

    #[error("unknown alert category '{0}' (expected All, Traffic, Health, Weather or Public Notice)")]
    UnknownCategory(String),

    #[error("no zone with id {0}")]
    UnknownZone(u32),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),
}
