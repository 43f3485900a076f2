use std::path::PathBuf;
use thiserror::Error;

/// A scenario input that falls outside its valid range.
///
/// `field` is the dotted path of the offending input (`site.storm_depth_mm`,
/// `mound_bed.porosity`, ...) so callers can surface it to the user as-is.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must lie in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("failed to read scenario file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Dotted name of the offending input, if the error is about a value.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::NotFinite { field }
            | ConfigError::NonPositive { field, .. }
            | ConfigError::Negative { field, .. }
            | ConfigError::OutOfRange { field, .. } => Some(field),
            ConfigError::Read { .. } | ConfigError::Parse { .. } => None,
        }
    }
}

// Range checks shared by the config types

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Fraction in the closed interval [0, 1].
pub(crate) fn fraction(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&finite(field, value)?) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            range: "[0, 1]",
        })
    }
}
