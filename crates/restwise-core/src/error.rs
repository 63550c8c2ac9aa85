//! Core error types for restwise-core.
//!
//! This module defines the error hierarchy using thiserror. Note that the
//! estimation surface deliberately collapses every failure into one fixed
//! user-visible alert (see [`crate::estimator::BedtimeAlert`]); the typed
//! variants here exist for the config and model tooling surfaces and tests.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for restwise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model artifact or inference errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Model-specific errors.
///
/// Initialization and inference failures are kept as distinct variants for
/// diagnostics, but the estimation alert makes no distinction between them.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read or parse an artifact file
    #[error("Failed to load model artifact from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Artifact parsed but its parameters are unusable
    #[error("Malformed model artifact: {0}")]
    Malformed(String),

    /// Feature vector length disagrees with the artifact
    #[error("Model expects {expected} features, got {got}")]
    FeatureArity { expected: usize, got: usize },

    /// Inference produced NaN or infinity
    #[error("Model produced a non-finite prediction")]
    NonFinitePrediction,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
