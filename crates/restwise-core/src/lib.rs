//! # Restwise Core Library
//!
//! This library provides the core logic for Restwise, a bedtime
//! recommendation tool. It implements a CLI-first philosophy where the
//! whole calculation is available via a standalone CLI binary, with any
//! richer front end being a thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Estimator**: a pure, synchronous request/response function -- three
//!   collected inputs, one model invocation, one bedtime or one fixed
//!   failure alert
//! - **Model boundary**: the pre-trained regression artifact sits behind a
//!   trait so the shipped artifact is replaceable and tests can inject
//!   deterministic stand-ins
//! - **Storage**: TOML-based configuration (clock format, artifact
//!   override, input defaults)
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: feature extraction + forward pass + subtraction
//! - [`SleepModel`]: boundary trait over the trained artifact
//! - [`LinearModel`]: bundled or file-loaded regression artifact
//! - [`BedtimeAlert`]: the two-shape presentation contract
//! - [`Config`]: application configuration management

pub mod error;
pub mod estimator;
pub mod model;
pub mod storage;

pub use error::{ConfigError, CoreError, ModelError, Result};
pub use estimator::{
    Bedtime, BedtimeAlert, BedtimeEstimator, ClockFormat, SleepFeatures, SleepInput,
};
pub use model::{LinearModel, Prediction, SleepModel};
pub use storage::Config;
