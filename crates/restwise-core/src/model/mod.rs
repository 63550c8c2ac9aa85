//! Predictive model boundary.
//!
//! The estimator treats the trained regression as an opaque dependency
//! behind the [`SleepModel`] trait: three scalar features in, one sleep
//! duration out. The shipped implementation is [`LinearModel`], built
//! either from the bundled training artifact ([`trained`]) or from a JSON
//! artifact file on disk. Tests substitute their own trait impls.

pub mod trained;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::estimator::SleepFeatures;

/// Output of a model invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted actual sleep, in seconds. Non-negative.
    pub actual_sleep_seconds: f64,
}

/// Boundary trait for the pre-trained sleep model.
///
/// Implementations are injected into
/// [`BedtimeEstimator`](crate::estimator::BedtimeEstimator), which treats
/// them as a black box. A failed prediction is the one fallible step of an
/// estimation.
pub trait SleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<Prediction, ModelError>;
}

/// Linear regression over z-standardized features.
///
/// `sleep = intercept + sum(coef[i] * (x[i] - mean[i]) / scale[i])`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub version: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
    pub intercept_seconds: f64,
}

impl LinearModel {
    /// Model built from the bundled training artifact.
    pub fn bundled() -> Self {
        Self {
            version: trained::VERSION.to_string(),
            feature_names: trained::FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: trained::COEFFICIENTS.to_vec(),
            scaler_mean: trained::SCALER_MEAN.to_vec(),
            scaler_scale: trained::SCALER_SCALE.to_vec(),
            intercept_seconds: trained::INTERCEPT_SECONDS,
        }
    }

    /// Load and validate a JSON artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LoadFailed`] when the file cannot be read or
    /// parsed, and [`ModelError::Malformed`] / [`ModelError::FeatureArity`]
    /// when the parsed parameters are unusable.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let model: LinearModel =
            serde_json::from_str(&content).map_err(|e| ModelError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Reject artifacts whose parameter arrays disagree in length or carry
    /// unusable values.
    fn validate(&self) -> Result<(), ModelError> {
        let expected = self.feature_names.len();
        for got in [
            self.coefficients.len(),
            self.scaler_mean.len(),
            self.scaler_scale.len(),
        ] {
            if got != expected {
                return Err(ModelError::FeatureArity { expected, got });
            }
        }
        let params = self
            .coefficients
            .iter()
            .chain(&self.scaler_mean)
            .chain(&self.scaler_scale)
            .chain(std::iter::once(&self.intercept_seconds));
        for value in params {
            if !value.is_finite() {
                return Err(ModelError::Malformed("non-finite parameter".into()));
            }
        }
        if self.scaler_scale.iter().any(|s| *s == 0.0) {
            return Err(ModelError::Malformed("zero scaler scale".into()));
        }
        Ok(())
    }
}

impl SleepModel for LinearModel {
    fn predict(&self, features: &SleepFeatures) -> Result<Prediction, ModelError> {
        let xs = features.as_array();
        if xs.len() != self.coefficients.len() {
            return Err(ModelError::FeatureArity {
                expected: self.coefficients.len(),
                got: xs.len(),
            });
        }

        let mut seconds = self.intercept_seconds;
        for (i, x) in xs.iter().enumerate() {
            seconds += self.coefficients[i] * ((x - self.scaler_mean[i]) / self.scaler_scale[i]);
        }

        if !seconds.is_finite() {
            return Err(ModelError::NonFinitePrediction);
        }
        Ok(Prediction {
            // The contract is a non-negative duration.
            actual_sleep_seconds: seconds.max(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    const ARTIFACT_JSON: &str = indoc! {r#"
        {
            "version": "test-artifact",
            "feature_names": ["wake_seconds", "estimated_sleep_hours", "coffee_cups"],
            "coefficients": [500.0, 3300.0, 1100.0],
            "scaler_mean": [27000.0, 8.0, 3.0],
            "scaler_scale": [5400.0, 1.5, 2.5],
            "intercept_seconds": 28800.0
        }
    "#};

    fn features(wake_seconds: f64, sleep_hours: f64, coffee_cups: f64) -> SleepFeatures {
        SleepFeatures {
            wake_seconds,
            sleep_hours,
            coffee_cups,
        }
    }

    #[test]
    fn bundled_artifact_is_valid() {
        let model = LinearModel::bundled();
        assert!(model.validate().is_ok());
        assert_eq!(model.feature_names.len(), 3);
    }

    #[test]
    fn bundled_prediction_is_plausible_for_mid_range_input() {
        let model = LinearModel::bundled();
        // Wake 07:00, 8 hours desired, 2 cups.
        let prediction = model.predict(&features(25_200.0, 8.0, 2.0)).unwrap();
        let hours = prediction.actual_sleep_seconds / 3600.0;
        assert!(hours > 6.0 && hours < 10.0, "got {hours} hours");
    }

    #[test]
    fn linear_math_matches_by_hand() {
        let model = LinearModel {
            version: "hand".into(),
            feature_names: vec!["a".into(), "b".into(), "c".into()],
            coefficients: vec![100.0, 200.0, 300.0],
            scaler_mean: vec![0.0, 0.0, 0.0],
            scaler_scale: vec![1.0, 1.0, 1.0],
            intercept_seconds: 1000.0,
        };
        let prediction = model.predict(&features(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(prediction.actual_sleep_seconds, 1000.0 + 100.0 + 400.0 + 900.0);
    }

    #[test]
    fn negative_output_clamps_to_zero() {
        let model = LinearModel {
            intercept_seconds: -50_000.0,
            ..LinearModel::bundled()
        };
        let prediction = model.predict(&features(27_000.0, 8.0, 3.0)).unwrap();
        assert_eq!(prediction.actual_sleep_seconds, 0.0);
    }

    #[test]
    fn non_finite_parameter_is_malformed() {
        let model = LinearModel {
            intercept_seconds: f64::NAN,
            ..LinearModel::bundled()
        };
        assert!(matches!(model.validate(), Err(ModelError::Malformed(_))));
    }

    #[test]
    fn zero_scaler_scale_is_malformed() {
        let mut model = LinearModel::bundled();
        model.scaler_scale[1] = 0.0;
        assert!(matches!(model.validate(), Err(ModelError::Malformed(_))));
    }

    #[test]
    fn load_parses_artifact_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ARTIFACT_JSON.as_bytes()).unwrap();

        let model = LinearModel::load(file.path()).unwrap();
        assert_eq!(model.version, "test-artifact");
        assert!(model.predict(&features(25_200.0, 8.0, 2.0)).is_ok());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(
            LinearModel::load(file.path()),
            Err(ModelError::LoadFailed { .. })
        ));
    }

    #[test]
    fn load_rejects_arity_mismatch() {
        let json = ARTIFACT_JSON.replace(
            "\"coefficients\": [500.0, 3300.0, 1100.0]",
            "\"coefficients\": [500.0, 3300.0]",
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            LinearModel::load(file.path()),
            Err(ModelError::FeatureArity { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn missing_file_is_load_failure() {
        let path = Path::new("/nonexistent/sleep-model.json");
        assert!(matches!(
            LinearModel::load(path),
            Err(ModelError::LoadFailed { .. })
        ));
    }
}
