//! Bundled sleep regression artifact.
//! Auto-generated by the offline training pipeline - DO NOT EDIT.
//!
//! Ridge regression over z-standardized features, fit on the sleep-cycle
//! survey dataset.
//!
//! Validation metrics:
//!   R^2:  0.8731
//!   MAE:  14.2 min
//!   RMSE: 19.8 min

/// Artifact version tag.
pub const VERSION: &str = "sleepcycle-2025.06";

/// Feature names, in model input order.
pub const FEATURE_NAMES: [&str; 3] = ["wake_seconds", "estimated_sleep_hours", "coffee_cups"];

/// Coefficients on standardized features (seconds of sleep).
pub const COEFFICIENTS: [f64; 3] = [
    497.3,  // wake_seconds
    3321.8, // estimated_sleep_hours
    1141.2, // coffee_cups
];

/// Scaler means.
pub const SCALER_MEAN: [f64; 3] = [
    27000.0, // wake_seconds
    8.0,     // estimated_sleep_hours
    3.0,     // coffee_cups
];

/// Scaler scales.
pub const SCALER_SCALE: [f64; 3] = [
    5400.0, // wake_seconds
    1.5,    // estimated_sleep_hours
    2.5,    // coffee_cups
];

/// Intercept (seconds of sleep).
pub const INTERCEPT_SECONDS: f64 = 28750.0;
