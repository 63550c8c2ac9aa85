//! Bedtime estimation.
//!
//! A single synchronous forward pass: extract three scalar features from
//! the collected inputs, invoke the injected model, subtract the predicted
//! sleep duration from the wake-up time.
//!
//! ```text
//! SleepInput -> SleepFeatures -> SleepModel::predict -> Bedtime
//! ```
//!
//! The estimator performs no input range validation -- the collecting shell
//! owns that -- and holds no state across calls.

use chrono::{DateTime, Duration, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Prediction, SleepModel};

/// Alert title on success.
pub const SUCCESS_TITLE: &str = "Your ideal bedtime is...";
/// Alert title on failure.
pub const FAILURE_TITLE: &str = "Error";
/// Alert message on failure, regardless of cause.
pub const FAILURE_MESSAGE: &str = "Sorry there was a problem calculating your bedtime.";

/// One calculation request: the three values collected by the shell.
///
/// Only the hour and minute of `wake_up` are semantically relevant; the
/// date component merely anchors the subtraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SleepInput {
    pub wake_up: DateTime<Local>,
    /// Desired sleep in hours. The shell constrains this to [4, 12] in
    /// quarter-hour steps; the estimator forwards it unchecked.
    pub sleep_hours: f64,
    /// Daily coffee intake. The shell constrains this to [1, 20].
    pub coffee_cups: u32,
}

/// Scalar features handed to the model, in model input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake-up time as seconds since local midnight (hour and minute only).
    pub wake_seconds: f64,
    pub sleep_hours: f64,
    pub coffee_cups: f64,
}

impl SleepFeatures {
    /// Extract features from one input.
    ///
    /// Pure and date-independent: only the hour and minute of `wake_up`
    /// contribute, so the same wall-clock time yields the same features on
    /// any date.
    pub fn extract(input: &SleepInput) -> Self {
        Self {
            wake_seconds: f64::from(input.wake_up.hour() * 3600 + input.wake_up.minute() * 60),
            sleep_hours: input.sleep_hours,
            coffee_cups: f64::from(input.coffee_cups),
        }
    }

    /// Features as a fixed-order vector.
    pub fn as_array(&self) -> [f64; 3] {
        [self.wake_seconds, self.sleep_hours, self.coffee_cups]
    }
}

/// Clock-face rendering for bedtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// "10:36 PM"
    #[serde(rename = "12h")]
    TwelveHour,
    /// "22:36"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "12h",
            ClockFormat::TwentyFourHour => "24h",
        }
    }

    /// Render a point in time as a short clock string.
    pub fn render(&self, at: &DateTime<Local>) -> String {
        match self {
            ClockFormat::TwelveHour => at.format("%-I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => at.format("%H:%M").to_string(),
        }
    }
}

impl std::str::FromStr for ClockFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "12h" => Ok(ClockFormat::TwelveHour),
            "24h" => Ok(ClockFormat::TwentyFourHour),
            other => Err(format!("expected '12h' or '24h', got '{other}'")),
        }
    }
}

/// A successfully computed bedtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bedtime {
    /// The moment to go to bed.
    pub at: DateTime<Local>,
    /// The model's predicted actual sleep, in seconds.
    pub predicted_sleep_seconds: f64,
}

impl Bedtime {
    pub fn formatted(&self, clock: ClockFormat) -> String {
        clock.render(&self.at)
    }
}

/// Bedtime estimator over an injected model.
///
/// Deterministic given a fixed model and fixed inputs; no side effects
/// beyond the model call; no retry on failure.
pub struct BedtimeEstimator<M: SleepModel> {
    model: M,
}

impl<M: SleepModel> BedtimeEstimator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Compute the bedtime for one input.
    ///
    /// # Errors
    ///
    /// Returns an error when the model fails to produce a prediction.
    /// There is no partial result.
    pub fn estimate(&self, input: &SleepInput) -> Result<Bedtime> {
        let features = SleepFeatures::extract(input);
        let Prediction {
            actual_sleep_seconds,
        } = self.model.predict(&features)?;
        let sleep = Duration::milliseconds((actual_sleep_seconds * 1000.0).round() as i64);
        Ok(Bedtime {
            at: input.wake_up - sleep,
            predicted_sleep_seconds: actual_sleep_seconds,
        })
    }
}

/// Presentation-facing outcome: a title and a message, nothing else.
///
/// Success carries the formatted bedtime; every failure collapses to one
/// fixed alert with no cause information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeAlert {
    pub title: String,
    pub message: String,
}

impl BedtimeAlert {
    pub fn success(bedtime: &Bedtime, clock: ClockFormat) -> Self {
        Self {
            title: SUCCESS_TITLE.into(),
            message: bedtime.formatted(clock),
        }
    }

    pub fn failure() -> Self {
        Self {
            title: FAILURE_TITLE.into(),
            message: FAILURE_MESSAGE.into(),
        }
    }

    /// Collapse an estimation outcome into the two-shape alert contract.
    pub fn from_outcome(outcome: &Result<Bedtime>, clock: ClockFormat) -> Self {
        match outcome {
            Ok(bedtime) => Self::success(bedtime, clock),
            Err(_) => Self::failure(),
        }
    }
}
