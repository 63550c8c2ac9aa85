use chrono::{Local, NaiveTime};
use clap::Args;

use restwise_core::{BedtimeAlert, BedtimeEstimator, Config, CoreError, LinearModel, SleepInput};

// Input ranges enforced here, at the presentation boundary. The estimator
// forwards whatever it receives.
const SLEEP_HOURS_MIN: f64 = 4.0;
const SLEEP_HOURS_MAX: f64 = 12.0;
const SLEEP_HOURS_STEP: f64 = 0.25;
const COFFEE_CUPS_MIN: u32 = 1;
const COFFEE_CUPS_MAX: u32 = 20;

#[derive(Args)]
pub struct EstimateArgs {
    /// Desired wake-up time, HH:MM (24-hour)
    #[arg(long)]
    pub wake: String,
    /// Desired sleep in hours, 4-12 in quarter-hour steps
    #[arg(long)]
    pub sleep: Option<f64>,
    /// Daily coffee intake in cups, 1-20
    #[arg(long)]
    pub coffee: Option<u32>,
    /// Print the alert as JSON
    #[arg(long)]
    pub json: bool,
}

fn validate(sleep_hours: f64, coffee_cups: u32) -> Result<(), String> {
    if !(SLEEP_HOURS_MIN..=SLEEP_HOURS_MAX).contains(&sleep_hours) {
        return Err(format!(
            "sleep hours must be between {SLEEP_HOURS_MIN} and {SLEEP_HOURS_MAX}"
        ));
    }
    if (sleep_hours / SLEEP_HOURS_STEP).fract() != 0.0 {
        return Err(format!(
            "sleep hours must be a multiple of {SLEEP_HOURS_STEP}"
        ));
    }
    if !(COFFEE_CUPS_MIN..=COFFEE_CUPS_MAX).contains(&coffee_cups) {
        return Err(format!(
            "coffee cups must be between {COFFEE_CUPS_MIN} and {COFFEE_CUPS_MAX}"
        ));
    }
    Ok(())
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let sleep_hours = args.sleep.unwrap_or(config.defaults.sleep_hours);
    let coffee_cups = args.coffee.unwrap_or(config.defaults.coffee_cups);
    validate(sleep_hours, coffee_cups)?;

    let time = NaiveTime::parse_from_str(&args.wake, "%H:%M")
        .map_err(|_| format!("invalid wake time '{}', expected HH:MM", args.wake))?;
    let wake_up = Local::now()
        .with_time(time)
        .single()
        .ok_or_else(|| format!("wake time '{}' is not representable today", args.wake))?;

    let input = SleepInput {
        wake_up,
        sleep_hours,
        coffee_cups,
    };

    // The artifact is constructed fresh on every run; a load failure is an
    // estimation failure like any other and collapses into the same alert.
    let outcome = match &config.model.artifact_path {
        Some(path) => LinearModel::load(path),
        None => Ok(LinearModel::bundled()),
    }
    .map_err(CoreError::from)
    .and_then(|model| BedtimeEstimator::new(model).estimate(&input));

    let alert = BedtimeAlert::from_outcome(&outcome, config.clock.format);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alert)?);
    } else {
        println!("{}", alert.title);
        println!("{}", alert.message);
    }
    Ok(())
}
