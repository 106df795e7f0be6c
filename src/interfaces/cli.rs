//! Command-line front-end for the bedtime estimator.
//!
//! The presentation layer owns all user-input validation: the estimator
//! itself accepts any positive sleep amount and any coffee count, so the
//! range limits of the original form live here.

use crate::application::estimator::BedtimeEstimator;
use crate::application::predictor::{LinearRegressionPredictor, SleepPredictor};
use crate::config::Config;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::error;

/// Inclusive range for the desired sleep amount, in hours
pub const SLEEP_HOURS_RANGE: (f64, f64) = (4.0, 12.0);
/// The sleep amount must sit on this grid, in hours
pub const SLEEP_HOURS_STEP: f64 = 0.25;
/// Inclusive range for the daily coffee intake, in cups
pub const COFFEE_CUPS_RANGE: (u32, u32) = (1, 20);

const FALLBACK_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Recommends a bedtime for your wake-up time, desired sleep and coffee intake", long_about = None)]
pub struct Cli {
    /// Wake-up time (HH:MM, 24-hour)
    #[arg(short, long)]
    pub wake: Option<String>,

    /// Desired amount of sleep in hours (4 to 12, steps of 0.25)
    #[arg(short, long)]
    pub sleep: Option<f64>,

    /// Daily coffee intake in cups (1 to 20)
    #[arg(short, long)]
    pub coffee: Option<u32>,

    /// JSON model artifact overriding the bundled coefficients
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Emit the recommendation as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable recommendation, for `--json`.
#[derive(Debug, Serialize)]
pub struct BedtimeReport {
    /// Short time style, e.g. "10:42 PM"
    pub bedtime: String,
    /// 24-hour form of the same instant, e.g. "22:42"
    pub bedtime_24h: String,
    /// True when the bedtime falls on the evening before the wake-up day
    pub previous_day: bool,
    pub predicted_sleep_hours: f64,
    pub model: String,
    pub model_version: String,
}

pub fn parse_wake_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .with_context(|| format!("Invalid wake time '{}': expected HH:MM (24-hour)", input))
}

pub fn validate_sleep_amount(hours: f64) -> Result<f64> {
    let (min, max) = SLEEP_HOURS_RANGE;
    if !hours.is_finite() || hours < min || hours > max {
        anyhow::bail!(
            "Sleep amount {} is out of range: must be between {} and {} hours",
            hours,
            min,
            max
        );
    }
    let steps = hours / SLEEP_HOURS_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        anyhow::bail!(
            "Sleep amount {} must be a multiple of {} hours",
            hours,
            SLEEP_HOURS_STEP
        );
    }
    Ok(hours)
}

pub fn validate_coffee_cups(cups: u32) -> Result<u32> {
    let (min, max) = COFFEE_CUPS_RANGE;
    if cups < min || cups > max {
        anyhow::bail!(
            "Coffee intake {} is out of range: must be between {} and {} cups",
            cups,
            min,
            max
        );
    }
    Ok(cups)
}

pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let wake = match &cli.wake {
        Some(input) => parse_wake_time(input)?,
        None => config.default_wake,
    };
    let sleep_hours = validate_sleep_amount(cli.sleep.unwrap_or(config.default_sleep_hours))?;
    let coffee_cups = validate_coffee_cups(cli.coffee.unwrap_or(config.default_coffee_cups))?;

    let model_path = cli.model.as_ref().or(config.model_path.as_ref());
    let predictor = match model_path {
        Some(path) => LinearRegressionPredictor::from_artifact(path)?,
        None => LinearRegressionPredictor::bundled(),
    };
    let model_name = predictor.name().to_string();
    let model_version = predictor.version().to_string();

    let estimator = BedtimeEstimator::new(predictor);
    let bedtime = match estimator.estimate(wake, sleep_hours, coffee_cups) {
        Ok(bedtime) => bedtime,
        Err(err) => {
            error!("Bedtime estimation failed: {}", err);
            println!("{}", FALLBACK_MESSAGE);
            return Err(err.into());
        }
    };

    if cli.json {
        let report = BedtimeReport {
            bedtime: bedtime.to_string(),
            bedtime_24h: bedtime.time.format("%H:%M").to_string(),
            previous_day: bedtime.previous_day,
            predicted_sleep_hours: bedtime.sleep_need.num_seconds() as f64 / 3600.0,
            model: model_name,
            model_version,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if bedtime.previous_day {
        println!("Your ideal bedtime is {} (the evening before)", bedtime);
    } else {
        println!("Your ideal bedtime is {}", bedtime);
    }

    Ok(())
}
