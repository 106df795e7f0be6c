use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::env;
use std::path::PathBuf;

/// Application configuration, read from the environment (optionally via a
/// `.env` file). CLI flags override these values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON model artifact overriding the bundled coefficients
    pub model_path: Option<PathBuf>,
    pub default_wake: NaiveTime,
    pub default_sleep_hours: f64,
    pub default_coffee_cups: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("BEDREST_MODEL_PATH").ok().map(PathBuf::from);

        let default_wake_str =
            env::var("BEDREST_DEFAULT_WAKE").unwrap_or_else(|_| "07:00".to_string());
        let default_wake = NaiveTime::parse_from_str(&default_wake_str, "%H:%M")
            .context("Failed to parse BEDREST_DEFAULT_WAKE (expected HH:MM)")?;

        let default_sleep_hours = env::var("BEDREST_DEFAULT_SLEEP_HOURS")
            .unwrap_or_else(|_| "8.0".to_string())
            .parse::<f64>()
            .context("Failed to parse BEDREST_DEFAULT_SLEEP_HOURS")?;

        let default_coffee_cups = env::var("BEDREST_DEFAULT_COFFEE_CUPS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Failed to parse BEDREST_DEFAULT_COFFEE_CUPS")?;

        Ok(Self {
            model_path,
            default_wake,
            default_sleep_hours,
            default_coffee_cups,
        })
    }
}
