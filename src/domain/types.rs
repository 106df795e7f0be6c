use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input features for the sleep-need regression.
///
/// Only hour and minute of the wake time matter downstream; the wake
/// time is flattened to seconds since midnight before prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake-up time expressed as seconds since midnight
    pub wake_seconds: f64,
    /// Desired amount of sleep, in hours
    pub sleep_hours: f64,
    /// Daily coffee intake, in cups
    pub coffee_cups: f64,
}

impl SleepFeatures {
    pub fn new(wake: NaiveTime, sleep_hours: f64, coffee_cups: u32) -> Self {
        use chrono::Timelike;
        Self {
            wake_seconds: f64::from(wake.hour() * 3600 + wake.minute() * 60),
            sleep_hours,
            coffee_cups: f64::from(coffee_cups),
        }
    }
}

/// A recommended bedtime, derived from the wake time and the predicted
/// sleep need. Never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bedtime {
    /// Time of day at which the user should go to sleep
    pub time: NaiveTime,
    /// True when the subtraction wrapped past midnight, i.e. the bedtime
    /// falls on the evening before the wake-up day
    pub previous_day: bool,
    /// The predicted sleep need that produced this bedtime
    pub sleep_need: chrono::Duration,
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short time style, e.g. "10:42 PM"
        write!(f, "{}", self.time.format("%-I:%M %p"))
    }
}
