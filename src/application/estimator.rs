use crate::application::predictor::SleepPredictor;
use crate::domain::errors::EstimationError;
use crate::domain::model::SleepModel;
use crate::domain::types::{Bedtime, SleepFeatures};
use chrono::{Duration, NaiveTime};
use tracing::debug;

/// Estimate a bedtime for the given wake time, desired sleep amount and
/// coffee intake, using a fixed regression coefficient table.
///
/// Pure: no I/O, no mutation, constant time. Range restriction of the
/// sleep amount and coffee count is the caller's responsibility.
pub fn estimate(
    wake: NaiveTime,
    sleep_hours: f64,
    coffee_cups: u32,
    model: &SleepModel,
) -> Result<Bedtime, EstimationError> {
    model.validate()?;

    let features = SleepFeatures::new(wake, sleep_hours, coffee_cups);
    let predicted_hours = model.predicted_sleep_hours(&features);
    if !predicted_hours.is_finite() {
        return Err(EstimationError::ModelFailure {
            reason: format!("non-finite prediction: {}", predicted_hours),
        });
    }

    Ok(bedtime_from(wake, predicted_hours))
}

/// Estimator bound to a prediction model, for callers that hold the model
/// behind the [`SleepPredictor`] seam.
pub struct BedtimeEstimator<P: SleepPredictor> {
    predictor: P,
}

impl<P: SleepPredictor> BedtimeEstimator<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn estimate(
        &self,
        wake: NaiveTime,
        sleep_hours: f64,
        coffee_cups: u32,
    ) -> Result<Bedtime, EstimationError> {
        let features = SleepFeatures::new(wake, sleep_hours, coffee_cups);
        let predicted_hours = self.predictor.predict(&features)?;
        debug!(
            model = self.predictor.name(),
            version = self.predictor.version(),
            predicted_hours,
            "sleep need predicted"
        );
        Ok(bedtime_from(wake, predicted_hours))
    }
}

/// Subtract the predicted need from the wake time. An underflow past
/// 00:00 wraps to the previous day's time-of-day; only hour and minute
/// are ever displayed.
fn bedtime_from(wake: NaiveTime, predicted_hours: f64) -> Bedtime {
    // Duration::seconds panics outside +/- i64::MAX / 1000; i64::MAX / 1024
    // is inside that bound and exact in f64 (2^53 - 1)
    const MAX_SECONDS: f64 = (i64::MAX / 1024) as f64;
    let need_seconds = (predicted_hours * 3600.0).round().clamp(-MAX_SECONDS, MAX_SECONDS);
    let sleep_need = Duration::seconds(need_seconds as i64);
    // overflowing_sub_signed reports the seconds borrowed from earlier
    // days as a positive count when the subtraction wraps past midnight
    let (time, borrowed_secs) = wake.overflowing_sub_signed(sleep_need);
    Bedtime {
        time,
        previous_day: borrowed_secs > 0,
        sleep_need,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::predictor::LinearRegressionPredictor;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Sleep weight in hours, everything else zero: the prediction is
    /// exactly the requested amount.
    fn identity_model() -> SleepModel {
        SleepModel {
            intercept: 0.0,
            wake_seconds_weight: 0.0,
            sleep_hours_weight: 1.0,
            coffee_cups_weight: 0.0,
        }
    }

    #[test]
    fn eight_hours_before_seven_am_is_eleven_pm() {
        let bedtime = estimate(time(7, 0), 8.0, 1, &identity_model()).unwrap();
        assert_eq!(bedtime.time, time(23, 0));
        assert!(bedtime.previous_day);
        assert_eq!(bedtime.sleep_need, Duration::hours(8));
    }

    #[test]
    fn coffee_weight_shifts_bedtime_earlier() {
        let model = SleepModel {
            coffee_cups_weight: 0.1,
            ..identity_model()
        };
        // 8.0 + 3 * 0.1 = 8.3h of sleep -> 22:42
        let bedtime = estimate(time(7, 0), 8.0, 3, &model).unwrap();
        assert_eq!(bedtime.time, time(22, 42));
    }

    #[test]
    fn midnight_wake_wraps_to_previous_day() {
        let bedtime = estimate(time(0, 0), 1.5, 1, &identity_model()).unwrap();
        assert_eq!(bedtime.time, time(22, 30));
        assert!(bedtime.previous_day);
    }

    #[test]
    fn late_wake_with_short_need_stays_same_day() {
        let bedtime = estimate(time(23, 0), 4.0, 1, &identity_model()).unwrap();
        assert_eq!(bedtime.time, time(19, 0));
        assert!(!bedtime.previous_day);
    }

    #[test]
    fn estimate_is_deterministic() {
        let model = SleepModel::default();
        let first = estimate(time(6, 30), 7.25, 2, &model).unwrap();
        let second = estimate(time(6, 30), 7.25, 2, &model).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn more_desired_sleep_never_delays_bedtime() {
        let model = SleepModel::default();
        let mut previous_need = Duration::zero();
        let mut hours = 4.0;
        while hours <= 12.0 {
            let bedtime = estimate(time(7, 0), hours, 1, &model).unwrap();
            assert!(bedtime.sleep_need >= previous_need);
            previous_need = bedtime.sleep_need;
            hours += 0.25;
        }
    }

    #[test]
    fn huge_finite_prediction_clamps_instead_of_panicking() {
        let model = SleepModel {
            intercept: 1e300,
            ..identity_model()
        };
        let bedtime = estimate(time(7, 0), 8.0, 1, &model).unwrap();
        assert_eq!(bedtime.sleep_need, Duration::seconds(i64::MAX / 1024));
        assert!(bedtime.previous_day);
    }

    #[test]
    fn nan_intercept_is_model_failure() {
        let model = SleepModel {
            intercept: f64::NAN,
            ..SleepModel::default()
        };
        assert!(matches!(
            estimate(time(7, 0), 8.0, 1, &model),
            Err(EstimationError::ModelFailure { .. })
        ));
    }

    #[test]
    fn estimator_through_predictor_matches_free_function() {
        let model = SleepModel::default();
        let estimator = BedtimeEstimator::new(LinearRegressionPredictor::from_model(model));
        let via_trait = estimator.estimate(time(7, 0), 8.0, 1).unwrap();
        let direct = estimate(time(7, 0), 8.0, 1, &model).unwrap();
        assert_eq!(via_trait, direct);
    }
}
