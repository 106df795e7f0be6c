use crate::domain::errors::EstimationError;
use crate::domain::types::SleepFeatures;
use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly with the order used in the offline
/// training script. Any change here is a breaking change for model
/// artifacts.
pub const FEATURE_NAMES: &[&str] = &["wake_seconds", "sleep_hours", "coffee_cups"];

/// Linear regression coefficients predicting required sleep, in hours:
/// `intercept + w_wake * wake_seconds + w_sleep * sleep_hours + w_coffee * coffee_cups`.
///
/// The table is produced by an offline training run and never mutated
/// after load. `Default` carries the bundled pre-trained weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepModel {
    pub intercept: f64,
    pub wake_seconds_weight: f64,
    pub sleep_hours_weight: f64,
    pub coffee_cups_weight: f64,
}

impl Default for SleepModel {
    fn default() -> Self {
        // Bundled pre-trained coefficients. A later wake-up and more
        // coffee both push the predicted sleep need up slightly.
        Self {
            intercept: 0.727,
            wake_seconds_weight: 8.6e-6,
            sleep_hours_weight: 0.891,
            coffee_cups_weight: 0.075,
        }
    }
}

impl SleepModel {
    /// Rejects coefficient tables that cannot produce a finite prediction.
    pub fn validate(&self) -> Result<(), EstimationError> {
        let coefficients = [
            ("intercept", self.intercept),
            ("wake_seconds_weight", self.wake_seconds_weight),
            ("sleep_hours_weight", self.sleep_hours_weight),
            ("coffee_cups_weight", self.coffee_cups_weight),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(EstimationError::ModelFailure {
                    reason: format!("non-finite coefficient {}: {}", name, value),
                });
            }
        }
        Ok(())
    }

    /// Evaluate the regression. Pure arithmetic; the caller is
    /// responsible for checking the result is finite.
    pub fn predicted_sleep_hours(&self, features: &SleepFeatures) -> f64 {
        self.intercept
            + self.wake_seconds_weight * features.wake_seconds
            + self.sleep_hours_weight * features.sleep_hours
            + self.coffee_cups_weight * features.coffee_cups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_valid() {
        assert!(SleepModel::default().validate().is_ok());
    }

    #[test]
    fn nan_intercept_fails_validation() {
        let model = SleepModel {
            intercept: f64::NAN,
            ..SleepModel::default()
        };
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("intercept"));
    }

    #[test]
    fn infinite_weight_fails_validation() {
        let model = SleepModel {
            coffee_cups_weight: f64::INFINITY,
            ..SleepModel::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn prediction_is_weighted_sum() {
        let model = SleepModel {
            intercept: 0.5,
            wake_seconds_weight: 0.0,
            sleep_hours_weight: 1.0,
            coffee_cups_weight: 0.1,
        };
        let features = SleepFeatures {
            wake_seconds: 25200.0,
            sleep_hours: 8.0,
            coffee_cups: 3.0,
        };
        let predicted = model.predicted_sleep_hours(&features);
        assert!((predicted - 8.8).abs() < 1e-12);
    }

    #[test]
    fn model_roundtrips_through_json() {
        let model = SleepModel::default();
        let json = serde_json::to_string(&model).unwrap();
        let restored: SleepModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, restored);
    }
}
