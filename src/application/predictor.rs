use crate::domain::errors::EstimationError;
use crate::domain::model::{SleepModel, FEATURE_NAMES};
use crate::domain::types::SleepFeatures;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Interface for sleep-need prediction models
pub trait SleepPredictor: Send + Sync {
    /// Predict the required sleep in hours for the given features
    fn predict(&self, features: &SleepFeatures) -> Result<f64, EstimationError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// On-disk model artifact. The optional `features` list lets a training
/// run record the feature order it assumed, so a stale artifact is
/// rejected instead of silently misweighted.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    #[serde(default)]
    features: Option<Vec<String>>,
    #[serde(flatten)]
    model: SleepModel,
}

/// Linear regression over a fixed coefficient table.
pub struct LinearRegressionPredictor {
    model: SleepModel,
}

impl LinearRegressionPredictor {
    /// Predictor backed by the bundled pre-trained coefficients.
    pub fn bundled() -> Self {
        Self {
            model: SleepModel::default(),
        }
    }

    pub fn from_model(model: SleepModel) -> Self {
        Self { model }
    }

    /// Load coefficients from a JSON artifact. A missing file logs a
    /// warning and falls back to the bundled coefficients; a corrupt or
    /// invalid artifact is a hard error.
    pub fn from_artifact(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Model artifact not found at {:?}. Falling back to bundled coefficients.",
                path
            );
            return Ok(Self::bundled());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact: {}", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse model artifact: {}", path.display()))?;

        if let Some(features) = &artifact.features {
            if features != FEATURE_NAMES {
                anyhow::bail!(
                    "Model artifact feature order {:?} does not match expected {:?}",
                    features,
                    FEATURE_NAMES
                );
            }
        }

        artifact
            .model
            .validate()
            .with_context(|| format!("Invalid model artifact: {}", path.display()))?;

        info!("Loaded sleep model from {:?}", path);
        Ok(Self::from_model(artifact.model))
    }

    pub fn model(&self) -> &SleepModel {
        &self.model
    }
}

impl SleepPredictor for LinearRegressionPredictor {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, EstimationError> {
        self.model.validate()?;

        let predicted = self.model.predicted_sleep_hours(features);
        if !predicted.is_finite() {
            return Err(EstimationError::ModelFailure {
                reason: format!("non-finite prediction: {}", predicted),
            });
        }
        Ok(predicted)
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn version(&self) -> &str {
        "v1"
    }
}
