// Bedtime estimation core
pub mod estimator;

// Prediction model interface and linear regression implementation
pub mod predictor;
