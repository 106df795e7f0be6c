// Core value types (wake time, features, bedtime)
pub mod types;

// Regression coefficient table
pub mod model;

// Domain-specific error types
pub mod errors;
