//! Error taxonomy for the estimator.
//!
//! Two failure kinds exist: bad input (out-of-range numbers, unknown
//! labels) and the undefined per-hectare rate on a zero-area farm.
//! Everything else in the crate is a total function.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A profile field is out of range, non-finite, or carries an
    /// unrecognized label.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The per-hectare rate was requested for a zero-area farm.
    #[error("emissions per hectare are undefined when the cultivated area is zero")]
    UndefinedRate,
}

impl EstimateError {
    pub(crate) fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        EstimateError::InvalidInput {
            field,
            reason: format!("{} is outside the accepted range [{}, {}]", value, min, max),
        }
    }

    pub(crate) fn not_finite(field: &'static str) -> Self {
        EstimateError::InvalidInput {
            field,
            reason: "must be a finite number".to_string(),
        }
    }

    pub(crate) fn unknown_label(field: &'static str, label: &str) -> Self {
        EstimateError::InvalidInput {
            field,
            reason: format!("unrecognized label '{}'", label),
        }
    }
}
