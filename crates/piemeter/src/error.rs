//! Error types for the pie meter.

use piemeter_core::ColorParseError;
use thiserror::Error;

/// Errors surfaced by the tracker, the classifier and the meter facade.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MeterError {
    /// A single parameter failed type/range validation. Detected before any
    /// state mutation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Cumulative consumption would exceed the base value. Consuming exactly
    /// the remaining capacity is allowed.
    #[error("total consumed {attempted} would exceed base value {base_value}")]
    CapacityExceeded {
        /// Total the rejected input would have produced.
        attempted: f64,
        /// The immutable base value.
        base_value: f64,
    },

    /// A boundary update would leave danger >= warning.
    #[error("danger boundary {danger} must stay strictly below warning boundary {warning}")]
    OrderingViolation {
        /// Warning boundary the pair would have had.
        warning: f64,
        /// Danger boundary the pair would have had.
        danger: f64,
    },

    /// A color string failed hex validation.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}
