//! Boundary thresholds partitioning remaining capacity into three states.

use crate::error::MeterError;
use serde::{Deserialize, Serialize};

/// Classification of the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PieState {
    /// Comfortably above the warning boundary.
    #[default]
    Ok,
    /// At or below the warning boundary.
    Warning,
    /// At or below the danger boundary.
    Danger,
}

/// Maps a remaining percentage to a [`PieState`] via two ordered boundaries.
///
/// Both boundaries live in (0, 100] and the danger boundary stays strictly
/// below the warning boundary; every mutation enforces the ordering against
/// the other boundary's current value. Classification is a pure function:
/// reconfiguring the boundaries only moves the partition points for future
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    warning_boundary: f64,
    danger_boundary: f64,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self {
            warning_boundary: Self::DEFAULT_WARNING,
            danger_boundary: Self::DEFAULT_DANGER,
        }
    }
}

impl ThresholdClassifier {
    /// Default warning boundary, in percent.
    pub const DEFAULT_WARNING: f64 = 50.0;
    /// Default danger boundary, in percent.
    pub const DEFAULT_DANGER: f64 = 20.0;

    /// Create a classifier with the default boundaries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The boundary below which (inclusive) the state is at least warning.
    #[must_use]
    pub fn warning_boundary(&self) -> f64 {
        self.warning_boundary
    }

    /// The boundary below which (inclusive) the state is danger.
    #[must_use]
    pub fn danger_boundary(&self) -> f64 {
        self.danger_boundary
    }

    /// Move the warning boundary.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the value is a finite number in (0, 100];
    /// `OrderingViolation` if it would not stay strictly above the current
    /// danger boundary. The boundary is unchanged on failure.
    pub fn set_warning_boundary(&mut self, value: f64) -> Result<(), MeterError> {
        Self::validate_boundary(value)?;
        if value <= self.danger_boundary {
            return Err(MeterError::OrderingViolation {
                warning: value,
                danger: self.danger_boundary,
            });
        }
        self.warning_boundary = value;
        Ok(())
    }

    /// Move the danger boundary.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the value is a finite number in (0, 100];
    /// `OrderingViolation` if it would not stay strictly below the current
    /// warning boundary. The boundary is unchanged on failure.
    pub fn set_danger_boundary(&mut self, value: f64) -> Result<(), MeterError> {
        Self::validate_boundary(value)?;
        if value >= self.warning_boundary {
            return Err(MeterError::OrderingViolation {
                warning: self.warning_boundary,
                danger: value,
            });
        }
        self.danger_boundary = value;
        Ok(())
    }

    /// Classify a remaining percentage.
    ///
    /// Boundaries are inclusive upper bounds for their state: a value exactly
    /// on the danger boundary is danger, exactly on the warning boundary is
    /// warning.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the value is a finite number in [0, 100].
    pub fn classify(&self, remaining_percent: f64) -> Result<PieState, MeterError> {
        if !remaining_percent.is_finite() || !(0.0..=100.0).contains(&remaining_percent) {
            return Err(MeterError::InvalidArgument(
                "remaining percent must be a finite number between 0 and 100",
            ));
        }
        Ok(if remaining_percent <= self.danger_boundary {
            PieState::Danger
        } else if remaining_percent <= self.warning_boundary {
            PieState::Warning
        } else {
            PieState::Ok
        })
    }

    fn validate_boundary(value: f64) -> Result<(), MeterError> {
        if !value.is_finite() || value <= 0.0 || value > 100.0 {
            return Err(MeterError::InvalidArgument(
                "boundary must be a finite number above 0 and at most 100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let classifier = ThresholdClassifier::new();
        assert_eq!(classifier.warning_boundary(), 50.0);
        assert_eq!(classifier.danger_boundary(), 20.0);
    }

    #[test]
    fn test_classification_at_boundary_edges() {
        let classifier = ThresholdClassifier::new();
        assert_eq!(classifier.classify(20.0).unwrap(), PieState::Danger);
        assert_eq!(classifier.classify(20.0001).unwrap(), PieState::Warning);
        assert_eq!(classifier.classify(50.0).unwrap(), PieState::Warning);
        assert_eq!(classifier.classify(50.0001).unwrap(), PieState::Ok);
    }

    #[test]
    fn test_classification_extremes() {
        let classifier = ThresholdClassifier::new();
        assert_eq!(classifier.classify(0.0).unwrap(), PieState::Danger);
        assert_eq!(classifier.classify(100.0).unwrap(), PieState::Ok);
    }

    #[test]
    fn test_classify_rejects_out_of_range() {
        let classifier = ThresholdClassifier::new();
        for bad in [-0.0001, 100.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                classifier.classify(bad),
                Err(MeterError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_boundary_range_validation() {
        let mut classifier = ThresholdClassifier::new();
        for bad in [0.0, -3.0, 100.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                classifier.set_warning_boundary(bad),
                Err(MeterError::InvalidArgument(_))
            ));
            assert!(matches!(
                classifier.set_danger_boundary(bad),
                Err(MeterError::InvalidArgument(_))
            ));
        }
        assert_eq!(classifier, ThresholdClassifier::new());
    }

    #[test]
    fn test_warning_must_stay_above_danger() {
        let mut classifier = ThresholdClassifier::new();
        let err = classifier.set_warning_boundary(20.0).unwrap_err();
        assert_eq!(
            err,
            MeterError::OrderingViolation {
                warning: 20.0,
                danger: 20.0
            }
        );
        assert_eq!(classifier.warning_boundary(), 50.0);
    }

    #[test]
    fn test_danger_must_stay_below_warning() {
        let mut classifier = ThresholdClassifier::new();
        let err = classifier.set_danger_boundary(50.0).unwrap_err();
        assert_eq!(
            err,
            MeterError::OrderingViolation {
                warning: 50.0,
                danger: 50.0
            }
        );
        assert_eq!(classifier.danger_boundary(), 20.0);
    }

    #[test]
    fn test_reconfiguration_moves_the_partition() {
        let mut classifier = ThresholdClassifier::new();
        classifier.set_warning_boundary(80.0).unwrap();
        classifier.set_danger_boundary(60.0).unwrap();

        assert_eq!(classifier.classify(70.0).unwrap(), PieState::Warning);
        assert_eq!(classifier.classify(60.0).unwrap(), PieState::Danger);
        assert_eq!(classifier.classify(85.0).unwrap(), PieState::Ok);
    }

    #[test]
    fn test_boundary_at_100_is_allowed() {
        let mut classifier = ThresholdClassifier::new();
        classifier.set_warning_boundary(100.0).unwrap();
        assert_eq!(classifier.classify(100.0).unwrap(), PieState::Warning);
    }

    proptest! {
        #[test]
        fn prop_boundary_pair_stays_ordered(
            updates in prop::collection::vec((prop::bool::ANY, -10.0f64..120.0), 1..32)
        ) {
            let mut classifier = ThresholdClassifier::new();

            for (set_warning, value) in updates {
                let before = classifier;
                let result = if set_warning {
                    classifier.set_warning_boundary(value)
                } else {
                    classifier.set_danger_boundary(value)
                };

                prop_assert!(classifier.danger_boundary() < classifier.warning_boundary());
                if result.is_err() {
                    prop_assert_eq!(before, classifier);
                }
            }
        }

        #[test]
        fn prop_classification_is_total_and_ordered(percent in 0.0f64..=100.0) {
            let classifier = ThresholdClassifier::new();
            let state = classifier.classify(percent).unwrap();
            match state {
                PieState::Danger => prop_assert!(percent <= 20.0),
                PieState::Warning => prop_assert!(percent > 20.0 && percent <= 50.0),
                PieState::Ok => prop_assert!(percent > 50.0),
            }
        }
    }
}
