//! Input-to-geometry conversion: consumed amounts become cumulative
//! percentages and arc angles.

use crate::error::MeterError;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One recorded consumption event: its angular interval and share of the
/// base value. Created once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    /// Where the slice begins, in radians
    pub start_angle: f64,
    /// Where the slice ends, in radians
    pub end_angle: f64,
    /// The consumed amount as a percentage of the base value
    pub percent: f64,
}

/// Everything a single accepted input produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputResult {
    /// Start angle of the new slice, in radians
    pub start_angle: f64,
    /// End angle of the new slice, in radians
    pub end_angle: f64,
    /// The input as a percentage of the base value
    pub percent: f64,
    /// Remaining capacity after the input, in percent
    pub remaining_percent: f64,
    /// Remaining capacity after the input, in absolute units
    pub remaining_value: f64,
}

/// Converts a sequence of consumed amounts into cumulative percentages and
/// slice angles.
///
/// The base value represents 100% and one full turn (2π). The angular cursor
/// advances monotonically with each accepted input and never passes 2π; the
/// consumed total never passes the base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityTracker {
    base_value: f64,
    total_consumed: f64,
    cursor_angle: f64,
    slices: Vec<Slice>,
}

impl QuantityTracker {
    /// Create a tracker for a base value.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the base value is a finite number greater
    /// than zero.
    pub fn new(base_value: f64) -> Result<Self, MeterError> {
        if !base_value.is_finite() || base_value <= 0.0 {
            return Err(MeterError::InvalidArgument(
                "base value must be a finite number greater than zero",
            ));
        }
        Ok(Self {
            base_value,
            total_consumed: 0.0,
            cursor_angle: 0.0,
            slices: Vec::new(),
        })
    }

    /// Accept one consumed amount and convert it into a slice.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the amount is not finite or not strictly
    /// positive; `CapacityExceeded` if accepting it would push the consumed
    /// total past the base value (consuming exactly the remainder is
    /// allowed). Nothing is mutated on any failure path.
    pub fn add_input(&mut self, amount: f64) -> Result<InputResult, MeterError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(MeterError::InvalidArgument(
                "input value must be a finite number greater than zero",
            ));
        }
        let total = self.total_consumed + amount;
        if total > self.base_value {
            return Err(MeterError::CapacityExceeded {
                attempted: total,
                base_value: self.base_value,
            });
        }

        let percent = amount / self.base_value * 100.0;
        let arc_span = percent / 100.0 * TAU;
        let start_angle = self.cursor_angle;
        // Exact exhaustion must land on 2π itself, never 2π − ε; the min()
        // alone only catches rounding overshoot.
        let end_angle = if total == self.base_value {
            TAU
        } else {
            (start_angle + arc_span).min(TAU)
        };

        self.total_consumed = total;
        self.cursor_angle = end_angle;
        self.slices.push(Slice {
            start_angle,
            end_angle,
            percent,
        });

        Ok(InputResult {
            start_angle,
            end_angle,
            percent,
            remaining_percent: self.remaining_percent(),
            remaining_value: self.remaining_value(),
        })
    }

    /// The base value representing 100%.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Running sum of all accepted inputs.
    #[must_use]
    pub fn total_consumed(&self) -> f64 {
        self.total_consumed
    }

    /// The angle at which the next slice will begin, in radians.
    #[must_use]
    pub fn cursor_angle(&self) -> f64 {
        self.cursor_angle
    }

    /// Remaining capacity in percent, clamped to [0, 100].
    #[must_use]
    pub fn remaining_percent(&self) -> f64 {
        (100.0 - self.total_consumed / self.base_value * 100.0).max(0.0)
    }

    /// Remaining capacity in absolute units, clamped to zero.
    #[must_use]
    pub fn remaining_value(&self) -> f64 {
        (self.base_value - self.total_consumed).max(0.0)
    }

    /// All accepted slices, in insertion order.
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Check whether the base value is fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.total_consumed >= self.base_value
    }
}
