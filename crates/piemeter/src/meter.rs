//! The pie meter facade: one tracker, one classifier, one color table and
//! one owned drawing surface.

use crate::error::MeterError;
use crate::style::StateColors;
use crate::thresholds::{PieState, ThresholdClassifier};
use crate::tracker::{InputResult, QuantityTracker, Slice};
use piemeter_core::{Canvas, CanvasError, Color, Point};
use serde::{Deserialize, Serialize};

/// Margin between the pie and the surface edge, in pixels.
const PIE_MARGIN: f32 = 15.0;
/// Width of the outline drawn around the full circle.
const OUTLINE_WIDTH: f32 = 3.0;
/// Top-left position of the remaining-percent label.
const LABEL_POSITION: Point = Point::new(10.0, 10.0);

/// Snapshot of the meter's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieInfo {
    /// The base value representing 100%
    pub base_value: f64,
    /// Running sum of all accepted inputs
    pub total_consumed: f64,
    /// Remaining capacity in percent
    pub remaining_percent: f64,
    /// Remaining capacity in absolute units
    pub remaining_value: f64,
    /// Current classification of the remaining capacity
    pub state: PieState,
    /// Color the remaining pie is currently drawn in
    pub current_color: Color,
    /// Warning boundary in percent
    pub warning_boundary: f64,
    /// Danger boundary in percent
    pub danger_boundary: f64,
    /// Configured state colors and slice/label styling
    pub colors: StateColors,
    /// Whether the remaining-percent label is drawn
    pub show_label: bool,
    /// All accepted slices, in insertion order
    pub slices: Vec<Slice>,
}

/// A pie-shaped progress/budget indicator.
///
/// A full circle represents the base value; every consumed amount covers a
/// wedge of it, and the remaining pie changes color as the remaining
/// capacity crosses the warning and danger boundaries.
///
/// The meter owns its drawing surface and repaints once after every
/// successful mutation. Mutation failures repaint nothing, so the previous
/// frame is never overwritten with partial state.
#[derive(Debug)]
pub struct PieMeter<C: Canvas> {
    canvas: C,
    tracker: QuantityTracker,
    classifier: ThresholdClassifier,
    colors: StateColors,
    slice_colors: Vec<Option<Color>>,
    show_label: bool,
}

impl<C: Canvas> PieMeter<C> {
    /// Create a meter on a drawing surface and render the initial full pie.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the base value is a finite number greater
    /// than zero.
    pub fn new(canvas: C, base_value: f64) -> Result<Self, MeterError> {
        let mut meter = Self {
            canvas,
            tracker: QuantityTracker::new(base_value)?,
            classifier: ThresholdClassifier::new(),
            colors: StateColors::default(),
            slice_colors: Vec::new(),
            show_label: false,
        };
        meter.redraw();
        Ok(meter)
    }

    /// Consume an amount: record a slice for it and repaint.
    ///
    /// The slice is drawn in the default slice color, also when that default
    /// changes later.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidArgument` and `CapacityExceeded` from the tracker;
    /// nothing changes and nothing is repainted on failure.
    pub fn consume(&mut self, amount: f64) -> Result<InputResult, MeterError> {
        let result = self.tracker.add_input(amount)?;
        self.slice_colors.push(None);
        self.redraw();
        Ok(result)
    }

    /// Consume an amount with a fixed color for its slice.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex color before anything is consumed, and
    /// propagates tracker errors like [`consume`](Self::consume).
    pub fn consume_with_color(
        &mut self,
        amount: f64,
        hex_color: &str,
    ) -> Result<InputResult, MeterError> {
        let color = Color::from_hex(hex_color)?;
        let result = self.tracker.add_input(amount)?;
        self.slice_colors.push(Some(color));
        self.redraw();
        Ok(result)
    }

    /// Reconfigure both boundaries at once.
    ///
    /// The pair is applied to a scratch classifier first, so a failing pair
    /// leaves both boundaries exactly as they were.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` or `OrderingViolation` from the classifier.
    pub fn set_boundaries(&mut self, warning: f64, danger: f64) -> Result<(), MeterError> {
        let mut next = self.classifier;
        // Any valid pair is reachable in one of the two orders; pick the one
        // that does not trip over the current values.
        if danger < next.warning_boundary() {
            next.set_danger_boundary(danger)?;
            next.set_warning_boundary(warning)?;
        } else {
            next.set_warning_boundary(warning)?;
            next.set_danger_boundary(danger)?;
        }
        self.classifier = next;
        self.redraw();
        Ok(())
    }

    /// Set the color of the remaining pie in the ok state.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex color; the configured color is unchanged.
    pub fn set_pie_color(&mut self, hex_color: &str) -> Result<(), MeterError> {
        self.colors.ok = Color::from_hex(hex_color)?;
        self.redraw();
        Ok(())
    }

    /// Set the colors of the remaining pie for the warning and danger states.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex color; both strings are validated before
    /// either color is assigned.
    pub fn set_state_colors(
        &mut self,
        warning_hex: &str,
        danger_hex: &str,
    ) -> Result<(), MeterError> {
        let warning = Color::from_hex(warning_hex)?;
        let danger = Color::from_hex(danger_hex)?;
        self.colors.warning = warning;
        self.colors.danger = danger;
        self.redraw();
        Ok(())
    }

    /// Set the default fill color for consumed slices.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex color; the configured color is unchanged.
    pub fn set_slice_color(&mut self, hex_color: &str) -> Result<(), MeterError> {
        self.colors.slice = Color::from_hex(hex_color)?;
        self.redraw();
        Ok(())
    }

    /// Set the color of the remaining-percent label.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex color; the configured color is unchanged.
    pub fn set_label_color(&mut self, hex_color: &str) -> Result<(), MeterError> {
        self.colors.label.color = Color::from_hex(hex_color)?;
        self.redraw();
        Ok(())
    }

    /// Set the size of the remaining-percent label, in pixels.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless the size is a finite number greater than
    /// zero.
    pub fn set_label_size(&mut self, size_px: f32) -> Result<(), MeterError> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MeterError::InvalidArgument(
                "label size must be a finite number greater than zero",
            ));
        }
        self.colors.label.size = size_px;
        self.redraw();
        Ok(())
    }

    /// Toggle the remaining-percent label and repaint.
    pub fn show_percent_label(&mut self, show: bool) {
        self.show_label = show;
        self.redraw();
    }

    /// Current classification of the remaining capacity.
    #[must_use]
    pub fn state(&self) -> PieState {
        // The tracker clamps remaining percent to [0, 100], so
        // classification cannot fail here; fall closed to danger regardless.
        self.classifier
            .classify(self.tracker.remaining_percent())
            .unwrap_or(PieState::Danger)
    }

    /// Remaining capacity in percent.
    #[must_use]
    pub fn remaining_percent(&self) -> f64 {
        self.tracker.remaining_percent()
    }

    /// Remaining capacity in absolute units.
    #[must_use]
    pub fn remaining_value(&self) -> f64 {
        self.tracker.remaining_value()
    }

    /// Snapshot of the meter's observable state.
    #[must_use]
    pub fn info(&self) -> PieInfo {
        let state = self.state();
        PieInfo {
            base_value: self.tracker.base_value(),
            total_consumed: self.tracker.total_consumed(),
            remaining_percent: self.tracker.remaining_percent(),
            remaining_value: self.tracker.remaining_value(),
            state,
            current_color: self.colors.color_for(state),
            warning_boundary: self.classifier.warning_boundary(),
            danger_boundary: self.classifier.danger_boundary(),
            colors: self.colors,
            show_label: self.show_label,
            slices: self.tracker.slices().to_vec(),
        }
    }

    /// Borrow the drawing surface.
    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give the drawing surface back, discarding the meter.
    #[must_use]
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Repaint the whole pie. Drawing failures keep tracker, classifier and
    /// color state intact; the incident is logged and the previous frame
    /// stays on whatever backends keep one.
    fn redraw(&mut self) {
        if let Err(err) = self.paint() {
            tracing::warn!(error = %err, "pie repaint failed, state remains consistent");
        }
    }

    fn paint(&mut self) -> Result<(), CanvasError> {
        let size = self.canvas.size();
        let center = size.center();
        let radius = size.min_dimension() / 2.0 - PIE_MARGIN;
        let pie_color = self.colors.color_for(self.state());

        self.canvas.clear()?;
        self.canvas.fill_circle(center, radius, pie_color)?;
        self.canvas
            .stroke_circle(center, radius, Color::rgb8(0x05, 0x05, 0x05), OUTLINE_WIDTH)?;

        for (slice, assigned) in self.tracker.slices().iter().zip(&self.slice_colors) {
            let fill = assigned.unwrap_or(self.colors.slice);
            self.canvas.fill_arc(
                center,
                radius,
                slice.start_angle as f32,
                slice.end_angle as f32,
                fill,
            )?;
        }

        if self.show_label {
            let text = format!("{}%", self.tracker.remaining_percent());
            self.canvas
                .draw_text(&text, LABEL_POSITION, &self.colors.label)?;
        }

        Ok(())
    }
}
