//! A pie-shaped progress/budget indicator.
//!
//! A full circle stands for a base quantity. Every consumed amount becomes a
//! wedge of the pie, and the remaining part changes color as the remaining
//! capacity crosses the configurable warning and danger boundaries.
//!
//! The arithmetic lives in [`QuantityTracker`] (amounts → percentages → arc
//! angles) and [`ThresholdClassifier`] (remaining percent → state). The
//! [`PieMeter`] facade wires both to a [`Canvas`] drawing surface and
//! repaints once after every successful mutation.
//!
//! ```
//! use piemeter::{PieMeter, PieState, RecordingCanvas, Size};
//!
//! let canvas = RecordingCanvas::new(Size::new(200.0, 200.0));
//! let mut meter = PieMeter::new(canvas, 200.0)?;
//!
//! let result = meter.consume(70.0)?;
//! assert_eq!(result.percent, 35.0);
//! assert_eq!(result.remaining_percent, 65.0);
//! assert_eq!(meter.state(), PieState::Ok);
//!
//! meter.consume(100.0)?;
//! assert_eq!(meter.state(), PieState::Danger); // 15% left, default boundary is 20%
//! # Ok::<(), piemeter::MeterError>(())
//! ```

pub mod error;
pub mod meter;
pub mod style;
pub mod thresholds;
pub mod tracker;

pub use error::MeterError;
pub use meter::{PieInfo, PieMeter};
pub use style::StateColors;
pub use thresholds::{PieState, ThresholdClassifier};
pub use tracker::{InputResult, QuantityTracker, Slice};

pub use piemeter_core::{
    Canvas, CanvasError, Color, ColorParseError, DrawCommand, Point, RecordingCanvas, Size,
    TextStyle,
};
