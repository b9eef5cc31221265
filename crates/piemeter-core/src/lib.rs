//! Core types and the rendering contract for the piemeter pie indicator.
//!
//! This crate provides the pieces the meter builds on:
//! - Geometric primitives: [`Point`], [`Size`]
//! - Color representation: [`Color`] with hex parsing
//! - The drawing surface contract: [`Canvas`], with [`RecordingCanvas`] as a
//!   recording/testing backend emitting [`DrawCommand`]s

mod canvas;
mod color;
mod draw;
mod geometry;

pub use canvas::{Canvas, CanvasError, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, TextStyle};
pub use geometry::{Point, Size};
