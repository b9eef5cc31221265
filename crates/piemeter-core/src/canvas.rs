//! The rendering-collaborator contract and a recording implementation.

use crate::draw::{DrawCommand, TextStyle};
use crate::{Color, Point, Size};
use thiserror::Error;

/// Error raised by a drawing backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("canvas backend failure: {0}")]
pub struct CanvasError(String);

impl CanvasError {
    /// Create a backend error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Drawing surface consumed by the pie meter.
///
/// Backends rasterize however they like; the meter only needs these few
/// primitives. A surface can be lost or misconfigured at any call, so every
/// operation is fallible.
pub trait Canvas {
    /// Surface dimensions in pixels.
    fn size(&self) -> Size;

    /// Wipe the surface.
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<(), CanvasError>;

    /// Draw a circle outline.
    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    ) -> Result<(), CanvasError>;

    /// Draw a filled arc wedge (pie slice).
    fn fill_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Draw text at a position.
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        style: &TextStyle,
    ) -> Result<(), CanvasError>;
}

/// A `Canvas` implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to another renderer)
/// - Diffing (compare render outputs)
///
/// `clear` drops the recorded commands, so [`commands`](Self::commands)
/// always holds the most recent frame. [`clear_count`](Self::clear_count)
/// keeps track of how many frames were started.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas with the given surface size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Get the commands of the current frame.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of commands in the current frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if the current frame is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of times the surface was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        self.commands.clear();
        self.clears += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::CircleOutline {
            center,
            radius,
            color,
            width,
        });
        Ok(())
    }

    fn fill_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        style: &TextStyle,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: *style,
        });
        Ok(())
    }
}
