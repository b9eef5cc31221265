//! Draw commands recorded by [`RecordingCanvas`](crate::RecordingCanvas).

use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Text style for label rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
        }
    }
}

/// A single draw operation.
///
/// Recording these instead of rasterizing directly makes render output
/// testable and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Wipe the surface.
    Clear,
    /// Filled circle.
    Circle {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Circle outline.
    CircleOutline {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Filled arc wedge (pie slice).
    Arc {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Start angle in radians
        start_angle: f32,
        /// End angle in radians
        end_angle: f32,
        /// Fill color
        color: Color,
    },
    /// Text run.
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Style applied to the run
        style: TextStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::Arc {
            center: Point::new(100.0, 100.0),
            radius: 85.0,
            start_angle: 0.0,
            end_angle: 1.5,
            color: Color::WHITE,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
