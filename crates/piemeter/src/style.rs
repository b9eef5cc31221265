//! Visual configuration: the state-to-color table and slice/label styling.

use crate::thresholds::PieState;
use piemeter_core::{Color, TextStyle};
use serde::{Deserialize, Serialize};

/// Colors and label styling for the pie, keyed by classification state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateColors {
    /// Fill of the remaining pie while the state is ok
    pub ok: Color,
    /// Fill of the remaining pie in the warning state
    pub warning: Color,
    /// Fill of the remaining pie in the danger state
    pub danger: Color,
    /// Default fill for consumed slices
    pub slice: Color,
    /// Style of the remaining-percent label
    pub label: TextStyle,
}

impl Default for StateColors {
    fn default() -> Self {
        Self {
            ok: Color::rgb8(0x66, 0xd6, 0x75),      // #66d675
            warning: Color::rgb8(0xff, 0xff, 0x00), // #ffff00
            danger: Color::rgb8(0xff, 0x00, 0x00),  // #ff0000
            slice: Color::WHITE,
            label: TextStyle {
                size: 35.0,
                color: Color::rgb8(0x8a, 0xb8, 0x64), // #8ab864
            },
        }
    }
}

impl StateColors {
    /// Resolve a classification state to its configured color.
    #[must_use]
    pub fn color_for(&self, state: PieState) -> Color {
        match state {
            PieState::Ok => self.ok,
            PieState::Warning => self.warning,
            PieState::Danger => self.danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_hex() {
        let colors = StateColors::default();
        assert_eq!(colors.ok, Color::from_hex("#66d675").unwrap());
        assert_eq!(colors.warning, Color::from_hex("#ffff00").unwrap());
        assert_eq!(colors.danger, Color::from_hex("#ff0000").unwrap());
        assert_eq!(colors.slice, Color::from_hex("#ffffff").unwrap());
        assert_eq!(colors.label.color, Color::from_hex("#8ab864").unwrap());
        assert_eq!(colors.label.size, 35.0);
    }

    #[test]
    fn test_color_for_each_state() {
        let colors = StateColors::default();
        assert_eq!(colors.color_for(PieState::Ok), colors.ok);
        assert_eq!(colors.color_for(PieState::Warning), colors.warning);
        assert_eq!(colors.color_for(PieState::Danger), colors.danger);
    }
}
