//! State shared by barcode object implementations.

use crate::object::instruction::{Alignment, Instruction, Point, DEFAULT_COLOR};

/// Text, font and the instruction buffer of a barcode object.
///
/// Implementations embed this and forward the contract's state accessors to
/// it, so `draw()` only has to describe geometry.
#[derive(Debug, Clone, Default)]
pub struct ObjectState {
    /// Text to encode (or, for the error object, the diagnostic)
    pub text: String,

    /// Font used for text instructions
    pub font: Option<String>,

    /// Foreground color for emitted instructions
    pub color: u32,

    instructions: Vec<Instruction>,
}

impl ObjectState {
    /// Create a state holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        ObjectState {
            text: text.into(),
            font: None,
            color: DEFAULT_COLOR,
            instructions: Vec::new(),
        }
    }

    /// Drop previously computed instructions.
    pub fn reset_instructions(&mut self) {
        self.instructions.clear();
    }

    /// Instructions computed by the last draw.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Append a text instruction using the object's font and color.
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        size: u32,
        position: impl Into<Point>,
        alignment: Alignment,
        orientation: f32,
    ) {
        self.instructions.push(Instruction::Text {
            text: text.into(),
            size,
            position: position.into(),
            font: self.font.clone(),
            color: self.color,
            alignment,
            orientation,
        });
    }

    /// Append a polygon instruction using the object's color.
    pub fn add_polygon(&mut self, points: Vec<Point>, filled: bool) {
        self.instructions.push(Instruction::Polygon {
            points,
            color: self.color,
            filled,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_text_uses_font() {
        let mut state = ObjectState::new("12345");
        state.font = Some("DejaVuSans".to_string());
        state.add_text("12345", 10, (0, 0), Alignment::Center, 0.0);

        match &state.instructions()[0] {
            Instruction::Text { font, alignment, .. } => {
                assert_eq!(font.as_deref(), Some("DejaVuSans"));
                assert_eq!(*alignment, Alignment::Center);
            }
            other => panic!("unexpected instruction: {:?}", other),
        }
    }

    #[test]
    fn test_reset_instructions() {
        let mut state = ObjectState::new("x");
        state.add_polygon(vec![Point::new(0, 0), Point::new(1, 1)], true);
        assert_eq!(state.instructions().len(), 1);

        state.reset_instructions();
        assert!(state.instructions().is_empty());
    }
}
