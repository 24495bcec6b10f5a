//! Error object - renders a diagnostic in place of a barcode.
//!
//! Used by callers as a fallback when a symbology cannot be resolved or its
//! encoding fails, so the rendering pipeline always has something to draw.

use crate::object::base::ObjectState;
use crate::object::contract::BarcodeObject;
use crate::object::instruction::{Alignment, Instruction};
use crate::plugin::Plugin;

/// Forced height of the error drawing.
pub const ERROR_HEIGHT: u32 = 40;

/// Forced width of the error drawing.
pub const ERROR_WIDTH: u32 = 400;

/// Font size of both error lines.
pub const ERROR_FONT_SIZE: u32 = 10;

/// Label drawn above the diagnostic text.
pub const ERROR_LABEL: &str = "ERROR:";

/// Always-valid barcode object that draws `ERROR:` followed by its text.
#[derive(Debug, Clone, Default)]
pub struct ErrorObject {
    state: ObjectState,
}

impl ErrorObject {
    /// Create an error object with an empty diagnostic.
    pub fn new() -> Self {
        ErrorObject::default()
    }

    /// Create an error object carrying `message`.
    pub fn with_message(message: impl Into<String>) -> Self {
        ErrorObject {
            state: ObjectState::new(message),
        }
    }

    /// Instructions computed by the last draw.
    pub fn instructions(&self) -> &[Instruction] {
        self.state.instructions()
    }
}

impl BarcodeObject for ErrorObject {
    fn symbology(&self) -> &str {
        "error"
    }

    fn text(&self) -> &str {
        &self.state.text
    }

    fn set_text(&mut self, text: String) {
        self.state.text = text;
    }

    fn font(&self) -> Option<&str> {
        self.state.font.as_deref()
    }

    fn set_font(&mut self, font: Option<String>) {
        self.state.font = font;
    }

    /// All texts are accepted.
    fn validate_text(&self, _value: &str) -> bool {
        true
    }

    fn height(&self, _recalculate: bool) -> u32 {
        ERROR_HEIGHT
    }

    fn width(&self, _recalculate: bool) -> u32 {
        ERROR_WIDTH
    }

    fn draw(&mut self) -> Vec<Instruction> {
        self.state.reset_instructions();
        let message = self.state.text.clone();
        self.state
            .add_text(ERROR_LABEL, ERROR_FONT_SIZE, (5, 18), Alignment::Left, 0.0);
        self.state
            .add_text(message, ERROR_FONT_SIZE, (5, 32), Alignment::Left, 0.0);
        self.state.instructions().to_vec()
    }
}

impl Plugin for ErrorObject {
    fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
        Some(self)
    }
}
