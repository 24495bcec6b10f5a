//! Test utilities and mock barcode objects.
//!
//! These stand in for real symbology encoders, which live outside this
//! crate. They exercise the parts of the contract the registry and the
//! fallback policy care about: text validation, lifecycle hooks, drawing.

pub mod fixtures;

use crate::object::{
    Alignment, BarcodeObject, Instruction, ObjectError, ObjectState, Point,
};
use crate::plugin::Plugin;

pub use fixtures::*;

/// Width of one digit module in drawing units.
const DIGIT_WIDTH: u32 = 7;

/// Accepts ASCII digits only and draws one bar per digit.
#[derive(Debug, Clone, Default)]
pub struct DigitsObject {
    state: ObjectState,
    /// Set by `prepare_barcode`
    pub prepared: bool,
}

impl DigitsObject {
    pub fn new(text: &str) -> Self {
        DigitsObject {
            state: ObjectState::new(text),
            prepared: false,
        }
    }
}

impl BarcodeObject for DigitsObject {
    fn symbology(&self) -> &str {
        "digits"
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

    fn validate_text(&self, value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }

    fn height(&self, _recalculate: bool) -> u32 {
        50
    }

    fn width(&self, _recalculate: bool) -> u32 {
        self.calculate_barcode_width()
    }

    fn draw(&mut self) -> Vec<Instruction> {
        self.state.reset_instructions();
        for i in 0..self.state.text.len() as i32 {
            let x = i * DIGIT_WIDTH as i32;
            self.state.add_polygon(
                vec![
                    Point::new(x, 0),
                    Point::new(x + 3, 0),
                    Point::new(x + 3, 40),
                    Point::new(x, 40),
                ],
                true,
            );
        }
        let text = self.state.text.clone();
        let center = (self.calculate_barcode_width() / 2) as i32;
        self.state
            .add_text(text, 10, (center, 48), Alignment::Center, 0.0);
        self.state.instructions().to_vec()
    }

    fn prepare_barcode(&mut self) {
        self.prepared = true;
    }

    fn calculate_barcode_width(&self) -> u32 {
        self.state.text.len() as u32 * DIGIT_WIDTH
    }
}

impl Plugin for DigitsObject {
    fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
        Some(self)
    }
}

/// Same rules as [`DigitsObject`], twice as wide.
#[derive(Debug, Clone, Default)]
pub struct WideDigitsObject {
    inner: DigitsObject,
}

impl BarcodeObject for WideDigitsObject {
    fn symbology(&self) -> &str {
        "wide-digits"
    }

    fn text(&self) -> &str {
        self.inner.text()
    }

    fn set_text(&mut self, text: String) {
        self.inner.set_text(text);
    }

    fn font(&self) -> Option<&str> {
        self.inner.font()
    }

    fn set_font(&mut self, font: Option<String>) {
        self.inner.set_font(font);
    }

    fn validate_text(&self, value: &str) -> bool {
        self.inner.validate_text(value)
    }

    fn height(&self, recalculate: bool) -> u32 {
        self.inner.height(recalculate)
    }

    fn width(&self, recalculate: bool) -> u32 {
        self.inner.width(recalculate) * 2
    }

    fn draw(&mut self) -> Vec<Instruction> {
        self.inner.draw()
    }
}

impl Plugin for WideDigitsObject {
    fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
        Some(self)
    }
}

/// Fails its parameter check until `bar_height` is set.
#[derive(Debug, Clone, Default)]
pub struct ParamCheckedObject {
    state: ObjectState,
    pub bar_height: u32,
}

impl BarcodeObject for ParamCheckedObject {
    fn symbology(&self) -> &str {
        "param-checked"
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

    fn validate_text(&self, _value: &str) -> bool {
        true
    }

    fn height(&self, _recalculate: bool) -> u32 {
        self.bar_height
    }

    fn width(&self, _recalculate: bool) -> u32 {
        10
    }

    fn draw(&mut self) -> Vec<Instruction> {
        self.state.reset_instructions();
        self.state.instructions().to_vec()
    }

    fn check_specific_params(&self) -> Result<(), ObjectError> {
        if self.bar_height == 0 {
            return Err(ObjectError::InvalidParam {
                message: "bar height must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Stand-in encoder for a named symbology; accepts any non-empty text.
#[derive(Debug, Clone)]
pub struct FixtureObject {
    symbology: &'static str,
    state: ObjectState,
}

impl FixtureObject {
    pub fn named(symbology: &'static str) -> Self {
        FixtureObject {
            symbology,
            state: ObjectState::default(),
        }
    }
}

impl BarcodeObject for FixtureObject {
    fn symbology(&self) -> &str {
        self.symbology
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

    fn validate_text(&self, value: &str) -> bool {
        !value.is_empty()
    }

    fn height(&self, _recalculate: bool) -> u32 {
        50
    }

    fn width(&self, _recalculate: bool) -> u32 {
        100
    }

    fn draw(&mut self) -> Vec<Instruction> {
        self.state.reset_instructions();
        let text = self.state.text.clone();
        self.state.add_text(text, 10, (50, 48), Alignment::Center, 0.0);
        self.state.instructions().to_vec()
    }
}

impl Plugin for FixtureObject {
    fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
        Some(self)
    }
}

/// A plugin that does not expose the barcode object capability.
#[derive(Debug, Clone, Default)]
pub struct NotAnObject {
    pub payload: Vec<u8>,
}

impl Plugin for NotAnObject {}
