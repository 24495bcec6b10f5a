//! BarcodeObject trait definition and object errors.
//!
//! The BarcodeObject trait is the capability every encoder returned by the
//! plugin registry satisfies. Symbology-specific encoding lives in the
//! implementations; the registry and renderers only see this trait.

use thiserror::Error;

use crate::object::instruction::Instruction;

/// Errors raised while preparing a barcode for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    #[error("the value `{text}` is not valid for symbology `{symbology}`")]
    InvalidText { symbology: String, text: String },

    #[error("invalid barcode parameter: {message}")]
    InvalidParam { message: String },
}

/// BarcodeObject trait - interface for barcode encoders.
///
/// Implementations own their state (text, font, computed instructions);
/// each resolution hands the caller a fresh object.
pub trait BarcodeObject: Send {
    /// Symbology identifier this object encodes (e.g. `"code128"`).
    fn symbology(&self) -> &str;

    /// Current text.
    fn text(&self) -> &str;

    /// Replace the text to encode.
    fn set_text(&mut self, text: String);

    /// Font used for text instructions.
    fn font(&self) -> Option<&str>;

    /// Set the font used for text instructions.
    fn set_font(&mut self, font: Option<String>);

    /// Check whether `value` is legal input for this symbology.
    fn validate_text(&self, value: &str) -> bool;

    /// Rendered height in drawing units.
    ///
    /// With `recalculate` the height is recomputed from the current text and
    /// options instead of reusing a previously computed value.
    fn height(&self, recalculate: bool) -> u32;

    /// Rendered width in drawing units. See [`BarcodeObject::height`].
    fn width(&self, recalculate: bool) -> u32;

    /// Reset previous instructions and produce a fresh instruction list.
    ///
    /// Two calls without an intervening mutation return equal lists.
    fn draw(&mut self) -> Vec<Instruction>;

    /// Symbology-specific parameter checks run before drawing.
    fn check_specific_params(&self) -> Result<(), ObjectError> {
        Ok(())
    }

    /// Symbology-specific preparation run before drawing.
    fn prepare_barcode(&mut self) {}

    /// Width of the bars alone, without quiet zones or text.
    fn calculate_barcode_width(&self) -> u32 {
        0
    }

    /// Full drawing lifecycle: check params, validate text, prepare, draw.
    fn render(&mut self) -> Result<Vec<Instruction>, ObjectError> {
        self.check_specific_params()?;

        if !self.validate_text(self.text()) {
            return Err(ObjectError::InvalidText {
                symbology: self.symbology().to_string(),
                text: self.text().to_string(),
            });
        }

        self.prepare_barcode();
        Ok(self.draw())
    }
}
