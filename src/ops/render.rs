//! Implementation of `barcode draw` and the error-object fallback policy.
//!
//! The plugin manager never substitutes objects. Callers that would rather
//! draw a diagnostic than fail use the helpers here, which swap in an
//! [`ErrorObject`] carrying the failure message.

use anyhow::Result;
use serde::Serialize;

use crate::object::{BarcodeObject, ErrorObject, Instruction};
use crate::plugin::ObjectPluginManager;

/// Options for drawing a barcode.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Text to encode
    pub text: String,

    /// Font for text instructions
    pub font: Option<String>,

    /// Fail instead of falling back to the error object
    pub strict: bool,
}

/// A rendered barcode, ready for a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    /// Symbology that produced the instructions
    pub symbology: String,

    pub width: u32,
    pub height: u32,

    /// Whether the error object was substituted
    pub fallback: bool,

    pub instructions: Vec<Instruction>,
}

impl Drawing {
    fn capture(object: &dyn BarcodeObject, instructions: Vec<Instruction>, fallback: bool) -> Self {
        Drawing {
            symbology: object.symbology().to_string(),
            width: object.width(true),
            height: object.height(true),
            fallback,
            instructions,
        }
    }
}

/// Resolve `name` and set `text` on the result, or build an error object
/// describing why resolution failed.
pub fn resolve_or_error(
    manager: &ObjectPluginManager,
    name: &str,
    text: &str,
) -> Box<dyn BarcodeObject> {
    match manager.resolve(name) {
        Ok(mut object) => {
            object.set_text(text.to_string());
            object
        }
        Err(e) => Box::new(substitute(name, &e)),
    }
}

/// Render `object`, or an error object describing why it could not be
/// rendered. The error object keeps the original font.
pub fn render_or_error(mut object: Box<dyn BarcodeObject>) -> Drawing {
    match object.render() {
        Ok(instructions) => Drawing::capture(object.as_ref(), instructions, false),
        Err(e) => {
            let mut fallback = substitute(object.symbology(), &e);
            fallback.set_font(object.font().map(str::to_string));
            let instructions = fallback.draw();
            Drawing::capture(&fallback, instructions, true)
        }
    }
}

/// Resolve and render `name`.
///
/// Unless `opts.strict` is set, resolution and rendering failures produce an
/// error-object drawing instead of an error.
pub fn draw(manager: &ObjectPluginManager, name: &str, opts: &RenderOptions) -> Result<Drawing> {
    let resolved = manager.resolve(name);
    if opts.strict {
        let mut object = resolved?;
        configure(object.as_mut(), opts);
        let instructions = object.render()?;
        return Ok(Drawing::capture(object.as_ref(), instructions, false));
    }

    let (object, substituted) = match resolved {
        Ok(mut object) => {
            configure(object.as_mut(), opts);
            (object, false)
        }
        Err(e) => {
            let mut fallback = substitute(name, &e);
            if opts.font.is_some() {
                fallback.set_font(opts.font.clone());
            }
            let fallback: Box<dyn BarcodeObject> = Box::new(fallback);
            (fallback, true)
        }
    };

    let mut drawing = render_or_error(object);
    drawing.fallback |= substituted;
    Ok(drawing)
}

fn configure(object: &mut dyn BarcodeObject, opts: &RenderOptions) {
    object.set_text(opts.text.clone());
    if opts.font.is_some() {
        object.set_font(opts.font.clone());
    }
}

fn substitute(name: &str, error: &dyn std::fmt::Display) -> ErrorObject {
    tracing::warn!("Drawing error object instead of `{}`: {}", name.trim(), error);
    ErrorObject::with_message(error.to_string())
}
