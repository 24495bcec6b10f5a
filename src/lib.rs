//! Barcode plugins - a typed registry of barcode encoder objects
//!
//! This crate resolves symbology names ("code128", "ean13", ...) to freshly
//! constructed encoder objects, guaranteeing that whatever comes back
//! satisfies the barcode object contract, and provides the error object
//! callers fall back to when resolution or encoding fails.

pub mod object;
pub mod ops;
pub mod plugin;
pub mod util;

/// Test utilities and mock barcode objects for unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use object::{BarcodeObject, ErrorObject, Instruction, ObjectError};
pub use plugin::{ObjectPluginManager, Plugin, PluginError};
pub use util::config::Config;
