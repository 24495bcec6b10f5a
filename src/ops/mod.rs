//! High-level operations.
//!
//! This module contains the implementation of barcode commands.

pub mod render;

pub use render::{draw, render_or_error, resolve_or_error, Drawing, RenderOptions};
