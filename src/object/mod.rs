//! Barcode objects.
//!
//! - **BarcodeObject** - the contract every encoder satisfies (in `contract.rs`)
//! - **Instruction** - backend-neutral drawing output (in `instruction.rs`)
//! - **ObjectState** - text/font/instruction buffer shared by encoders (in `base.rs`)
//! - **ErrorObject** - the always-valid fallback encoder (in `error_object.rs`)

pub mod base;
pub mod contract;
pub mod error_object;
pub mod instruction;

pub use base::ObjectState;
pub use contract::{BarcodeObject, ObjectError};
pub use error_object::{ErrorObject, ERROR_FONT_SIZE, ERROR_HEIGHT, ERROR_LABEL, ERROR_WIDTH};
pub use instruction::{Alignment, Instruction, Point, DEFAULT_COLOR};
