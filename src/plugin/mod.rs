//! Barcode object plugin system.
//!
//! Callers ask for a symbology by name and get back an object that is
//! guaranteed to satisfy the barcode object capability, or a typed error.
//!
//! # Architecture
//!
//! ```text
//!   resolve("EAN13")
//!         │
//!         ▼
//!  ┌───────────────┐   alias / legacy    ┌───────────────┐
//!  │   normalize   │ ──────────────────▶ │ canonical name│
//!  └───────────────┘    (one hop)        └───────┬───────┘
//!                                                ▼
//!                                        ┌───────────────┐
//!                                        │  constructor  │ ─▶ Box<dyn Plugin>
//!                                        └───────┬───────┘
//!                                                ▼
//!                                        ┌───────────────┐
//!                                        │  capability   │ ─▶ Box<dyn BarcodeObject>
//!                                        │    check      │    or InvalidPlugin
//!                                        └───────────────┘
//! ```
//!
//! - **Plugin / Capability** - what constructors produce and how it is checked (in `capability.rs`)
//! - **ObjectPluginManager** - the registry (in `manager.rs`)
//! - **Identifier tables** - well-known and legacy names (in `defaults.rs`)
//! - **PluginError** - `UnknownPlugin` / `InvalidPlugin` (in `errors.rs`)
//!
//! # Usage
//!
//! ```ignore
//! use barcode::plugin::ObjectPluginManager;
//!
//! let mut manager = ObjectPluginManager::new();
//! manager.register_type::<MyCode128>("code128", &["code-128"]);
//!
//! let mut object = manager.resolve("Code-128")?;
//! object.set_text("ABC-123".to_string());
//! let instructions = object.render()?;
//! ```

use std::sync::OnceLock;

pub mod capability;
pub mod defaults;
pub mod errors;
pub mod manager;

pub use capability::{Capability, Plugin, BARCODE_OBJECT};
pub use defaults::{legacy_identifier, LEGACY_PREFIX, SYMBOLOGIES, VENDOR_LEGACY_PREFIX};
pub use errors::PluginError;
pub use manager::{AliasInfo, AliasKind, Constructor, ObjectPluginManager, MANAGER_NAME};

static GLOBAL: OnceLock<ObjectPluginManager> = OnceLock::new();

/// The process-wide manager.
///
/// Initialized with [`ObjectPluginManager::new`] on first use unless
/// [`install_global`] ran earlier. Read-only afterwards.
pub fn global() -> &'static ObjectPluginManager {
    GLOBAL.get_or_init(ObjectPluginManager::new)
}

/// Install the process-wide manager.
///
/// This is the only way to mutate global registration state and must run
/// during startup, before the first [`global`] call. Returns the manager
/// back if one is already installed.
pub fn install_global(manager: ObjectPluginManager) -> Result<(), ObjectPluginManager> {
    GLOBAL.set(manager)
}
