//! Plugin values and the capability check the registry enforces.
//!
//! Constructors produce a `Box<dyn Plugin>`. Whether that value can be
//! handed out is decided by capability, not by concrete type: any plugin
//! that exposes itself as a [`BarcodeObject`] through
//! [`Plugin::into_object`] passes, wherever it was defined.

use crate::object::BarcodeObject;
use crate::plugin::errors::PluginError;

/// A value produced by a registered constructor.
///
/// External encoders implement this next to [`BarcodeObject`]:
///
/// ```ignore
/// impl Plugin for MyEncoder {
///     fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
///         Some(self)
///     }
/// }
/// ```
pub trait Plugin: Send + 'static {
    /// Name of the concrete type, used in diagnostics.
    fn plugin_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Expose the barcode object capability.
    ///
    /// The default exposes nothing, so a type that does not override this
    /// is rejected by the registry.
    fn into_object(self: Box<Self>) -> Option<Box<dyn BarcodeObject>> {
        None
    }
}

/// The capability a registry requires of everything it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Name reported in `InvalidPlugin` errors
    pub name: &'static str,
}

/// The barcode object capability.
pub const BARCODE_OBJECT: Capability = Capability {
    name: "BarcodeObject",
};

impl Capability {
    /// Check `plugin` against this capability.
    ///
    /// `manager` names the registry doing the check. A rejected plugin is
    /// dropped before the error is returned.
    pub fn check(
        &self,
        manager: &'static str,
        plugin: Box<dyn Plugin>,
    ) -> Result<Box<dyn BarcodeObject>, PluginError> {
        let actual = plugin.plugin_type();
        plugin.into_object().ok_or(PluginError::InvalidPlugin {
            manager,
            actual,
            required: self.name,
        })
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ErrorObject;
    use crate::test_support::{DigitsObject, NotAnObject};

    #[test]
    fn test_check_accepts_conforming_plugins() {
        let object = BARCODE_OBJECT
            .check("test", Box::new(ErrorObject::with_message("x")))
            .unwrap();
        assert_eq!(object.symbology(), "error");

        let object = BARCODE_OBJECT
            .check("test", Box::new(DigitsObject::new("42")))
            .unwrap();
        assert_eq!(object.text(), "42");
    }

    #[test]
    fn test_check_rejects_non_conforming_plugin() {
        let err = BARCODE_OBJECT
            .check("test", Box::new(NotAnObject::default()))
            .err()
            .unwrap();

        match err {
            PluginError::InvalidPlugin {
                manager,
                actual,
                required,
            } => {
                assert_eq!(manager, "test");
                assert!(actual.ends_with("NotAnObject"));
                assert_eq!(required, "BarcodeObject");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_plugin_type_names_concrete_type() {
        let plugin: Box<dyn Plugin> = Box::new(ErrorObject::new());
        assert!(plugin.plugin_type().ends_with("ErrorObject"));
    }
}
