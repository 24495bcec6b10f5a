//! Registry error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised at the registry boundary.
///
/// Neither kind is transient: an unknown name is a caller or configuration
/// error, an invalid plugin is a misconfigured registration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PluginError {
    #[error("unknown barcode plugin `{name}`")]
    #[diagnostic(code(barcode::plugin::unknown))]
    UnknownPlugin {
        name: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("{manager} can only create instances of {required}; {actual} is invalid")]
    #[diagnostic(
        code(barcode::plugin::invalid),
        help("Implement `Plugin::into_object` for the registered type so it exposes the barcode object capability")
    )]
    InvalidPlugin {
        manager: &'static str,
        actual: &'static str,
        required: &'static str,
    },
}

impl PluginError {
    /// Unknown-plugin error without a suggestion.
    pub fn unknown(name: impl Into<String>) -> Self {
        PluginError::UnknownPlugin {
            name: name.into(),
            suggestion: None,
        }
    }

    /// Unknown-plugin error pointing at the closest known name.
    pub fn unknown_with_suggestion(name: impl Into<String>, closest: Option<&str>) -> Self {
        PluginError::UnknownPlugin {
            name: name.into(),
            suggestion: closest.map(|c| format!("did you mean `{}`?", c)),
        }
    }

    /// Check if this is an unknown-plugin error.
    pub fn is_unknown(&self) -> bool {
        matches!(self, PluginError::UnknownPlugin { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_plugin_message() {
        let err = PluginError::InvalidPlugin {
            manager: "ObjectPluginManager",
            actual: "demo::Thing",
            required: "BarcodeObject",
        };
        assert_eq!(
            err.to_string(),
            "ObjectPluginManager can only create instances of BarcodeObject; demo::Thing is invalid"
        );
        assert!(!err.is_unknown());
    }

    #[test]
    fn test_unknown_plugin_help() {
        let err = PluginError::unknown_with_suggestion("code12", Some("code128"));
        assert!(err.is_unknown());
        assert_eq!(err.to_string(), "unknown barcode plugin `code12`");

        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("did you mean `code128`?"));

        assert!(PluginError::unknown("x").help().is_none());
    }
}
