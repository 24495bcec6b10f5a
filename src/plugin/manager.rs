//! Object plugin manager - name to validated barcode object resolution.
//!
//! Key principle: the manager either returns an object that satisfies the
//! barcode object capability or says exactly why it could not. It never
//! substitutes a different object; falling back to the error object is a
//! caller policy (see `ops::render`).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::object::{BarcodeObject, ErrorObject};
use crate::plugin::capability::{Capability, Plugin, BARCODE_OBJECT};
use crate::plugin::defaults::{legacy_identifier, legacy_key, normalize};
use crate::plugin::errors::PluginError;
use crate::util::config::RegistryConfig;

/// Name the manager reports in `InvalidPlugin` errors.
pub const MANAGER_NAME: &str = "ObjectPluginManager";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Zero-argument constructor producing a fresh plugin value.
pub type Constructor = Arc<dyn Fn() -> Box<dyn Plugin> + Send + Sync>;

/// How an alias was bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    /// Alternate name supplied at registration or by configuration
    Alias,
    /// Deprecated flattened fully-qualified name
    Legacy,
}

#[derive(Debug, Clone)]
struct AliasEntry {
    target: String,
    kind: AliasKind,
}

/// A resolved alias, for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasInfo<'a> {
    pub alias: &'a str,
    pub target: &'a str,
    pub kind: AliasKind,
}

/// Registry of barcode object constructors.
///
/// One canonical table maps symbology identifiers to constructors; aliases
/// and legacy identifiers point straight at canonical names, never at other
/// aliases. Objects are built fresh on every resolution and never shared.
#[derive(Clone)]
pub struct ObjectPluginManager {
    factories: HashMap<String, Constructor>,
    aliases: HashMap<String, AliasEntry>,
    instance_of: Capability,
}

impl ObjectPluginManager {
    /// Create a manager with no registrations.
    pub fn empty() -> Self {
        ObjectPluginManager {
            factories: HashMap::new(),
            aliases: HashMap::new(),
            instance_of: BARCODE_OBJECT,
        }
    }

    /// Create a manager with the built-in `error` symbology registered.
    pub fn new() -> Self {
        let mut manager = Self::empty();
        manager.register_type::<ErrorObject>("error", &[]);
        manager
    }

    /// Register a constructor under `name`, plus `aliases`.
    ///
    /// The last registration for a name wins. The legacy identifier for
    /// `name` is bound alongside. A name that is another plugin's legacy
    /// identifier is refused, and an alias that collides with a registered
    /// name or a legacy identifier is ignored.
    pub fn register<F>(&mut self, name: &str, constructor: F, aliases: &[&str])
    where
        F: Fn() -> Box<dyn Plugin> + Send + Sync + 'static,
    {
        let name = normalize(name);
        if name.is_empty() {
            tracing::warn!("Ignoring barcode plugin registration with an empty name");
            return;
        }
        if let Some(entry) = self.legacy_entry(&name) {
            tracing::warn!(
                "`{}` is the legacy name of `{}`; ignoring registration",
                name,
                entry.target
            );
            return;
        }

        if self.aliases.remove(&name).is_some() {
            tracing::debug!("`{}` was an alias; now a registered plugin", name);
        }
        if self.factories.insert(name.clone(), Arc::new(constructor)).is_some() {
            tracing::debug!("Replacing barcode plugin `{}`", name);
        }

        self.bind(legacy_identifier(&name), &name, AliasKind::Legacy);
        for alias in aliases {
            self.bind(normalize(alias), &name, AliasKind::Alias);
        }
    }

    /// Register a type built with `Default::default()`.
    pub fn register_type<T>(&mut self, name: &str, aliases: &[&str])
    where
        T: Plugin + Default,
    {
        self.register(name, || Box::new(T::default()) as Box<dyn Plugin>, aliases);
    }

    /// Point `alias` at whatever `target` resolves to.
    ///
    /// `target` may itself be an alias or legacy identifier; the canonical
    /// name is stored so aliases never chain.
    pub fn set_alias(&mut self, alias: &str, target: &str) -> Result<(), PluginError> {
        let canonical = match self.lookup(target) {
            Some((canonical, _)) => canonical.to_string(),
            None => return Err(self.unknown(target)),
        };
        self.bind(normalize(alias), &canonical, AliasKind::Alias);
        Ok(())
    }

    /// Apply aliases from configuration.
    ///
    /// Aliases whose target is unknown are skipped with a warning.
    pub fn apply_config(&mut self, config: &RegistryConfig) {
        for (alias, target) in &config.aliases {
            if let Err(e) = self.set_alias(alias, target) {
                tracing::warn!("Skipping configured alias `{}`: {}", alias, e);
            }
        }
    }

    /// Resolve `name` to a freshly constructed, validated barcode object.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn BarcodeObject>, PluginError> {
        let plugin = self.resolve_plugin(name)?;
        self.validate(plugin)
    }

    /// Construct the plugin registered for `name` without checking it.
    ///
    /// Pass the result to [`validate`](Self::validate) before use.
    pub fn resolve_plugin(&self, name: &str) -> Result<Box<dyn Plugin>, PluginError> {
        let (canonical, via) = self.lookup(name).ok_or_else(|| self.unknown(name))?;

        if via == Some(AliasKind::Legacy) {
            tracing::warn!(
                "Barcode plugin name `{}` is deprecated; use `{}`",
                name.trim(),
                canonical
            );
        }

        let constructor = self
            .factories
            .get(canonical)
            .ok_or_else(|| self.unknown(name))?;

        tracing::debug!("Constructing barcode plugin `{}`", canonical);
        Ok(constructor())
    }

    /// Check that `plugin` satisfies the required capability.
    pub fn validate(&self, plugin: Box<dyn Plugin>) -> Result<Box<dyn BarcodeObject>, PluginError> {
        self.instance_of.check(MANAGER_NAME, plugin)
    }

    /// The capability every resolved object satisfies.
    pub fn capability(&self) -> Capability {
        self.instance_of
    }

    /// Check if `name` resolves to a registered constructor.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Canonical name `name` resolves to, if any.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|(canonical, _)| canonical)
    }

    /// Registered canonical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aliases and legacy identifiers, sorted by alias.
    pub fn aliases(&self) -> Vec<AliasInfo<'_>> {
        let mut aliases: Vec<AliasInfo<'_>> = self
            .aliases
            .iter()
            .map(|(alias, entry)| AliasInfo {
                alias,
                target: &entry.target,
                kind: entry.kind,
            })
            .collect();
        aliases.sort_unstable_by(|a, b| a.alias.cmp(b.alias));
        aliases
    }

    /// Get the number of registered constructors.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the manager has no registrations.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<(&str, Option<AliasKind>)> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }

        if let Some((canonical, _)) = self.factories.get_key_value(&key) {
            return Some((canonical.as_str(), None));
        }

        if let Some(entry) = self.aliases.get(&key) {
            return Some((entry.target.as_str(), Some(entry.kind)));
        }

        // Legacy identifiers also match with separators and case stripped.
        self.legacy_entry(name)
            .map(|entry| (entry.target.as_str(), Some(AliasKind::Legacy)))
    }

    fn legacy_entry(&self, name: &str) -> Option<&AliasEntry> {
        self.aliases
            .get(&legacy_key(name))
            .filter(|entry| entry.kind == AliasKind::Legacy)
    }

    fn bind(&mut self, alias: String, target: &str, kind: AliasKind) {
        if alias.is_empty() || alias == target {
            return;
        }
        if self.factories.contains_key(&alias) {
            tracing::warn!(
                "Alias `{}` for `{}` collides with a registered plugin; ignoring",
                alias,
                target
            );
            return;
        }
        if kind == AliasKind::Alias {
            if let Some(entry) = self.legacy_entry(&alias) {
                if entry.target != target {
                    tracing::warn!(
                        "Alias `{}` for `{}` is the legacy name of `{}`; ignoring",
                        alias,
                        target,
                        entry.target
                    );
                }
                return;
            }
        }
        self.aliases.insert(
            alias,
            AliasEntry {
                target: target.to_string(),
                kind,
            },
        );
    }

    fn unknown(&self, name: &str) -> PluginError {
        let key = normalize(name);
        let mut best_score = SUGGESTION_THRESHOLD;
        let mut best_match = None;

        let candidates = self.factories.keys().chain(
            self.aliases
                .iter()
                .filter(|(_, entry)| entry.kind == AliasKind::Alias)
                .map(|(alias, _)| alias),
        );
        for candidate in candidates {
            let score = strsim::jaro_winkler(&key, candidate);
            if score > best_score {
                best_score = score;
                best_match = Some(candidate.as_str());
            }
        }

        PluginError::unknown_with_suggestion(name, best_match)
    }
}

impl Default for ObjectPluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectPluginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPluginManager")
            .field("names", &self.names())
            .field("aliases", &self.aliases.len())
            .field("instance_of", &self.instance_of)
            .finish()
    }
}
