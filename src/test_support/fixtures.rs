//! Pre-built managers for registry tests.

use crate::plugin::{ObjectPluginManager, Plugin, SYMBOLOGIES};
use crate::test_support::FixtureObject;

/// A manager with every well-known symbology registered.
///
/// `error` is the real error object; everything else is a
/// [`FixtureObject`] reporting its own symbology name.
pub fn fixture_manager() -> ObjectPluginManager {
    let mut manager = ObjectPluginManager::new();
    for &name in SYMBOLOGIES.iter().filter(|&&name| name != "error") {
        manager.register(
            name,
            move || Box::new(FixtureObject::named(name)) as Box<dyn Plugin>,
            &[],
        );
    }
    manager
}
