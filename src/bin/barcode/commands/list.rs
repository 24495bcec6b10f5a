//! `barcode list` command
//!
//! List well-known symbologies, their legacy names, and configured aliases.

use anyhow::Result;

use barcode::plugin::defaults::is_well_known;
use barcode::plugin::{self, legacy_identifier, AliasKind, SYMBOLOGIES};

pub fn execute() -> Result<()> {
    let manager = plugin::global();

    println!("Symbologies:");
    println!();

    for name in SYMBOLOGIES {
        let status = if manager.contains(name) {
            "registered"
        } else {
            "not registered"
        };
        println!("  {:<18} {:<32} {}", name, legacy_identifier(name), status);
    }
    println!();

    let others: Vec<&str> = manager
        .names()
        .into_iter()
        .filter(|name| !is_well_known(name))
        .collect();
    if !others.is_empty() {
        println!("Other plugins:");
        for name in others {
            println!("  {:<18} {}", name, legacy_identifier(name));
        }
        println!();
    }

    let aliases: Vec<_> = manager
        .aliases()
        .into_iter()
        .filter(|info| info.kind == AliasKind::Alias)
        .collect();
    if !aliases.is_empty() {
        println!("Aliases:");
        for info in aliases {
            println!("  {} -> {}", info.alias, info.target);
        }
        println!();
    }

    Ok(())
}
