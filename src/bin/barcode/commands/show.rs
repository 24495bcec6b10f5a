//! `barcode show` command
//!
//! Resolve a name and describe the object it produces.

use anyhow::Result;

use barcode::plugin::{self, legacy_identifier};

use crate::cli::ShowArgs;

pub fn execute(args: ShowArgs) -> Result<()> {
    let manager = plugin::global();
    let plugin = manager.resolve_plugin(&args.name)?;
    let concrete_type = plugin.plugin_type();
    let object = manager.validate(plugin)?;
    let canonical = manager
        .canonical_name(&args.name)
        .unwrap_or_else(|| object.symbology());

    println!("Plugin: {}", canonical);
    println!();
    println!("  Requested:   {}", args.name);
    println!("  Legacy name: {}", legacy_identifier(canonical));
    println!("  Type:        {}", concrete_type);
    println!("  Symbology:   {}", object.symbology());
    println!("  Capability:  {}", manager.capability());
    println!("  Width:       {}", object.width(true));
    println!("  Height:      {}", object.height(true));

    Ok(())
}
