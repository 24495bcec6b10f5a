//! `barcode draw` command
//!
//! Resolve a symbology, render it, and print the instructions.

use anyhow::{Context, Result};

use barcode::ops::{self, RenderOptions};
use barcode::plugin;
use barcode::Config;

use crate::cli::DrawArgs;

pub fn execute(args: DrawArgs, config: &Config) -> Result<()> {
    let opts = RenderOptions {
        text: args.text,
        font: args.font.or_else(|| config.render.font.clone()),
        strict: args.strict || config.render.strict.unwrap_or(false),
    };

    let drawing = ops::draw(plugin::global(), &args.name, &opts)?;

    if args.json {
        let json = serde_json::to_string_pretty(&drawing)
            .context("failed to serialize drawing")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} ({}x{}){}",
        drawing.symbology,
        drawing.width,
        drawing.height,
        if drawing.fallback { " [fallback]" } else { "" }
    );
    for instruction in &drawing.instructions {
        println!("  {}", instruction.describe());
    }

    Ok(())
}
