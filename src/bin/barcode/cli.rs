//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Barcode - resolve symbologies and draw them through the plugin registry
#[derive(Parser)]
#[command(name = "barcode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the global and project ones
    #[arg(long, global = true, env = "BARCODE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List symbologies and aliases
    List,

    /// Show what a name resolves to
    Show(ShowArgs),

    /// Draw a barcode and print its instructions
    Draw(DrawArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Symbology, alias or legacy name
    pub name: String,
}

#[derive(Args)]
pub struct DrawArgs {
    /// Symbology, alias or legacy name
    pub name: String,

    /// Text to encode
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Font for text instructions
    #[arg(long)]
    pub font: Option<String>,

    /// Print instructions as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail instead of drawing the error object
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
