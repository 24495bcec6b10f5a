//! Barcode CLI - resolve and draw barcode symbologies

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use barcode::plugin::{self, ObjectPluginManager};
use barcode::util::config::{self, Config};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("barcode=debug")
    } else {
        EnvFilter::new("barcode=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;

    // Registration is fixed from here on
    let mut manager = ObjectPluginManager::new();
    manager.apply_config(&config.registry);
    if plugin::install_global(manager).is_err() {
        anyhow::bail!("plugin registry was already initialized");
    }

    // Execute command
    match cli.command {
        Commands::List => commands::list::execute(),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Draw(args) => commands::draw::execute(args, &config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path);
    }

    let cwd = std::env::current_dir()?;
    let project = config::project_config_path(&cwd);
    let config = match config::global_config_path() {
        Some(global) => config::load_config(&global, &project),
        None => Config::load_or_default(&project),
    };
    Ok(config)
}
