//! Command line front end for resolving script references against a
//! deployment configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use script_asset_locator::config::LocatorConfig;
use script_asset_locator::locator::ScriptLocator;
use script_asset_locator::roots::Theme;

/// Resolve logical script references to the physical files that would be
/// served for them.
#[derive(Debug, Parser)]
#[command(name = "locate-scripts", version, about)]
struct Cli {
    /// Base directory relative roots are anchored at and the configuration
    /// file is discovered in.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Explicit configuration file instead of discovery.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured theme directory.
    #[arg(long)]
    theme: Option<String>,

    /// Emit the resolved assets as JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// Script references to resolve, e.g. `files/main` or `core/l10n/de`.
    #[arg(required = true)]
    scripts: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LocatorConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => LocatorConfig::discover(&cli.base_dir),
    };

    let layout = config.layout(&cli.base_dir);
    let theme = match &cli.theme {
        Some(directory) => Theme::new(directory.as_str()),
        None => config.theme(),
    };
    let registry = config.registry(&cli.base_dir);

    let locator = ScriptLocator::new(&layout, &theme, &registry);
    let assets = locator.find_all(&cli.scripts);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assets)?);
    } else {
        for asset in &assets {
            println!("{} -> {}", asset.path.display(), asset.web_path);
        }
    }

    Ok(())
}
