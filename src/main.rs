#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tdf_assets::render::render_head;
use tdf_assets::{AssetConfig, BaseView, WalkOptions, walk_asset_paths_with};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = TdfAssets::parse();

    tracing_subscriber::registry()
        .with(eval_logging(&cli))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .try_init()
        .context("error initializing logging")?;

    cli.run()
}

fn eval_logging(cli: &TdfAssets) -> tracing_subscriber::EnvFilter {
    let directives = match (cli.verbose, cli.quiet) {
        // quiet overrides verbose
        (_, true) => "error,tdf_assets=error",
        (0, false) => "error,tdf_assets=warn",
        (1, false) => "error,tdf_assets=debug",
        (_, false) => "error,tdf_assets=trace",
    };
    tracing_subscriber::EnvFilter::new(directives)
}

/// Discover static assets and client dependencies of a server-rendered application.
#[derive(Parser)]
#[command(about, version)]
struct TdfAssets {
    #[command(subcommand)]
    action: Command,
    /// Resource root holding the static directories and the dependency manifest.
    #[arg(long, env = "TDF_ASSETS_ROOT", default_value = ".", global(true))]
    root: PathBuf,
    /// Path to the asset config file [default: <root>/tdf_assets.json]
    #[arg(long, env = "TDF_ASSETS_CONFIG", global(true))]
    config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long, global(true), action = ArgAction::Count)]
    verbose: u8,
    /// Be more quiet, conflicts with --verbose
    #[arg(short, long, global(true), conflicts_with("verbose"))]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every file below a directory, relative to it.
    Walk {
        /// Directory to walk, relative to the resource root.
        dir: PathBuf,
        /// Sort the listed paths.
        #[arg(long)]
        sorted: bool,
    },
    /// List the client dependencies declared in the manifest.
    Deps,
    /// Print the asset tags a page would include.
    Render {
        /// Print the collected asset URLs as JSON instead of HTML.
        #[arg(long)]
        json: bool,
    },
}

impl TdfAssets {
    fn load_config(&self) -> Result<AssetConfig> {
        match &self.config {
            Some(path) => AssetConfig::from_path(path)
                .with_context(|| format!("error loading asset config {}", path.display())),
            None => Ok(AssetConfig::discover(&self.root)),
        }
    }

    fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let view = BaseView::new(&self.root, &config);

        match self.action {
            Command::Walk { ref dir, sorted } => {
                let base = self.root.join(dir);
                let paths = walk_asset_paths_with(&base, walk_options(&config, sorted))
                    .with_context(|| format!("error walking {}", base.display()))?;
                for path in paths {
                    println!("{path}");
                }
            }
            Command::Deps => {
                let manifest = view
                    .dependencies()
                    .context("error loading dependency manifest")?;
                for (name, record) in manifest.entries() {
                    println!("{name} {}", record.version);
                }
            }
            Command::Render { json } => {
                let assets = view.page_assets().context("error collecting page assets")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&assets)?);
                } else {
                    print!("{}", render_head(&assets));
                }
            }
        }
        Ok(())
    }
}

/// `--sorted` forces sorting; without it the config decides.
fn walk_options(config: &AssetConfig, sorted: bool) -> WalkOptions {
    let mut options = config.walk_options();
    options.sorted |= sorted;
    options
}
