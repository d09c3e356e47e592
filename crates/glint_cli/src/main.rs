//! Glint CLI
//!
//! Inspect and drive the site theme engine from a terminal:
//!
//! - `glint resolve`: show the theme a new session would start with
//! - `glint toggle`: toggle (optionally several times) and run the
//!   transition to completion
//! - `glint geometry`: dump the transition geometry for a corner as JSON
//! - `glint css`: print the CSS variable rule for a theme

mod config;
mod driver;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glint_theme::{
    css_rule, lookup, ColorSchemeQuery, Corner, DocumentRoot, FileStore, FixedColorScheme,
    SystemColorScheme, Theme, ThemeEngine, ThemeProvider,
};
use tracing_subscriber::EnvFilter;

use crate::config::GlintConfig;

/// Overrides the OS color-scheme query, e.g. `GLINT_COLOR_SCHEME=light`
const COLOR_SCHEME_ENV: &str = "GLINT_COLOR_SCHEME";

/// Light/dark theme engine for the site
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Resolve, toggle, and inspect the site theme")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "glint.toml", global = true)]
    config: PathBuf,

    /// Preferences file, overrides `[storage] path`
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Log engine state transitions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the theme a new session starts with
    Resolve,

    /// Toggle the theme and wait for the transition to settle
    Toggle {
        /// Number of toggles to fire
        #[arg(short = 'n', long, default_value_t = 1)]
        times: u32,

        /// Delay between successive toggles
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,
    },

    /// Print the transition geometry as JSON
    Geometry {
        /// Corner to describe (defaults to the configured corner)
        #[arg(long)]
        corner: Option<Corner>,
    },

    /// Print the CSS variable rule for a theme
    Css {
        /// Theme to render (defaults to the session's starting theme)
        #[arg(long)]
        theme: Option<Theme>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GlintConfig::load(&cli.config)?;
    let storage_path = cli.storage.clone().unwrap_or_else(|| config.storage.path.clone());

    match cli.command {
        Commands::Resolve => {
            let (provider, _) = session(&config, storage_path)?;
            let resolution = provider.with_engine(|engine| engine.initial_resolution());
            println!("{} ({:?})", resolution.theme, resolution.source);
        }
        Commands::Toggle { times, interval_ms } => {
            let (provider, root) = session(&config, storage_path)?;
            toggle(&provider, times, Duration::from_millis(interval_ms)).await;

            let (theme, commits) =
                provider.with_engine(|engine| (engine.theme(), engine.commit_count()));
            let attribute = root.theme().unwrap_or_default();
            println!("theme: {theme}");
            println!("root attribute: {attribute}");
            println!("commits: {commits}");
        }
        Commands::Geometry { corner } => {
            let corner = corner.unwrap_or(config.engine.theme.corner);
            let json = serde_json::to_string_pretty(lookup(corner))
                .context("Failed to serialize geometry")?;
            println!("{json}");
        }
        Commands::Css { theme } => {
            let theme = match theme {
                Some(theme) => theme,
                None => session(&config, storage_path)?
                    .0
                    .with_engine(|engine| engine.theme()),
            };
            println!("{}", css_rule(theme));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn color_scheme_query() -> Box<dyn ColorSchemeQuery> {
    match std::env::var(COLOR_SCHEME_ENV) {
        Ok(value) => Box::new(FixedColorScheme::from_override(&value)),
        Err(_) => Box::new(SystemColorScheme),
    }
}

/// Start a theme session backed by the preferences file
fn session(config: &GlintConfig, storage_path: PathBuf) -> Result<(ThemeProvider, DocumentRoot)> {
    let root = DocumentRoot::new();
    let query = color_scheme_query();
    let engine = ThemeEngine::new(
        config.engine.clone(),
        Box::new(FileStore::new(storage_path)),
        query.as_ref(),
        Box::new(root.clone()),
    )
    .context("Failed to start theme engine")?;
    Ok((ThemeProvider::new(engine), root))
}

async fn toggle(provider: &ThemeProvider, times: u32, interval: Duration) {
    let theme = provider.root_scope().use_theme();
    for i in 0..times {
        if i > 0 {
            driver::run_for(provider, interval).await;
        }
        theme.toggle_theme();
        tracing::info!(toggle = i + 1, "toggle requested");
    }
    let spent = driver::run_until_idle(provider).await;
    tracing::debug!(?spent, "transition settled");
}
