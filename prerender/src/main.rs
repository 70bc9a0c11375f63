//! # antimatter-prerender
//!
//! Renders the Antimatter AI landing page to a single static HTML file.
//! The output needs no JavaScript: every section is in its final state and
//! the particle canvas stays empty.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults, writes dist/index.html
//! antimatter-prerender
//!
//! # Custom metadata and output directory
//! antimatter-prerender --config site.toml --out public
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use antimatter_site::{SiteConfig, render_page, write_page};
use chrono::Datelike;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "antimatter-prerender")]
#[command(about = "Render the Antimatter AI landing page to static HTML")]
#[command(version)]
struct Args {
    /// Site config (TOML); built-in defaults when omitted
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory for index.html
    #[arg(long, value_name = "DIR", default_value = "dist")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    let mut config = match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config from {}", path.display()))?,
        None => {
            debug!("no --config given, using built-in metadata");
            SiteConfig::default()
        }
    };

    if config.copyright_year.is_none() {
        config.copyright_year = Some(chrono::Local::now().year());
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;

    let html = render_page(&config);
    let path = write_page(&args.out, &html).context("writing rendered page")?;

    info!("Wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!(
        "antimatter-prerender v{} ({} -> {})",
        env!("CARGO_PKG_VERSION"),
        args.config
            .as_ref()
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
        args.out.display()
    );

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[antimatter-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
