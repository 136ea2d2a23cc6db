//! `reelctl`: lay out a feed's carousels for a viewport width and print the
//! render snapshots.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reel_config::{ConfigSource, EngineConfig};
use reel_core::{CarouselPage, NavKey};
use reel_model::{
    CarouselSection, FeedResponse, FeedSection, sections_from_feed,
};
use serde_json::Value;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(
    name = "reelctl",
    version,
    about = "Inspect carousel layouts for a feed and viewport width"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lay out every carousel of a feed and print their snapshots as JSON
    Layout {
        /// Feed JSON: the front-page response or a bare array of sections
        #[arg(long)]
        feed: PathBuf,
        /// Viewport width in CSS pixels
        #[arg(long)]
        width: f64,
        /// Keys to replay, comma separated: l, r, ArrowLeft, ArrowRight
        #[arg(long, value_delimiter = ',', value_parser = parse_key)]
        keys: Vec<NavKey>,
        /// Carousel index that receives the keys (all carousels when omitted)
        #[arg(long)]
        focus: Option<usize>,
        /// Engine config file (TOML or JSON); overrides REEL_CONFIG_* lookup
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the breakpoint table in effect
    Breakpoints {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_key(raw: &str) -> std::result::Result<NavKey, String> {
    let raw = raw.trim();
    if let Some(key) = NavKey::from_key_name(raw) {
        return Ok(key);
    }
    match raw.to_ascii_lowercase().as_str() {
        "l" | "left" => Ok(NavKey::Left),
        "r" | "right" => Ok(NavKey::Right),
        _ => Err(format!(
            "unknown key '{raw}' (expected l, r, ArrowLeft or ArrowRight)"
        )),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let (config, source) = match path {
        Some(path) => (
            EngineConfig::load_from_file(path)?,
            ConfigSource::File(path.to_path_buf()),
        ),
        None => EngineConfig::load_from_env()?,
    };
    tracing::info!(?source, "engine configuration loaded");
    Ok(config)
}

fn load_sections(path: &Path) -> Result<Vec<CarouselSection>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read feed {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("feed {} is not JSON", path.display()))?;

    let sections = if value.is_array() {
        let sections: Vec<FeedSection> = serde_json::from_value(value)
            .with_context(|| format!("invalid feed {}", path.display()))?;
        sections_from_feed(&sections)
    } else {
        let response: FeedResponse = serde_json::from_value(value)
            .with_context(|| format!("invalid feed {}", path.display()))?;
        response.sections()
    };
    Ok(sections)
}

fn run_layout(
    feed: &Path,
    width: f64,
    keys: &[NavKey],
    focus: Option<usize>,
    config: Option<&Path>,
) -> Result<()> {
    if !width.is_finite() || width < 0.0 {
        bail!("width must be a finite, non-negative number of pixels");
    }

    let config = load_config(config)?;
    let sections = load_sections(feed)?;
    let mut page: CarouselPage = config.build_page(width)?;

    for (index, section) in sections.into_iter().enumerate() {
        tracing::debug!(
            carousel = index,
            id = %section.id,
            items = section.items.len(),
            "mounting carousel"
        );
        page.mount(index, section.header)?.set_items(section.items);
    }

    if let Some(index) = focus {
        page.focus_carousel(index)
            .with_context(|| format!("cannot focus carousel {index}"))?;
    }
    for &key in keys {
        let moved = page.handle_key(key);
        tracing::debug!(key = key.key_name(), moved, "key replayed");
    }

    let output = serde_json::to_string_pretty(&page.snapshots())?;
    println!("{output}");
    Ok(())
}

fn run_breakpoints(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let table = config
        .breakpoint_table()
        .context("invalid breakpoint table")?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON output only.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            feed,
            width,
            keys,
            focus,
            config,
        } => run_layout(&feed, width, &keys, focus, config.as_deref()),
        Command::Breakpoints { config } => run_breakpoints(config.as_deref()),
    }
}
