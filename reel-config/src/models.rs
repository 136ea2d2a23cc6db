//! Engine settings and where they are loaded from.

use anyhow::{Context, anyhow};
use reel_core::constants::resize::SETTLE_MS;
use reel_core::{
    BreakpointBand, BreakpointTable, BreakpointTableError, CarouselPage,
    ResizeSettle, breakpoint::STANDARD_BANDS,
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::validation::apply_guard_rails;

/// Names a config file to load.
pub const CONFIG_PATH_ENV: &str = "REEL_CONFIG_PATH";
/// Holds the whole config as inline JSON.
pub const CONFIG_JSON_ENV: &str = "REEL_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "reel.toml",
    "reel.json",
    "config/reel.toml",
    "config/reel.json",
];

fn default_breakpoints() -> Vec<BreakpointBand> {
    STANDARD_BANDS.to_vec()
}

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing found; built-in settings.
    #[default]
    Default,
    /// File named by `REEL_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON from `REEL_CONFIG_JSON`.
    EnvInline,
    /// One of the default candidate files.
    File(PathBuf),
}

/// Layout engine settings.
///
/// Bands are kept as written so guard rails can report every problem with
/// them; [`EngineConfig::breakpoint_table`] produces the validated table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ascending breakpoint bands. Each applies below its `below_px`; the last
    /// band carries no bound and catches every wider viewport.
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<BreakpointBand>,
    /// Quiet window (ms) after the last resize before the resizing flag drops.
    pub resize_settle_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            resize_settle_ms: SETTLE_MS,
        }
    }
}

impl EngineConfig {
    /// Load engine configuration using environment variables.
    /// Evaluation order:
    /// 1) `$REEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REEL_CONFIG_JSON` (inline JSON),
    /// 3) the first of `reel.toml`, `reel.json`, `config/reel.toml`,
    ///    `config/reel.json` found in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same precedence as [`EngineConfig::load_from_env`] with an explicit
    /// variable lookup and base directory for the default candidates.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw).with_context(|| {
                format!("{CONFIG_JSON_ENV} does not hold a valid engine config")
            })?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read a config file. `.json` and `.toml` decide the format; any other
    /// name goes through [`EngineConfig::parse_from_str`].
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let shown = path.display();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot open layout settings {shown}"))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("layout settings {shown}")),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("layout settings {shown}: {err}")),
            _ => Self::parse_from_str(&contents, &shown.to_string()),
        }
    }

    /// Decode settings of unknown format; `origin` names them in errors.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first: bare `key = value` lines never parse as JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "layout settings {origin} are neither TOML ({toml_err}) nor JSON ({json_err})"
                )
            })
        })
    }

    /// Decode JSON settings.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("layout settings JSON: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }

    /// Quiet window for the resize settle timer.
    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    /// Validated table for the configured bands.
    pub fn breakpoint_table(
        &self,
    ) -> Result<BreakpointTable, BreakpointTableError> {
        BreakpointTable::new(self.breakpoints.clone())
    }

    /// Validate and build an empty page for `viewport_width`. Guard-rail
    /// warnings are logged, errors abort.
    pub fn build_page(
        &self,
        viewport_width: f64,
    ) -> anyhow::Result<CarouselPage> {
        let warnings = apply_guard_rails(self)
            .context("engine configuration rejected")?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    tracing::warn!("{} (hint: {})", warning.message, hint)
                }
                None => tracing::warn!("{}", warning.message),
            }
        }

        let table = self.breakpoint_table()?;
        Ok(CarouselPage::with_config(
            viewport_width,
            table,
            ResizeSettle::new(self.settle_window()),
        ))
    }
}
