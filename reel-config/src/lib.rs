//! Configuration for the reel carousel engine.
//!
//! Loads breakpoint tables and resize timing from the environment, TOML or
//! JSON files, and checks them against guard rails before a page is built.

pub mod models;
pub mod validation;

pub use models::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigSource, EngineConfig,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
