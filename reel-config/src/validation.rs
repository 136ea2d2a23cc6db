//! Guard rails applied to a loaded configuration.

use reel_core::{BreakpointTable, BreakpointTableError, calculate_item_width};
use thiserror::Error;

use crate::models::EngineConfig;

/// Above this the resizing flag lingers long enough to be noticeable.
const MAX_SETTLE_MS: u64 = 5_000;

/// Configuration the engine refuses to run with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    /// The configured bands do not form a usable table.
    #[error("breakpoints rejected: {0}")]
    Breakpoints(#[from] BreakpointTableError),
}

/// Something legal but probably unintended.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected by [`apply_guard_rails`].
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Warnings in the order they were found.
    pub items: Vec<ConfigWarning>,
}

#[allow(missing_docs)]
impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Check a configuration before a page is built from it.
///
/// Breakpoint bands go through the same validation as
/// [`BreakpointTable::new`]; anything else questionable comes back as a
/// warning.
pub fn apply_guard_rails(
    config: &EngineConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let table = config.breakpoint_table()?;
    warn_cramped_bands(&table, &mut warnings);

    if config.resize_settle_ms == 0 {
        warnings.push_with_hint(
            "resize_settle_ms is 0; the resizing flag clears on the next tick",
            "Use a few hundred milliseconds to suppress transitions while dragging",
        );
    } else if config.resize_settle_ms > MAX_SETTLE_MS {
        warnings.push(format!(
            "resize_settle_ms is {} ms; transitions stay suppressed long after a resize ends",
            config.resize_settle_ms
        ));
    }

    Ok(warnings)
}

// The narrowest viewport a band serves should still fit its items.
fn warn_cramped_bands(table: &BreakpointTable, warnings: &mut ConfigWarnings) {
    for (band, (lower_bound, entry)) in table.lower_bounds().enumerate() {
        if band == 0 {
            continue;
        }
        let width = calculate_item_width(
            lower_bound,
            entry.container_padding,
            entry.item_gap,
            entry.items_per_page,
            true,
        );
        if width <= 0.0 {
            warnings.push_with_hint(
                format!(
                    "breakpoint band {band} leaves no room for items at {lower_bound}px"
                ),
                "Lower items_per_page, padding or gap for this band",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{Breakpoint, BreakpointBand};

    fn config(bands: Vec<BreakpointBand>, settle: u64) -> EngineConfig {
        EngineConfig {
            breakpoints: bands,
            resize_settle_ms: settle,
        }
    }

    fn flat(items_per_page: usize) -> Breakpoint {
        Breakpoint::new(items_per_page, 0.0, 0.0)
    }

    #[test]
    fn default_config_passes_cleanly() {
        let warnings = apply_guard_rails(&EngineConfig::default()).unwrap();
        assert!(warnings.is_empty());
    }

    fn rejected(bands: Vec<BreakpointBand>) -> BreakpointTableError {
        match apply_guard_rails(&config(bands, 500)) {
            Err(ConfigGuardRailError::Breakpoints(err)) => err,
            Ok(_) => panic!("bands were accepted"),
        }
    }

    #[test]
    fn rejects_structural_problems() {
        assert_eq!(rejected(vec![]), BreakpointTableError::Empty);
        assert_eq!(
            rejected(vec![BreakpointBand::bounded(900.0, flat(3))]),
            BreakpointTableError::BoundedLastBand
        );
        assert_eq!(
            rejected(vec![
                BreakpointBand::bounded(900.0, flat(2)),
                BreakpointBand::bounded(900.0, flat(3)),
                BreakpointBand::open(flat(4)),
            ]),
            BreakpointTableError::UnorderedBreakpoints {
                band: 1,
                below_px: 900.0
            }
        );
        assert_eq!(
            rejected(vec![BreakpointBand::open(flat(0))]),
            BreakpointTableError::ZeroItemsPerPage { band: 0 }
        );
    }

    #[test]
    fn guard_rails_agree_with_the_table() {
        let bands = vec![
            BreakpointBand::bounded(700.0, flat(2)),
            BreakpointBand::open(Breakpoint::new(3, -1.0, 0.0)),
        ];
        let from_table = BreakpointTable::new(bands.clone()).unwrap_err();
        assert_eq!(rejected(bands), from_table);
    }

    #[test]
    fn rejects_pages_that_overflow_the_tab_band() {
        let err = rejected(vec![BreakpointBand::open(flat(9))]);
        assert!(matches!(
            err,
            BreakpointTableError::TabBandOverflow {
                items_per_page: 9,
                ..
            }
        ));

        let ok = apply_guard_rails(&config(
            vec![BreakpointBand::open(flat(8))],
            500,
        ));
        assert!(ok.is_ok());
    }

    #[test]
    fn settle_extremes_are_warnings() {
        let zero = apply_guard_rails(&config(default_bands(), 0)).unwrap();
        assert_eq!(zero.len(), 1);
        assert!(zero.items[0].hint.is_some());

        let long = apply_guard_rails(&config(default_bands(), 10_000)).unwrap();
        assert_eq!(long.len(), 1);
        assert!(long.items[0].message.contains("10000"));
    }

    #[test]
    fn cramped_band_is_a_warning() {
        let bands = vec![
            BreakpointBand::bounded(100.0, Breakpoint::new(1, 0.0, 0.0)),
            BreakpointBand::open(Breakpoint::new(8, 64.0, 12.0)),
        ];
        let warnings = apply_guard_rails(&config(bands, 500)).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].message.contains("band 1"));
    }

    fn default_bands() -> Vec<BreakpointBand> {
        EngineConfig::default().breakpoints
    }
}
