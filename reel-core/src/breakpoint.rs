//! Breakpoint resolution: viewport width -> items per page, padding and gap.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::tab;
use crate::error::BreakpointTableError;
use crate::geometry::css_px;

/// Layout constants selected by a viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Fully opaque items in the window.
    pub items_per_page: usize,
    /// Horizontal padding reserved once across the container (px).
    pub container_padding: f64,
    /// Gap between neighbouring items (px).
    pub item_gap: f64,
}

impl Breakpoint {
    /// Breakpoint from its three layout constants.
    pub const fn new(
        items_per_page: usize,
        container_padding: f64,
        item_gap: f64,
    ) -> Self {
        Self {
            items_per_page,
            container_padding,
            item_gap,
        }
    }

    /// Custom properties for this breakpoint.
    pub fn style_vars(&self) -> StyleVars {
        StyleVars::from(*self)
    }
}

/// One row of a breakpoint table. Applies to widths below `below_px`; the
/// last band is open ended and carries no bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointBand {
    /// Exclusive upper bound (px); `None` on the open last band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_px: Option<f64>,
    /// See [`Breakpoint::items_per_page`].
    pub items_per_page: usize,
    /// See [`Breakpoint::container_padding`].
    pub container_padding: f64,
    /// See [`Breakpoint::item_gap`].
    pub item_gap: f64,
}

impl BreakpointBand {
    /// Band applying to widths below `below_px`.
    pub const fn bounded(below_px: f64, breakpoint: Breakpoint) -> Self {
        Self {
            below_px: Some(below_px),
            items_per_page: breakpoint.items_per_page,
            container_padding: breakpoint.container_padding,
            item_gap: breakpoint.item_gap,
        }
    }

    /// Band with no upper bound.
    pub const fn open(breakpoint: Breakpoint) -> Self {
        Self {
            below_px: None,
            items_per_page: breakpoint.items_per_page,
            container_padding: breakpoint.container_padding,
            item_gap: breakpoint.item_gap,
        }
    }

    /// The layout constants of this band.
    pub const fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(
            self.items_per_page,
            self.container_padding,
            self.item_gap,
        )
    }

    fn admits(&self, viewport_width: f64) -> bool {
        self.below_px.is_none_or(|below| viewport_width < below)
    }
}

/// Bands used when no table is configured.
pub const STANDARD_BANDS: [BreakpointBand; 5] = [
    BreakpointBand::bounded(768.0, Breakpoint::new(2, 32.0, 4.0)),
    BreakpointBand::bounded(960.0, Breakpoint::new(3, 64.0, 8.0)),
    BreakpointBand::bounded(1280.0, Breakpoint::new(4, 64.0, 8.0)),
    BreakpointBand::bounded(1920.0, Breakpoint::new(6, 64.0, 12.0)),
    BreakpointBand::open(Breakpoint::new(7, 64.0, 12.0)),
];

const OPEN_BAND: BreakpointBand = STANDARD_BANDS[STANDARD_BANDS.len() - 1];

/// Resolve a viewport width against the standard table.
///
/// Total over every input: each width, including non-finite ones, lands in
/// exactly one band (anything no bounded band admits falls to the last one).
pub fn resolve_breakpoint(viewport_width: f64) -> Breakpoint {
    resolve_in(&STANDARD_BANDS, viewport_width)
}

fn resolve_in(bands: &[BreakpointBand], viewport_width: f64) -> Breakpoint {
    bands
        .iter()
        .find(|band| band.admits(viewport_width))
        .or(bands.last())
        .map(BreakpointBand::breakpoint)
        .unwrap_or(OPEN_BAND.breakpoint())
}

/// A validated, ascending breakpoint table whose last band is open ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BreakpointBand>", into = "Vec<BreakpointBand>")]
pub struct BreakpointTable {
    bands: Vec<BreakpointBand>,
}

impl BreakpointTable {
    /// Validate `bands` into a table.
    ///
    /// Besides the shape of the table (non-empty, ascending finite bounds,
    /// open last band, sane spacing) every band's page has to fit the tab
    /// band each carousel owns, together with both scroll buttons.
    pub fn new(
        bands: Vec<BreakpointBand>,
    ) -> std::result::Result<Self, BreakpointTableError> {
        let Some(last) = bands.last() else {
            return Err(BreakpointTableError::Empty);
        };
        if last.below_px.is_some() {
            return Err(BreakpointTableError::BoundedLastBand);
        }

        let mut previous: Option<f64> = None;
        for (band, entry) in bands.iter().enumerate() {
            if entry.items_per_page == 0 {
                return Err(BreakpointTableError::ZeroItemsPerPage { band });
            }
            if entry.items_per_page > tab::MAX_ITEMS_PER_PAGE {
                return Err(BreakpointTableError::TabBandOverflow {
                    band,
                    items_per_page: entry.items_per_page,
                    band_size: tab::BAND_SIZE,
                });
            }
            if !(entry.container_padding.is_finite()
                && entry.container_padding >= 0.0
                && entry.item_gap.is_finite()
                && entry.item_gap >= 0.0)
            {
                return Err(BreakpointTableError::InvalidSpacing { band });
            }
            if band == bands.len() - 1 {
                break;
            }
            let Some(below_px) = entry.below_px.filter(|b| b.is_finite())
            else {
                return Err(BreakpointTableError::MissingUpperBound { band });
            };
            if previous.is_some_and(|prev| below_px <= prev) {
                return Err(BreakpointTableError::UnorderedBreakpoints {
                    band,
                    below_px,
                });
            }
            previous = Some(below_px);
        }

        Ok(Self { bands })
    }

    /// The built-in five-band table.
    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
        }
    }

    /// Breakpoint of the first band admitting `viewport_width`.
    pub fn resolve(&self, viewport_width: f64) -> Breakpoint {
        resolve_in(&self.bands, viewport_width)
    }

    /// Bands in ascending order, the open band last.
    pub fn bands(&self) -> &[BreakpointBand] {
        &self.bands
    }

    /// Inclusive lower bound of each band, paired with the band.
    pub fn lower_bounds(
        &self,
    ) -> impl Iterator<Item = (f64, &BreakpointBand)> + '_ {
        let lowers = std::iter::once(0.0)
            .chain(self.bands.iter().filter_map(|band| band.below_px));
        lowers.zip(self.bands.iter())
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<BreakpointBand>> for BreakpointTable {
    type Error = BreakpointTableError;

    fn try_from(
        bands: Vec<BreakpointBand>,
    ) -> std::result::Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<BreakpointTable> for Vec<BreakpointBand> {
    fn from(table: BreakpointTable) -> Self {
        table.bands
    }
}

/// The custom properties styling consumers read, derived from a breakpoint.
/// The engine never writes them anywhere itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleVars {
    /// `--nr-of-items`
    pub nr_of_items: usize,
    /// `--container-padding`, in px
    pub container_padding: f64,
    /// `--item-gap`, in px
    pub item_gap: f64,
}

impl StyleVars {
    /// Property name for the items per page.
    pub const NR_OF_ITEMS: &'static str = "--nr-of-items";
    /// Property name for the container padding.
    pub const CONTAINER_PADDING: &'static str = "--container-padding";
    /// Property name for the item gap.
    pub const ITEM_GAP: &'static str = "--item-gap";

    /// Key/value pairs ready to be applied as custom properties.
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            (Self::NR_OF_ITEMS, self.nr_of_items.to_string()),
            (Self::CONTAINER_PADDING, css_px(self.container_padding)),
            (Self::ITEM_GAP, css_px(self.item_gap)),
        ]
    }
}

impl From<Breakpoint> for StyleVars {
    fn from(breakpoint: Breakpoint) -> Self {
        Self {
            nr_of_items: breakpoint.items_per_page,
            container_padding: breakpoint.container_padding,
            item_gap: breakpoint.item_gap,
        }
    }
}

impl Serialize for StyleVars {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let pairs = self.pairs();
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, value) in &pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(b: Breakpoint) -> (usize, f64, f64) {
        (b.items_per_page, b.container_padding, b.item_gap)
    }

    #[test]
    fn standard_table_examples() {
        assert_eq!(tuple(resolve_breakpoint(500.0)), (2, 32.0, 4.0));
        assert_eq!(tuple(resolve_breakpoint(800.0)), (3, 64.0, 8.0));
        assert_eq!(tuple(resolve_breakpoint(1000.0)), (4, 64.0, 8.0));
        assert_eq!(tuple(resolve_breakpoint(1600.0)), (6, 64.0, 12.0));
        assert_eq!(tuple(resolve_breakpoint(2000.0)), (7, 64.0, 12.0));
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(resolve_breakpoint(767.9).items_per_page, 2);
        assert_eq!(resolve_breakpoint(768.0).items_per_page, 3);
        assert_eq!(resolve_breakpoint(959.0).items_per_page, 3);
        assert_eq!(resolve_breakpoint(960.0).items_per_page, 4);
        assert_eq!(resolve_breakpoint(1280.0).items_per_page, 6);
        assert_eq!(resolve_breakpoint(1919.0).items_per_page, 6);
        assert_eq!(resolve_breakpoint(1920.0).items_per_page, 7);
    }

    #[test]
    fn every_width_matches_exactly_one_band() {
        for width in (0..=4000).map(f64::from) {
            let matching = STANDARD_BANDS
                .iter()
                .enumerate()
                .filter(|(i, band)| {
                    let lower = i
                        .checked_sub(1)
                        .and_then(|prev| STANDARD_BANDS[prev].below_px)
                        .unwrap_or(f64::NEG_INFINITY);
                    width >= lower && band.admits(width)
                })
                .count();
            assert_eq!(matching, 1, "width {width}");
        }
        assert_eq!(resolve_breakpoint(f64::NAN).items_per_page, 7);
        assert_eq!(resolve_breakpoint(-10.0).items_per_page, 2);
    }

    #[test]
    fn table_validation_rejects_malformed_tables() {
        assert!(BreakpointTable::new(vec![]).is_err());
        assert!(
            BreakpointTable::new(vec![BreakpointBand::bounded(
                500.0,
                Breakpoint::new(2, 0.0, 0.0)
            )])
            .is_err()
        );
        assert!(
            BreakpointTable::new(vec![
                BreakpointBand::bounded(900.0, Breakpoint::new(2, 0.0, 0.0)),
                BreakpointBand::bounded(600.0, Breakpoint::new(3, 0.0, 0.0)),
                BreakpointBand::open(Breakpoint::new(4, 0.0, 0.0)),
            ])
            .is_err()
        );
        assert!(
            BreakpointTable::new(vec![BreakpointBand::open(Breakpoint::new(
                0, 0.0, 0.0
            ))])
            .is_err()
        );
        assert_eq!(
            BreakpointTable::new(STANDARD_BANDS.to_vec()),
            Ok(BreakpointTable::standard())
        );
    }

    #[test]
    fn table_rejects_pages_wider_than_the_tab_band() {
        assert_eq!(
            BreakpointTable::new(vec![
                BreakpointBand::bounded(600.0, Breakpoint::new(2, 0.0, 0.0)),
                BreakpointBand::open(Breakpoint::new(9, 0.0, 0.0)),
            ]),
            Err(BreakpointTableError::TabBandOverflow {
                band: 1,
                items_per_page: 9,
                band_size: 10,
            })
        );
        let widest = Breakpoint::new(tab::MAX_ITEMS_PER_PAGE, 0.0, 0.0);
        let table = BreakpointTable::new(vec![BreakpointBand::open(widest)]);
        assert!(table.is_ok());
    }

    #[test]
    fn deserializing_validates_the_table() {
        let too_wide = r#"[{"items_per_page":9,"container_padding":0,"item_gap":0}]"#;
        let err =
            serde_json::from_str::<BreakpointTable>(too_wide).unwrap_err();
        assert!(err.to_string().contains("tab band"));
    }

    #[test]
    fn lower_bounds_follow_the_previous_band() {
        let table = BreakpointTable::standard();
        let lowers: Vec<f64> =
            table.lower_bounds().map(|(lower, _)| lower).collect();
        assert_eq!(lowers, vec![0.0, 768.0, 960.0, 1280.0, 1920.0]);
    }

    #[test]
    fn style_vars_render_as_custom_properties() {
        let pairs = resolve_breakpoint(1600.0).style_vars().pairs();
        assert_eq!(
            pairs,
            [
                ("--nr-of-items", "6".to_string()),
                ("--container-padding", "64px".to_string()),
                ("--item-gap", "12px".to_string()),
            ]
        );
    }
}
