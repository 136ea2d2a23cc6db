//! Carousel layout constants
//!
//! Shared constants for geometry, accessibility banding and resize handling.
//! Tuning should happen here so every carousel on a page stays consistent.

/// Partial preview items shown at the window edges.
pub mod preview {
    /// Fraction of an item's width left visible at each edge.
    pub const FRACTION: f64 = 0.3;
    /// Item-widths the two edge previews take out of the viewport together.
    pub const SHARE: f64 = FRACTION * 2.0;
}

/// Keyboard tab-order banding across carousels sharing a page.
pub mod tab {
    /// Tab stops reserved per carousel instance (buttons plus visible items).
    pub const BAND_SIZE: i32 = 10;
    /// Left and right scroll buttons, both inside the band.
    pub const SCROLL_BUTTONS: i32 = 2;
    /// Largest page that still fits a band next to both scroll buttons.
    pub const MAX_ITEMS_PER_PAGE: usize = (BAND_SIZE - SCROLL_BUTTONS) as usize;
    /// Marker for elements that must be left out of the native tab sequence.
    pub const NOT_TABBABLE: i32 = -1;
}

/// Responsive image selection.
pub mod image {
    /// Viewports narrower than this get the small rendition. Deliberately not
    /// one of the layout breakpoints.
    pub const SMALL_BELOW_PX: f64 = 960.0;
}

/// Resize handling defaults.
pub mod resize {
    /// How long the resizing flag stays raised after the last resize (ms).
    pub const SETTLE_MS: u64 = 500;
}
