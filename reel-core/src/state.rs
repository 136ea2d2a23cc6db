//! CarouselLayoutState: anchor-based windowing state for one carousel

use std::ops::RangeInclusive;

use reel_model::DisplayItem;

use crate::breakpoint::{Breakpoint, StyleVars, resolve_breakpoint};
use crate::geometry::{
    calculate_item_width, calculate_translate_x, css_px, css_translate_x,
    image_url, sanitize_width,
};
use crate::messages::NavKey;

/// Layout and paging state of one carousel.
///
/// Every mutation ends in [`CarouselLayoutState::recalculate`], so the cached
/// geometry always matches the anchor, items and breakpoint.
#[derive(Debug, Clone)]
pub struct CarouselLayoutState {
    // Configuration
    carousel_index: usize,
    header: String,

    // Content
    items: Vec<DisplayItem>,

    // Viewport + layout
    viewport_width: f64,
    breakpoint: Breakpoint,

    // Windowing
    /// First fully visible item. Kept within `0..=max_anchor()` after every
    /// transition.
    anchor_index: usize,

    // Geometry cache, refreshed only by `recalculate`
    cached_item_width: f64,
    cached_translate_x: f64,
}

impl CarouselLayoutState {
    /// Create an empty carousel laid out against the standard breakpoints.
    pub fn new(
        carousel_index: usize,
        header: impl Into<String>,
        viewport_width: f64,
    ) -> Self {
        let viewport_width = sanitize_width(viewport_width);
        Self::with_breakpoint(
            carousel_index,
            header,
            viewport_width,
            resolve_breakpoint(viewport_width),
        )
    }

    /// Create an empty carousel with an explicitly resolved breakpoint.
    pub fn with_breakpoint(
        carousel_index: usize,
        header: impl Into<String>,
        viewport_width: f64,
        breakpoint: Breakpoint,
    ) -> Self {
        let mut s = Self {
            carousel_index,
            header: header.into(),
            items: Vec::new(),
            viewport_width: sanitize_width(viewport_width),
            breakpoint,
            anchor_index: 0,
            cached_item_width: 0.0,
            cached_translate_x: 0.0,
        };
        s.recalculate();
        s
    }

    /// Replace the whole item list. Paging restarts from the first item.
    pub fn set_items(&mut self, items: Vec<DisplayItem>) {
        self.items = items;
        self.anchor_index = 0;
        self.recalculate();
        tracing::debug!(
            carousel = self.carousel_index,
            items = self.items.len(),
            "carousel items replaced"
        );
    }

    /// Viewport resize against the standard breakpoints.
    pub fn resize(&mut self, viewport_width: f64) {
        let viewport_width = sanitize_width(viewport_width);
        let breakpoint = resolve_breakpoint(viewport_width);
        self.apply_breakpoint(viewport_width, breakpoint);
    }

    /// Viewport resize with a breakpoint resolved by the caller (e.g. from a
    /// configured table). The anchor is pulled back in range when the new
    /// page size leaves it past the end.
    pub fn apply_breakpoint(
        &mut self,
        viewport_width: f64,
        breakpoint: Breakpoint,
    ) {
        self.viewport_width = sanitize_width(viewport_width);
        self.breakpoint = breakpoint;
        self.anchor_index = self.anchor_index.min(self.max_anchor());
        self.recalculate();
    }

    /// Refresh the cached item width and ribbon offset from current state.
    pub fn recalculate(&mut self) {
        let bp = self.breakpoint;
        self.cached_item_width = calculate_item_width(
            self.viewport_width,
            bp.container_padding,
            bp.item_gap,
            bp.items_per_page,
            self.items.len() > bp.items_per_page,
        );
        self.cached_translate_x = calculate_translate_x(
            self.anchor_index,
            self.cached_item_width,
            bp.item_gap,
            bp.items_per_page,
            self.items.len(),
            bp.container_padding,
            self.viewport_width,
        );
    }

    // ---- Accessors ----

    /// Caller-assigned position on the page; selects the tab band.
    pub fn carousel_index(&self) -> usize {
        self.carousel_index
    }

    /// Section title.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// All items in ribbon order.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&DisplayItem> {
        self.items.get(index)
    }

    /// First fully visible item.
    pub fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    /// Width the layout was computed for (px).
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Breakpoint in effect.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Fully opaque items per page.
    pub fn items_per_page(&self) -> usize {
        self.breakpoint.items_per_page
    }

    /// Item width (px) as of the last recalculation. May be negative on
    /// very narrow viewports.
    pub fn cached_item_width(&self) -> f64 {
        self.cached_item_width
    }

    /// Ribbon offset (px) as of the last recalculation.
    pub fn cached_translate_x(&self) -> f64 {
        self.cached_translate_x
    }

    /// Cached item width as `"<n>px"`; negative widths render as zero-width.
    pub fn item_width_css(&self) -> String {
        css_px(self.cached_item_width.max(0.0))
    }

    /// Ribbon offset as a CSS transform.
    pub fn transform_css(&self) -> String {
        css_translate_x(self.cached_translate_x)
    }

    /// Custom properties for the current breakpoint.
    pub fn style_vars(&self) -> StyleVars {
        self.breakpoint.style_vars()
    }

    /// Image URL of item `index` for the current viewport.
    pub fn image_url(&self, index: usize) -> Option<&str> {
        self.item(index)
            .map(|item| image_url(item, self.viewport_width))
    }

    // ---- Pagination ----

    /// Largest anchor that still fills a page.
    pub fn max_anchor(&self) -> usize {
        match self.items_per_page() {
            0 => 0,
            per_page => self.items.len().saturating_sub(per_page),
        }
    }

    /// Whether a previous page exists.
    pub fn can_scroll_left(&self) -> bool {
        self.anchor_index > 0
    }

    /// Whether the window can still advance.
    pub fn can_scroll_right(&self) -> bool {
        let per_page = self.items_per_page();
        per_page > 0 && self.anchor_index + per_page < self.items.len()
    }

    /// `ceil(items / items_per_page)`; 0 when nothing can be paged.
    pub fn total_pages(&self) -> usize {
        let per_page = self.items_per_page();
        if self.items.is_empty() || per_page == 0 {
            return 0;
        }
        self.items.len().div_ceil(per_page)
    }

    /// Page the window currently belongs to. The end-aligned window counts as
    /// the last page.
    pub fn current_page(&self) -> usize {
        let total = self.total_pages();
        if total == 0 {
            return 0;
        }
        if !self.can_scroll_right() {
            return total - 1;
        }
        self.anchor_index / self.items_per_page()
    }

    /// Advance one page. The last page snaps to show the final
    /// `items_per_page` items rather than a short trailing page.
    pub fn scroll_right(&mut self) -> bool {
        if !self.can_scroll_right() {
            return false;
        }
        let next_anchor = self.anchor_index + self.items_per_page();
        self.set_anchor_index(next_anchor.min(self.max_anchor()));
        true
    }

    /// Go back one page, stopping at the first item.
    pub fn scroll_left(&mut self) -> bool {
        if !self.can_scroll_left() {
            return false;
        }
        let previous_anchor =
            self.anchor_index.saturating_sub(self.items_per_page());
        self.set_anchor_index(previous_anchor);
        true
    }

    /// Jump to a page in `0..total_pages()`. Anything else is ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= self.total_pages() {
            return false;
        }
        let anchor = page
            .saturating_mul(self.items_per_page())
            .min(self.max_anchor());
        self.set_anchor_index(anchor);
        true
    }

    /// Map a navigation key onto paging. Returns whether the anchor moved.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Left => self.scroll_left(),
            NavKey::Right => self.scroll_right(),
        }
    }

    /// Raw key-name entry point. Only `ArrowLeft`/`ArrowRight` are consumed;
    /// returns `false` for every other key.
    pub fn handle_key_name(&mut self, key: &str) -> bool {
        match NavKey::from_key_name(key) {
            Some(key) => {
                self.handle_key(key);
                true
            }
            None => false,
        }
    }

    /// Move the anchor directly, e.g. to restore a saved position. Values
    /// past the end are clamped to `max_anchor()`.
    pub fn set_anchor_index(&mut self, anchor: usize) {
        let from = self.anchor_index;
        self.anchor_index = anchor.min(self.max_anchor());
        self.recalculate();
        tracing::debug!(
            carousel = self.carousel_index,
            from,
            to = self.anchor_index,
            items_per_page = self.items_per_page(),
            total = self.items.len(),
            "carousel anchor moved"
        );
    }

    // ---- Visible window ----

    /// Indices of the fully opaque items. On the last page the window is
    /// end-aligned regardless of the anchor, matching the right-aligned
    /// geometry. `None` when nothing can be laid out.
    pub fn main_window(&self) -> Option<RangeInclusive<usize>> {
        let count = self.items.len();
        let per_page = self.items_per_page();
        if count == 0 || per_page == 0 {
            return None;
        }
        let start = if self.can_scroll_right() {
            self.anchor_index
        } else {
            count.saturating_sub(per_page)
        };
        let end = (start + per_page - 1).min(count - 1);
        Some(start..=end)
    }

    /// Number of items in [`CarouselLayoutState::main_window`].
    pub fn main_window_len(&self) -> usize {
        self.main_window()
            .map(|window| window.end() - window.start() + 1)
            .unwrap_or(0)
    }

    /// Whether the item at `index` renders dimmed as an edge preview.
    pub fn is_dimmed(&self, index: usize) -> bool {
        let Some(window) = self.main_window() else {
            return false;
        };
        if window.contains(&index) {
            return false;
        }
        if window.start().checked_sub(1) == Some(index) {
            return self.can_scroll_left();
        }
        if index == window.end() + 1 {
            return self.can_scroll_right();
        }
        false
    }

    /// Dimmed item peeking in on the left, if any.
    pub fn left_preview_item(&self) -> Option<&DisplayItem> {
        if !self.can_scroll_left() {
            return None;
        }
        let start = *self.main_window()?.start();
        self.items.get(start.checked_sub(1)?)
    }

    /// Dimmed item peeking in on the right, if any.
    pub fn right_preview_item(&self) -> Option<&DisplayItem> {
        if !self.can_scroll_right() {
            return None;
        }
        let end = *self.main_window()?.end();
        self.items.get(end + 1)
    }
}
