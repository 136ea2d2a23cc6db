//! Serializable render output for one carousel.

use serde::Serialize;

use crate::breakpoint::StyleVars;
use crate::state::CarouselLayoutState;

/// Everything a renderer needs for one item of the ribbon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct ItemView {
    pub index: usize,
    pub id: String,
    pub heading: String,
    pub canonical_url: String,
    /// Rendition picked for the current viewport.
    pub image_url: String,
    /// Edge preview rendered at reduced opacity.
    pub is_dimmed: bool,
    /// `-1` outside the main window.
    pub tab_index: i32,
}

/// Render state of one carousel at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct LayoutSnapshot {
    pub carousel_index: usize,
    pub header: String,
    pub viewport_width: f64,
    pub anchor_index: usize,
    pub items_per_page: usize,
    /// Item width as a CSS length, e.g. `"180.5px"`.
    pub item_width: String,
    /// Ribbon transform, e.g. `"translateX(-420px)"`.
    pub transform: String,
    pub style_vars: StyleVars,
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub total_pages: usize,
    pub current_page: usize,
    pub left_button_tab_index: i32,
    pub right_button_tab_index: i32,
    pub items: Vec<ItemView>,
}

impl CarouselLayoutState {
    /// Capture the current layout for rendering.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let band = self.tab_band();
        let items = self
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                index,
                id: item.id.clone(),
                heading: item.heading.clone(),
                canonical_url: item.canonical_url.clone(),
                image_url: self
                    .image_url(index)
                    .unwrap_or_default()
                    .to_owned(),
                is_dimmed: self.is_dimmed(index),
                tab_index: band.item(index),
            })
            .collect();

        LayoutSnapshot {
            carousel_index: self.carousel_index(),
            header: self.header().to_owned(),
            viewport_width: self.viewport_width(),
            anchor_index: self.anchor_index(),
            items_per_page: self.items_per_page(),
            item_width: self.item_width_css(),
            transform: self.transform_css(),
            style_vars: self.style_vars(),
            can_scroll_left: self.can_scroll_left(),
            can_scroll_right: self.can_scroll_right(),
            total_pages: self.total_pages(),
            current_page: self.current_page(),
            left_button_tab_index: band.left_button(),
            right_button_tab_index: band.right_button(),
            items,
        }
    }
}
