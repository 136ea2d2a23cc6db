//! All carousels of one page, keyed by their caller-assigned index.

use std::collections::BTreeMap;

use reel_model::DisplayItem;
use tokio::sync::watch;

use crate::breakpoint::{Breakpoint, BreakpointTable, StyleVars};
use crate::error::{CarouselError, Result};
use crate::focus::CarouselFocus;
use crate::geometry::sanitize_width;
use crate::messages::{CarouselMessage, NavKey};
use crate::settle::ResizeSettle;
use crate::snapshot::LayoutSnapshot;
use crate::state::CarouselLayoutState;
use crate::tab_order::TabStop;

/// The carousels of one page plus the state they share: viewport,
/// breakpoint, focus and the resize settle flag.
#[derive(Debug)]
pub struct CarouselPage {
    carousels: BTreeMap<usize, CarouselLayoutState>,
    breakpoints: BreakpointTable,
    viewport_width: f64,
    breakpoint: Breakpoint,
    focus: CarouselFocus,
    settle: ResizeSettle,
}

impl CarouselPage {
    /// Page laid out with the standard breakpoints and settle window.
    pub fn new(viewport_width: f64) -> Self {
        Self::with_config(
            viewport_width,
            BreakpointTable::standard(),
            ResizeSettle::default(),
        )
    }

    /// Page with a custom breakpoint table and settle timer.
    pub fn with_config(
        viewport_width: f64,
        breakpoints: BreakpointTable,
        settle: ResizeSettle,
    ) -> Self {
        let viewport_width = sanitize_width(viewport_width);
        let breakpoint = breakpoints.resolve(viewport_width);
        Self {
            carousels: BTreeMap::new(),
            breakpoints,
            viewport_width,
            breakpoint,
            focus: CarouselFocus::new(),
            settle,
        }
    }

    // ---- Lifecycle ----

    /// Add an empty carousel laid out for the current viewport.
    pub fn mount(
        &mut self,
        carousel_index: usize,
        header: impl Into<String>,
    ) -> Result<&mut CarouselLayoutState> {
        if self.carousels.contains_key(&carousel_index) {
            return Err(CarouselError::DuplicateIndex(carousel_index));
        }
        let state = CarouselLayoutState::with_breakpoint(
            carousel_index,
            header,
            self.viewport_width,
            self.breakpoint,
        );
        tracing::debug!(carousel = carousel_index, "carousel mounted");
        Ok(self.carousels.entry(carousel_index).or_insert(state))
    }

    /// Remove a carousel, dropping any focus it held.
    pub fn unmount(
        &mut self,
        carousel_index: usize,
    ) -> Result<CarouselLayoutState> {
        let state = self
            .carousels
            .remove(&carousel_index)
            .ok_or(CarouselError::UnknownCarousel(carousel_index))?;
        self.focus.forget(carousel_index);
        tracing::debug!(carousel = carousel_index, "carousel unmounted");
        Ok(state)
    }

    /// Replace a carousel's items; its anchor restarts at 0.
    pub fn set_items(
        &mut self,
        carousel_index: usize,
        items: Vec<DisplayItem>,
    ) -> Result<()> {
        self.require_mut(carousel_index)?.set_items(items);
        Ok(())
    }

    // ---- Accessors ----

    /// Carousel at `carousel_index`, if mounted.
    pub fn get(&self, carousel_index: usize) -> Option<&CarouselLayoutState> {
        self.carousels.get(&carousel_index)
    }

    /// Mutable access to a mounted carousel.
    pub fn get_mut(
        &mut self,
        carousel_index: usize,
    ) -> Option<&mut CarouselLayoutState> {
        self.carousels.get_mut(&carousel_index)
    }

    fn require_mut(
        &mut self,
        carousel_index: usize,
    ) -> Result<&mut CarouselLayoutState> {
        self.carousels
            .get_mut(&carousel_index)
            .ok_or(CarouselError::UnknownCarousel(carousel_index))
    }

    /// Mounted carousels in index order.
    pub fn carousels(&self) -> impl Iterator<Item = &CarouselLayoutState> {
        self.carousels.values()
    }

    /// Number of mounted carousels.
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    /// Whether no carousel is mounted.
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Current viewport width (px), already sanitized.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Breakpoint resolved for the current width.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Table breakpoints are resolved against.
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Page-level custom properties for the current breakpoint.
    pub fn style_vars(&self) -> StyleVars {
        self.breakpoint.style_vars()
    }

    /// Current hover and keyboard focus.
    pub fn focus(&self) -> &CarouselFocus {
        &self.focus
    }

    // ---- Viewport ----

    /// Resolve the breakpoint once for the new width, push it into every
    /// carousel and restart the resize settle window.
    pub fn resize(&mut self, viewport_width: f64) {
        let viewport_width = sanitize_width(viewport_width);
        let breakpoint = self.breakpoints.resolve(viewport_width);
        if breakpoint != self.breakpoint {
            tracing::debug!(
                viewport_width,
                items_per_page = breakpoint.items_per_page,
                "breakpoint changed"
            );
        }
        self.viewport_width = viewport_width;
        self.breakpoint = breakpoint;
        for state in self.carousels.values_mut() {
            state.apply_breakpoint(viewport_width, breakpoint);
        }

        if let Err(err) = self.settle.trigger() {
            tracing::warn!("resize settle not scheduled: {err}");
        }
    }

    /// Whether a resize happened within the settle window.
    pub fn is_resizing(&self) -> bool {
        self.settle.is_resizing()
    }

    /// Receiver for resizing flag transitions.
    pub fn subscribe_resizing(&self) -> watch::Receiver<bool> {
        self.settle.subscribe()
    }

    // ---- Navigation ----

    /// Previous page of one carousel. `Ok(false)` when already at the start.
    pub fn scroll_left(&mut self, carousel_index: usize) -> Result<bool> {
        Ok(self.require_mut(carousel_index)?.scroll_left())
    }

    /// Next page of one carousel. `Ok(false)` when already at the end.
    pub fn scroll_right(&mut self, carousel_index: usize) -> Result<bool> {
        Ok(self.require_mut(carousel_index)?.scroll_right())
    }

    /// See [`CarouselLayoutState::go_to_page`].
    pub fn go_to_page(
        &mut self,
        carousel_index: usize,
        page: usize,
    ) -> Result<bool> {
        Ok(self.require_mut(carousel_index)?.go_to_page(page))
    }

    /// Route a navigation key to the focused carousel, or to every carousel
    /// when none has focus. Returns whether any anchor moved.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if let Some(active) = self.focus.active()
            && let Some(state) = self.carousels.get_mut(&active)
        {
            return state.handle_key(key);
        }

        let mut moved = false;
        for state in self.carousels.values_mut() {
            moved |= state.handle_key(key);
        }
        moved
    }

    /// Raw key-name entry point; `true` when the key was consumed.
    pub fn handle_key_name(&mut self, key: &str) -> bool {
        match NavKey::from_key_name(key) {
            Some(key) => {
                self.handle_key(key);
                true
            }
            None => false,
        }
    }

    // ---- Focus ----

    /// Give a mounted carousel keyboard focus.
    pub fn focus_carousel(&mut self, carousel_index: usize) -> Result<()> {
        if !self.carousels.contains_key(&carousel_index) {
            return Err(CarouselError::UnknownCarousel(carousel_index));
        }
        self.focus.set_keyboard_active(Some(carousel_index));
        Ok(())
    }

    /// Pointer over a carousel (`Some`) or off all of them (`None`). Unknown
    /// indices count as `None`.
    pub fn hover(&mut self, carousel_index: Option<usize>) {
        let carousel_index =
            carousel_index.filter(|index| self.carousels.contains_key(index));
        self.focus.set_hovered(carousel_index);
    }

    /// Clear hover and keyboard focus; keys broadcast again.
    pub fn blur(&mut self) {
        self.focus.clear_all();
    }

    // ---- Output ----

    /// Snapshot of every carousel in index order.
    pub fn snapshots(&self) -> Vec<LayoutSnapshot> {
        self.carousels.values().map(|state| state.snapshot()).collect()
    }

    /// Tab stops of every carousel, in page tab order.
    pub fn tab_order(&self) -> Vec<(usize, TabStop)> {
        self.carousels
            .iter()
            .flat_map(|(&index, state)| {
                state.tab_band().stops().map(move |stop| (index, stop))
            })
            .collect()
    }

    /// Apply one input event. Returns whether any carousel changed.
    pub fn update(&mut self, message: CarouselMessage) -> Result<bool> {
        match message {
            CarouselMessage::ScrollLeft(index) => self.scroll_left(index),
            CarouselMessage::ScrollRight(index) => self.scroll_right(index),
            CarouselMessage::GoToPage(index, page) => {
                self.go_to_page(index, page)
            }
            CarouselMessage::Key(key) => Ok(self.handle_key(key)),
            CarouselMessage::Focus(index) => {
                self.focus_carousel(index)?;
                Ok(false)
            }
            CarouselMessage::Blur => {
                self.blur();
                Ok(false)
            }
            CarouselMessage::Hover(index) => {
                self.hover(index);
                Ok(false)
            }
            CarouselMessage::Resize(width) => {
                self.resize(width);
                Ok(true)
            }
            CarouselMessage::ItemsChanged(index, items) => {
                self.set_items(index, items)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::BreakpointBand;
    use crate::constants::tab;
    use reel_model::ImageVariants;
    use std::time::Duration;

    fn items(n: usize) -> Vec<DisplayItem> {
        (0..n)
            .map(|i| {
                let images = ImageVariants::default();
                DisplayItem::new(i.to_string(), "", "", images)
            })
            .collect()
    }

    fn page_with(counts: &[usize]) -> CarouselPage {
        let mut page = CarouselPage::new(800.0);
        for (index, &n) in counts.iter().enumerate() {
            page.mount(index, format!("Row {index}")).unwrap();
            page.set_items(index, items(n)).unwrap();
        }
        page
    }

    #[test]
    fn duplicate_and_unknown_indices_are_errors() {
        let mut page = page_with(&[4]);
        assert_eq!(
            page.mount(0, "again").map(|_| ()),
            Err(CarouselError::DuplicateIndex(0))
        );
        assert_eq!(
            page.set_items(3, items(1)),
            Err(CarouselError::UnknownCarousel(3))
        );
        assert!(page.unmount(0).is_ok());
        assert!(matches!(
            page.unmount(0),
            Err(CarouselError::UnknownCarousel(0))
        ));
    }

    #[test]
    fn unfocused_keys_broadcast_to_every_carousel() {
        let mut page = page_with(&[8, 8]);
        assert!(page.handle_key_name("ArrowRight"));
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(3));
        assert_eq!(page.get(1).map(|s| s.anchor_index()), Some(3));
    }

    #[test]
    fn focused_carousel_receives_keys_alone() {
        let mut page = page_with(&[8, 8]);
        page.focus_carousel(1).unwrap();
        page.handle_key(NavKey::Right);
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(0));
        assert_eq!(page.get(1).map(|s| s.anchor_index()), Some(3));

        page.hover(Some(0));
        page.handle_key(NavKey::Right);
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(3));

        page.blur();
        page.handle_key(NavKey::Left);
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(0));
        assert_eq!(page.get(1).map(|s| s.anchor_index()), Some(0));
    }

    #[test]
    fn unmounting_the_focused_carousel_restores_broadcast() {
        let mut page = page_with(&[8, 8, 8]);
        page.focus_carousel(1).unwrap();
        page.unmount(1).unwrap();
        page.handle_key(NavKey::Right);
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(3));
        assert_eq!(page.get(2).map(|s| s.anchor_index()), Some(3));
    }

    #[test]
    fn tab_order_is_banded_per_carousel() {
        let page = page_with(&[5, 2]);
        let order: Vec<(usize, i32)> = page
            .tab_order()
            .into_iter()
            .map(|(index, stop)| (index, stop.tab_index))
            .collect();
        assert_eq!(
            order,
            vec![(0, 1), (0, 2), (0, 3), (0, 4), (1, 11), (1, 12)]
        );
    }

    #[test]
    fn widest_allowed_page_keeps_tab_bands_apart() {
        let widest = Breakpoint::new(tab::MAX_ITEMS_PER_PAGE, 0.0, 0.0);
        let table = BreakpointTable::new(vec![BreakpointBand::open(widest)])
            .unwrap();
        let mut page =
            CarouselPage::with_config(1000.0, table, ResizeSettle::default());
        for index in 0..2 {
            page.mount(index, "Row").unwrap();
            page.set_items(index, items(20)).unwrap();
        }
        page.scroll_right(0).unwrap();

        let order = page.tab_order();
        let first: Vec<i32> = order
            .iter()
            .filter(|(index, _)| *index == 0)
            .map(|(_, stop)| stop.tab_index)
            .collect();
        assert_eq!(first, (1..=10).collect::<Vec<_>>());
        assert!(
            order
                .windows(2)
                .all(|pair| pair[0].1.tab_index < pair[1].1.tab_index)
        );
        assert_eq!(order.last().map(|(_, stop)| stop.tab_index), Some(19));
    }

    #[tokio::test(start_paused = true)]
    async fn resize_updates_every_carousel_and_raises_the_flag() {
        let mut page = page_with(&[10, 3]);
        page.resize(2000.0);
        assert!(page.is_resizing());
        assert_eq!(page.breakpoint().items_per_page, 7);
        for state in page.carousels() {
            assert_eq!(state.items_per_page(), 7);
            assert_eq!(state.viewport_width(), 2000.0);
        }
        assert_eq!(page.style_vars().nr_of_items, 7);

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert!(!page.is_resizing());
    }

    #[test]
    fn resize_without_runtime_still_relayouts() {
        let mut page = page_with(&[10]);
        page.resize(500.0);
        assert!(!page.is_resizing());
        assert_eq!(page.get(0).map(|s| s.items_per_page()), Some(2));
    }

    #[test]
    fn resize_on_a_runtime_without_timers_still_relayouts() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(async {
            let mut page = page_with(&[10]);
            page.resize(1000.0);
            assert_eq!(page.breakpoint().items_per_page, 4);
            assert_eq!(page.get(0).map(|s| s.items_per_page()), Some(4));
        });
    }

    #[tokio::test(start_paused = true)]
    async fn resizing_subscribers_see_raise_and_settle() {
        let mut page = page_with(&[4]);
        let mut rx = page.subscribe_resizing();
        assert!(!*rx.borrow_and_update());

        page.resize(1300.0);
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());

        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
        assert!(!page.is_resizing());
    }

    #[test]
    fn update_dispatches_messages() {
        let mut page = page_with(&[8]);
        assert_eq!(page.update(CarouselMessage::ScrollRight(0)), Ok(true));
        assert_eq!(page.update(CarouselMessage::GoToPage(0, 2)), Ok(true));
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(5));
        assert_eq!(page.update(CarouselMessage::ScrollRight(0)), Ok(false));
        assert_eq!(
            page.update(CarouselMessage::ScrollLeft(9)),
            Err(CarouselError::UnknownCarousel(9))
        );
        assert_eq!(
            page.update(CarouselMessage::ItemsChanged(0, items(2))),
            Ok(true)
        );
        assert_eq!(page.get(0).map(|s| s.anchor_index()), Some(0));
    }
}
