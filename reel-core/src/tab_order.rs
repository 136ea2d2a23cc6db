//! Keyboard tab order across the carousels of a page.
//!
//! Each carousel reserves a band of [`tab::BAND_SIZE`] stops starting at
//! `carousel_index * BAND_SIZE + 1`. Within a band the tabbable stops are the
//! left button (only when it can act), the items of the main window in order,
//! then the right button (only when it can act). Whatever combination is
//! present, the stops form one gapless run starting at the band base.
//!
//! [`tab::BAND_SIZE`]: crate::constants::tab::BAND_SIZE

use crate::constants::tab::{BAND_SIZE, NOT_TABBABLE};
use crate::state::CarouselLayoutState;

/// Element of a carousel that can take keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabTarget {
    /// The scroll-left chevron.
    LeftButton,
    /// The item at this index.
    Item(usize),
    /// The scroll-right chevron.
    RightButton,
}

/// A tabbable element and its tab index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStop {
    /// Element taking focus.
    pub target: TabTarget,
    /// Its position in the page tab order.
    pub tab_index: i32,
}

/// Tab indices for one carousel, computed from a state borrow.
#[derive(Debug, Clone, Copy)]
pub struct TabBand<'a> {
    state: &'a CarouselLayoutState,
}

impl<'a> TabBand<'a> {
    /// Band of `state`'s carousel.
    pub fn of(state: &'a CarouselLayoutState) -> Self {
        Self { state }
    }

    /// First tab index reserved for this carousel.
    pub fn base(&self) -> i32 {
        i32::try_from(self.state.carousel_index())
            .unwrap_or(i32::MAX)
            .saturating_mul(BAND_SIZE)
            .saturating_add(1)
    }

    fn left_offset(&self) -> i32 {
        i32::from(self.state.can_scroll_left())
    }

    /// Tab index of the left chevron, or `-1` on the first page.
    pub fn left_button(&self) -> i32 {
        if self.state.can_scroll_left() {
            self.base()
        } else {
            NOT_TABBABLE
        }
    }

    /// Tab index of an item, or `-1` when it is outside the main window.
    pub fn item(&self, index: usize) -> i32 {
        let Some(window) = self.state.main_window() else {
            return NOT_TABBABLE;
        };
        if !window.contains(&index) {
            return NOT_TABBABLE;
        }
        let position = (index - window.start()) as i32;
        self.base()
            .saturating_add(self.left_offset())
            .saturating_add(position)
    }

    /// Tab index of the right chevron, or `-1` once the window cannot advance.
    pub fn right_button(&self) -> i32 {
        if !self.state.can_scroll_right() {
            return NOT_TABBABLE;
        }
        let window_len = self.state.main_window_len() as i32;
        self.base()
            .saturating_add(self.left_offset())
            .saturating_add(window_len)
    }

    /// Tabbable stops in ascending tab order. Excluded elements are omitted.
    pub fn stops(self) -> impl Iterator<Item = TabStop> + 'a {
        let band = self;
        let left = (band.left_button() != NOT_TABBABLE).then(|| TabStop {
            target: TabTarget::LeftButton,
            tab_index: band.left_button(),
        });
        let items = band.state.main_window().into_iter().flatten().map(
            move |index| TabStop {
                target: TabTarget::Item(index),
                tab_index: band.item(index),
            },
        );
        let right = (band.right_button() != NOT_TABBABLE).then(|| TabStop {
            target: TabTarget::RightButton,
            tab_index: band.right_button(),
        });
        left.into_iter().chain(items).chain(right)
    }
}

impl CarouselLayoutState {
    /// Tab indices of this carousel.
    pub fn tab_band(&self) -> TabBand<'_> {
        TabBand::of(self)
    }

    /// See [`TabBand::left_button`].
    pub fn left_button_tab_index(&self) -> i32 {
        self.tab_band().left_button()
    }

    /// See [`TabBand::item`].
    pub fn item_tab_index(&self, index: usize) -> i32 {
        self.tab_band().item(index)
    }

    /// See [`TabBand::right_button`].
    pub fn right_button_tab_index(&self) -> i32 {
        self.tab_band().right_button()
    }
}
