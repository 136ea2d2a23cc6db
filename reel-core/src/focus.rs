//! Page-level carousel focus
//!
//! Tracks which carousel on a page should receive keyboard navigation based
//! on hover state and explicit focus.

/// Input that last moved the focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSource {
    /// Nothing focused yet, or focus was cleared.
    #[default]
    None,
    /// Pointer hover.
    Mouse,
    /// Element focus or an explicit focus request.
    Keyboard,
}

/// Focus state for every carousel on one page, keyed by carousel index.
///
/// Resolution order for the keyboard target:
/// 1. `hovered` - the carousel under the pointer takes priority
/// 2. `keyboard_active` - explicit focus (element focus, chevron press)
/// 3. No target: callers fall back to broadcasting
#[derive(Debug, Default, Clone)]
pub struct CarouselFocus {
    /// Carousel currently under the pointer.
    pub hovered: Option<usize>,

    /// Carousel that keeps keyboard focus while nothing is hovered.
    pub keyboard_active: Option<usize>,

    /// Which input source last set a focus target.
    pub last_source: FocusSource,
}

impl CarouselFocus {
    /// No hover, no keyboard focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered (`Some`) or left (`None`) a carousel.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
        if index.is_some() {
            self.last_source = FocusSource::Mouse;
        }
    }

    /// Give (`Some`) or take (`None`) explicit keyboard focus.
    pub fn set_keyboard_active(&mut self, index: Option<usize>) {
        self.keyboard_active = index;
        self.last_source = FocusSource::Keyboard;
    }

    /// Carousel that should receive the next navigation key, if any.
    pub fn active(&self) -> Option<usize> {
        self.hovered.or(self.keyboard_active)
    }

    /// Pointer left the page.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Blur: forget hover and keyboard focus.
    pub fn clear_all(&mut self) {
        self.hovered = None;
        self.keyboard_active = None;
        self.last_source = FocusSource::None;
    }

    /// Drop any reference to a carousel that left the page.
    pub fn forget(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        if self.keyboard_active == Some(index) {
            self.keyboard_active = None;
        }
        if self.hovered.is_none() && self.keyboard_active.is_none() {
            self.last_source = FocusSource::None;
        }
    }
}
