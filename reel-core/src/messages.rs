//! Input events understood by a carousel page

use reel_model::DisplayItem;

/// Keys that drive paging. Everything else passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Previous page.
    Left,
    /// Next page.
    Right,
}

impl NavKey {
    /// Map a DOM-style key name (`"ArrowLeft"`, `"ArrowRight"`).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Inverse of [`NavKey::from_key_name`].
    pub fn key_name(&self) -> &'static str {
        match self {
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }
}

/// One input event for [`CarouselPage::update`].
///
/// [`CarouselPage::update`]: crate::registry::CarouselPage::update
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    // Navigation
    /// Left chevron of a carousel.
    ScrollLeft(usize),
    /// Right chevron of a carousel.
    ScrollRight(usize),
    /// Jump a carousel (first field) to a page (second field).
    GoToPage(usize, usize),
    /// Routed to the focused carousel, or every carousel when none is.
    Key(NavKey),

    // Focus management
    /// A carousel took keyboard focus.
    Focus(usize),
    /// Keyboard focus left the carousels.
    Blur,
    /// Pointer entered a carousel, or left all of them.
    Hover(Option<usize>),

    // Viewport / content
    /// New viewport width in px.
    Resize(f64),
    /// Replacement item list for a carousel.
    ItemsChanged(usize, Vec<DisplayItem>),
}
