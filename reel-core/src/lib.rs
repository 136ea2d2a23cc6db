//! Layout engine for horizontally paged media carousels.
//!
//! Given an ordered list of items, a viewport width and an anchor position,
//! the engine decides how many items are on screen, the pixel geometry used to
//! render them (including the dimmed preview items bleeding in from either
//! edge), how paging moves the anchor, and which controls and items are
//! reachable by keyboard when several carousels share a page.
//!
//! Everything here is synchronous and pure over [`CarouselLayoutState`],
//! except the [`ResizeSettle`] timer which needs a tokio runtime.

pub mod breakpoint;
pub mod constants;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod messages;
pub mod registry;
pub mod settle;
pub mod snapshot;
pub mod state;
pub mod tab_order;

pub use breakpoint::{
    Breakpoint, BreakpointBand, BreakpointTable, StyleVars, resolve_breakpoint,
};
pub use error::{BreakpointTableError, CarouselError, Result};
pub use focus::{CarouselFocus, FocusSource};
pub use geometry::{
    calculate_item_width, calculate_translate_x, css_px, css_translate_x,
    image_sizes, image_url, image_variant_for,
};
pub use messages::{CarouselMessage, NavKey};
pub use registry::CarouselPage;
pub use settle::ResizeSettle;
pub use snapshot::{ItemView, LayoutSnapshot};
pub use state::CarouselLayoutState;
pub use tab_order::{TabBand, TabStop, TabTarget};

pub use reel_model::{DisplayItem, ImageVariant, ImageVariants};
