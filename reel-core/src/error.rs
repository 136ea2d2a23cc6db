//! Error types of the layout engine.

use thiserror::Error;

/// Failures of page-level carousel operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel with this index is already mounted.
    #[error("carousel index {0} is already mounted on this page")]
    DuplicateIndex(usize),

    /// No carousel is mounted at this index.
    #[error("no carousel mounted at index {0}")]
    UnknownCarousel(usize),

    /// The resize settle timer needs a tokio runtime.
    #[error("no tokio runtime available to schedule the resize settle timer")]
    NoRuntime,
}

/// Reasons a list of bands cannot form a [`BreakpointTable`].
///
/// [`BreakpointTable`]: crate::breakpoint::BreakpointTable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakpointTableError {
    /// No bands at all.
    #[error("breakpoint table has no bands")]
    Empty,

    /// The last band carries an upper bound, leaving wide viewports unmatched.
    #[error("the last breakpoint band must be open ended")]
    BoundedLastBand,

    /// A band with an empty page.
    #[error("breakpoint band {band} must show at least one item per page")]
    ZeroItemsPerPage {
        /// Position of the band in the table.
        band: usize,
    },

    /// A page plus both scroll buttons would spill into the next carousel's
    /// tab stops.
    #[error(
        "breakpoint band {band} shows {items_per_page} items; with both scroll buttons that exceeds the {band_size}-stop tab band"
    )]
    TabBandOverflow {
        /// Position of the band in the table.
        band: usize,
        /// Items per page the band asked for.
        items_per_page: usize,
        /// Tab stops each carousel owns.
        band_size: i32,
    },

    /// Padding or gap is negative or not finite.
    #[error(
        "breakpoint band {band} needs finite, non-negative padding and gap"
    )]
    InvalidSpacing {
        /// Position of the band in the table.
        band: usize,
    },

    /// A band before the last one has no finite upper bound.
    #[error("breakpoint band {band} needs a finite upper bound")]
    MissingUpperBound {
        /// Position of the band in the table.
        band: usize,
    },

    /// Bounds do not strictly ascend.
    #[error(
        "breakpoint band {band} bound {below_px} is not above the previous band"
    )]
    UnorderedBreakpoints {
        /// Position of the band in the table.
        band: usize,
        /// The offending bound.
        below_px: f64,
    },
}

/// Result alias for page-level operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
