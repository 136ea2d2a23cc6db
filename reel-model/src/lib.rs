//! Core data model definitions shared across reel crates.
#![allow(missing_docs)]

pub mod error;
pub mod feed;
pub mod image;
pub mod item;

pub use error::{ModelError, Result as ModelResult};
pub use feed::{
    FeedCategory, FeedData, FeedId, FeedItem, FeedPhoto, FeedPhotoType,
    FeedResponse, FeedSection, sections_from_feed,
};
pub use image::{ImageVariant, ImageVariants};
pub use item::{CarouselSection, DisplayItem};
