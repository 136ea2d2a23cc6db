//! Upstream front-page feed shapes and their mapping into carousel sections.
//!
//! Only the fields the carousel consumes are modelled. Decoding is left to the
//! caller (with the `serde` feature these types deserialize straight from the
//! upstream JSON, whose keys are camelCase); this module only normalises the
//! decoded data, filling in the defaults the page expects.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::image::{ImageVariant, ImageVariants};
use crate::item::{CarouselSection, DisplayItem};

const UNTITLED_HEADING: &str = "Untitled";

/// Upstream item ids are numeric, but some feeds send them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FeedId {
    Number(i64),
    Text(String),
}

impl Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedId::Number(id) => write!(f, "{id}"),
            FeedId::Text(id) => f.write_str(id),
        }
    }
}

/// Front-page response envelope; the sections live under
/// `data.category.frontPage`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FeedResponse {
    pub api_version: Option<String>,
    pub data: FeedData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeedData {
    pub category: FeedCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FeedCategory {
    pub name: Option<String>,
    pub front_page: Vec<FeedSection>,
}

impl FeedResponse {
    pub fn front_page(&self) -> &[FeedSection] {
        &self.data.category.front_page
    }

    pub fn sections(&self) -> Vec<CarouselSection> {
        sections_from_feed(self.front_page())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FeedSection {
    pub header: Option<String>,
    pub high_timeline: Option<bool>,
    pub data: Vec<FeedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FeedItem {
    pub id: Option<FeedId>,
    pub heading: Option<String>,
    pub canonical_url: Option<String>,
    pub vertical_photos: Vec<FeedPhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FeedPhoto {
    pub photo_types: HashMap<String, FeedPhotoType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeedPhotoType {
    pub url: String,
    pub w: Option<u32>,
    pub h: Option<u32>,
}

impl FeedPhoto {
    fn url(&self, variant: ImageVariant) -> Option<&str> {
        self.photo_types
            .get(variant.photo_type())
            .map(|photo_type| photo_type.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

impl FeedItem {
    /// Normalise into a display item. `position` is the item's index within
    /// its section and only used to synthesise a missing id.
    pub fn to_display_item(&self, position: usize) -> DisplayItem {
        let id = self
            .id
            .as_ref()
            .map(ToString::to_string)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("item-{position}"));
        let heading = self
            .heading
            .as_deref()
            .filter(|heading| !heading.is_empty())
            .unwrap_or(UNTITLED_HEADING);
        let canonical_url = self.canonical_url.clone().unwrap_or_default();

        let photo = self.vertical_photos.first();
        let pick = |variant| {
            photo
                .and_then(|photo| photo.url(variant))
                .unwrap_or_default()
                .to_string()
        };

        DisplayItem {
            id,
            heading: heading.to_string(),
            canonical_url,
            images: ImageVariants {
                small: pick(ImageVariant::Small),
                large: pick(ImageVariant::Large),
            },
        }
    }
}

/// Map the front-page feed into the carousels shown on the page.
///
/// Sections explicitly flagged `highTimeline: false` are skipped; the rest are
/// numbered in order after filtering.
pub fn sections_from_feed(sections: &[FeedSection]) -> Vec<CarouselSection> {
    sections
        .iter()
        .filter(|section| section.high_timeline != Some(false))
        .enumerate()
        .map(|(n, section)| CarouselSection {
            id: format!("carousel-{n}"),
            header: section
                .header
                .clone()
                .filter(|header| !header.is_empty())
                .unwrap_or_else(|| format!("Carousel {}", n + 1)),
            items: section
                .data
                .iter()
                .enumerate()
                .map(|(i, item)| item.to_display_item(i))
                .collect(),
        })
        .collect()
}
