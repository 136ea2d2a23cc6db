use crate::image::ImageVariants;

/// One unit of carousel content.
///
/// Items are never mutated by the layout engine; it only ever works with
/// indices into an ordered list of them. Duplicate ids are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayItem {
    pub id: String,
    pub heading: String,
    pub canonical_url: String,
    pub images: ImageVariants,
}

impl DisplayItem {
    pub fn new(
        id: impl Into<String>,
        heading: impl Into<String>,
        canonical_url: impl Into<String>,
        images: ImageVariants,
    ) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            canonical_url: canonical_url.into(),
            images,
        }
    }
}

/// A titled, ordered list of items rendered as one carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSection {
    pub id: String,
    pub header: String,
    pub items: Vec<DisplayItem>,
}
