use std::fmt::{Display, Formatter};

use crate::error::{ModelError, Result};

/// Portrait image renditions a carousel item can be shown with (2:3 ratio).
///
/// The upstream feed publishes renditions keyed by a numeric photo type; only
/// the two used by the carousel are modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageVariant {
    /// 180px width - phone and tablet layouts
    Small,
    /// 400px width - desktop layouts
    #[default]
    Large,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 2] = [Self::Small, Self::Large];

    /// Upstream photo type key for this rendition
    pub const fn photo_type(&self) -> &'static str {
        match self {
            Self::Small => "60",
            Self::Large => "80",
        }
    }

    /// Get the pixel dimensions for this rendition (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Small => (180, 270),
            Self::Large => (400, 600),
        }
    }

    pub const fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// Parse from the upstream photo type key
    pub fn from_photo_type(photo_type: &str) -> Result<Self> {
        match photo_type {
            "60" => Ok(Self::Small),
            "80" => Ok(Self::Large),
            other => Err(ModelError::UnknownPhotoType(other.to_string())),
        }
    }
}

impl Display for ImageVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.width())
    }
}

/// URLs of both renditions of one item image. Either may be empty when the
/// feed did not carry that rendition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageVariants {
    pub small: String,
    pub large: String,
}

impl ImageVariants {
    pub fn new(small: impl Into<String>, large: impl Into<String>) -> Self {
        Self {
            small: small.into(),
            large: large.into(),
        }
    }

    pub fn url(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Small => &self.small,
            ImageVariant::Large => &self.large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_type_keys_map_back_to_variants() {
        for variant in ImageVariant::ALL {
            assert_eq!(
                ImageVariant::from_photo_type(variant.photo_type()),
                Ok(variant)
            );
        }
        assert_eq!(
            ImageVariant::from_photo_type("70"),
            Err(ModelError::UnknownPhotoType("70".into()))
        );
    }

    #[test]
    fn display_uses_rendition_width() {
        assert_eq!(ImageVariant::Small.to_string(), "180px");
        assert_eq!(ImageVariant::Large.to_string(), "400px");
    }
}
