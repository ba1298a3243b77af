//! Configuration surface for the image generation handler.

use std::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ImageGenerationError;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";

/// Output format generated images are re-encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[default]
    Png,
    /// Graphics Interchange Format
    Gif,
    /// Joint Photographic Experts Group
    Jpeg,
}

impl ImageFormat {
    /// The MIME type matching this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Configuration for one handler instance; immutable during a request.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct Settings {
    /// API key for the generation provider. Must be non-empty at use time.
    #[builder(setter(into))]
    pub api_key: String,

    /// Model identifier (e.g., "gemini-2.0-flash-exp-image-generation")
    #[builder(setter(into), default = String::from(DEFAULT_MODEL))]
    pub model: String,

    /// Format generated images are re-encoded to before publishing
    #[builder(default)]
    pub image_format: ImageFormat,
}

impl Settings {
    /// Creates settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GOOGLE_API_KEY` - The API key for authentication
    ///
    /// # Errors
    ///
    /// Returns an error if the required environment variable is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ImageGenerationError> {
        let api_key = std::env::var("GOOGLE_API_KEY")?;
        Ok(Self::builder().api_key(api_key).model(model).build())
    }
}
