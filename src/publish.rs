//! Publishing generated images to their destination.

use std::path::PathBuf;

use chrono::Local;
use tracing::debug;

use crate::{error::ImageGenerationError, imagery::EncodedImage};

/// Descriptive fields accompanying a published image.
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    /// The prompt the image was generated from.
    pub prompt: String,
    /// Number of images requested from the provider.
    pub sample_count: u32,
    /// MIME type of the encoded bytes.
    pub mime_type: String,
}

/// Delivers an encoded image to its destination and describes the result.
///
/// The returned string is relayed to the host conversation verbatim: a
/// saved-file confirmation for local deployments, or a markdown image link
/// for deployments that upload to a host endpoint.
#[async_trait::async_trait]
pub trait ImagePublisher: Send + Sync {
    /// Publishes one image and returns the message content describing it.
    async fn publish(
        &self,
        image: &EncodedImage,
        meta: &ImageMetadata,
    ) -> Result<String, ImageGenerationError>;
}

/// Formats a markdown image link for publishers that upload and link.
pub fn markdown_image_link(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// Saves each image into a directory with a timestamp-qualified filename.
///
/// The standalone deployment: one file per call, named
/// `Generated Image {timestamp}.{ext}` with microsecond resolution so
/// repeated calls get distinct names.
#[derive(Debug, Clone)]
pub struct FileSystemPublisher {
    dir: PathBuf,
}

impl FileSystemPublisher {
    /// Creates a publisher writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn next_path(&self, image: &EncodedImage) -> PathBuf {
        let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S-%6f");
        self.dir.join(format!(
            "Generated Image {stamp}.{}",
            image.format().extension()
        ))
    }
}

#[async_trait::async_trait]
impl ImagePublisher for FileSystemPublisher {
    async fn publish(
        &self,
        image: &EncodedImage,
        _meta: &ImageMetadata,
    ) -> Result<String, ImageGenerationError> {
        let path = self.next_path(image);
        tokio::fs::write(&path, image.bytes()).await?;
        debug!(path = %path.display(), "saved generated image");
        Ok(format!("Saved generated image to {}", path.display()))
    }
}
