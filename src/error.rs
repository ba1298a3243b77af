//! Error types for the image generation client.

use thiserror::Error;

/// Errors that can occur while generating or publishing an image.
///
/// Every variant renders to a human-readable sentence; the handler relays
/// that sentence to the end user instead of letting the error propagate.
#[derive(Debug, Error)]
pub enum ImageGenerationError {
    /// The API key setting is empty.
    #[error("Error: API key is missing. Please configure it in the tool settings.")]
    MissingApiKey,

    /// The prompt received from the host is not a string.
    #[error("Prompt must be a string, got {found}")]
    InvalidPrompt {
        /// JSON type of the rejected value
        found: &'static str,
    },

    /// The provider rejected the request.
    #[error("Request failed with status {status}: {body}")]
    Api {
        /// HTTP status returned by the provider
        status: reqwest::StatusCode,
        /// Response body, forwarded verbatim
        body: String,
    },

    /// Error occurred during an API request.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred when accessing environment variables.
    #[error("Environment variable not found: {0}")]
    Env(#[from] std::env::VarError),

    /// The inline image payload is not valid base64.
    #[error("Invalid image payload: {0}")]
    Payload(#[from] base64::DecodeError),

    /// The image could not be decoded or re-encoded.
    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    /// The image could not be written to its destination.
    #[error("Failed to store image: {0}")]
    Io(#[from] std::io::Error),

    /// An image publisher failed to deliver the image.
    #[error("Image upload failed: {0}")]
    Publish(String),
}
