#![deny(missing_docs)]

//! Google Gemini multimodal image generation with host event relay.
//!
//! This library wraps Gemini's `generateContent` endpoint for image
//! generation: it validates locally-held credentials, issues a single
//! request asking for both text and image output, re-emits every returned
//! part to a caller-supplied event sink, publishes returned images through a
//! pluggable publisher, and reports one human-readable outcome per request.

pub mod client;
pub mod error;
pub mod event;
pub mod handler;
pub mod imagery;
pub mod models;
pub mod publish;
pub mod settings;

pub use client::{GenerateImage, ImageModel};
pub use error::ImageGenerationError;
pub use event::{EventSink, OutputEvent};
pub use handler::{ImageGenerationRequestHandler, OutcomeSummary};
pub use imagery::EncodedImage;
pub use publish::{FileSystemPublisher, ImageMetadata, ImagePublisher};
pub use settings::{ImageFormat, Settings, DEFAULT_MODEL};
