//! The image generation request handler.

use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    client::GenerateImage,
    error::ImageGenerationError,
    event::{EventSink, OutputEvent},
    imagery::{decode_image, encode_image},
    models::{PartContent, Response},
    publish::{ImageMetadata, ImagePublisher},
    settings::Settings,
};

/// Final outcome of one generation request.
///
/// At most one summary is produced per invocation, after every event for
/// that invocation has been emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSummary {
    /// At least one image was produced and published.
    Succeeded,
    /// No image was produced, or the request failed. The reason is a
    /// human-readable sentence intended for the end user.
    Failed(String),
}

impl fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => {
                write!(
                    f,
                    "Notify the user that the image has been successfully generated"
                )
            }
            Self::Failed(reason) => f.write_str(reason),
        }
    }
}

/// Relays one prompt through the generation provider and re-emits the
/// returned parts as host events.
///
/// Holds no state across invocations; concurrent invocations are
/// independent and require no coordination.
#[derive(Debug)]
pub struct ImageGenerationRequestHandler<M, P> {
    model: M,
    publisher: P,
    settings: Settings,
}

impl<M, P> ImageGenerationRequestHandler<M, P>
where
    M: GenerateImage,
    P: ImagePublisher,
{
    /// Creates a handler from its collaborators.
    pub fn new(settings: Settings, model: M, publisher: P) -> Self {
        Self {
            model,
            publisher,
            settings,
        }
    }

    /// Handles one generation request end to end.
    ///
    /// Emits status and message events to `sink` in order and returns
    /// exactly one summary after the last event. Validation failures return
    /// before any event or network call; later failures are converted to a
    /// terminal status event plus a descriptive summary. Nothing
    /// propagates to the caller as an error.
    pub async fn handle(&self, prompt: &Value, sink: &dyn EventSink) -> OutcomeSummary {
        let prompt = match self.validate(prompt) {
            Ok(prompt) => prompt,
            Err(err) => return OutcomeSummary::Failed(err.to_string()),
        };

        sink.emit(OutputEvent::status("Generating an image", false))
            .await;

        match self.run(prompt, sink).await {
            Ok(true) => OutcomeSummary::Succeeded,
            Ok(false) => OutcomeSummary::Failed(
                "Notify the user that the image has not been generated".to_string(),
            ),
            Err(err) => {
                warn!(%err, "image generation failed");
                sink.emit(OutputEvent::status(format!("An error occurred: {err}"), true))
                    .await;
                OutcomeSummary::Failed(format!("Tell the user: {err}"))
            }
        }
    }

    fn validate<'a>(&self, prompt: &'a Value) -> Result<&'a str, ImageGenerationError> {
        if self.settings.api_key.is_empty() {
            return Err(ImageGenerationError::MissingApiKey);
        }
        prompt
            .as_str()
            .ok_or(ImageGenerationError::InvalidPrompt {
                found: json_type_name(prompt),
            })
    }

    async fn run(
        &self,
        prompt: &str,
        sink: &dyn EventSink,
    ) -> Result<bool, ImageGenerationError> {
        let response = self.model.generate(prompt).await?;
        self.relay_parts(prompt, &response, sink).await
    }

    /// Walks the response parts in encounter order and re-emits each one.
    ///
    /// Returns whether any image was produced. A part carrying both text
    /// and an image yields its text events first.
    async fn relay_parts(
        &self,
        prompt: &str,
        response: &Response,
        sink: &dyn EventSink,
    ) -> Result<bool, ImageGenerationError> {
        let mut generated_text: Option<String> = None;
        let mut image_produced = false;

        for part in response.parts() {
            let content = part.content();

            if let PartContent::Text(text) | PartContent::TextAndImage { text, .. } = content {
                // Last one wins; a textless part resets it.
                generated_text = Some(text.to_string());
                sink.emit(OutputEvent::status("Received text with image:.", false))
                    .await;
                sink.emit(OutputEvent::message(text)).await;
            } else {
                generated_text = None;
            }

            if let PartContent::Image(inline) | PartContent::TextAndImage { image: inline, .. } =
                content
            {
                let decoded = decode_image(inline)?;
                let encoded = encode_image(&decoded, self.settings.image_format)?;
                let meta = ImageMetadata {
                    prompt: prompt.to_string(),
                    sample_count: 1,
                    mime_type: encoded.mime_type().to_string(),
                };
                let reference = self.publisher.publish(&encoded, &meta).await?;
                sink.emit(OutputEvent::status("Generated an image", true))
                    .await;
                sink.emit(OutputEvent::message(reference)).await;
                image_produced = true;
            }
        }

        if let Some(text) = generated_text {
            debug!(chars = text.len(), "accompanying text retained");
        }

        Ok(image_produced)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
