//! Standalone command-line exerciser for the image generation client.
//!
//! Reads `GOOGLE_API_KEY` from the environment (a `.env` file works), sends
//! one prompt to the default image generation model, prints any returned
//! text, and saves any returned image into the working directory.

use anyhow::Result;
use gemini_image_gen::{
    EventSink, FileSystemPublisher, ImageGenerationRequestHandler, ImageModel, OutputEvent,
    Settings, DEFAULT_MODEL,
};
use serde_json::Value;

const DEFAULT_PROMPT: &str = "Hi, can you create a 3d rendered image of a pig \
                              with wings and a top hat flying over a happy \
                              futuristic scifi city with lots of greenery";

/// Prints events the way a host conversation would render them.
struct StdoutSink;

#[async_trait::async_trait]
impl EventSink for StdoutSink {
    async fn emit(&self, event: OutputEvent) {
        match event {
            OutputEvent::Status { description, done } => {
                let marker = if done { "done" } else { "...." };
                println!("[{marker}] {description}");
            }
            OutputEvent::Message { content } => println!("{content}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let settings = Settings::from_env(DEFAULT_MODEL)?;
    let model = ImageModel::new(settings.clone());
    let handler =
        ImageGenerationRequestHandler::new(settings, model, FileSystemPublisher::new("."));

    let outcome = handler.handle(&Value::String(prompt), &StdoutSink).await;
    println!("{outcome}");

    Ok(())
}
