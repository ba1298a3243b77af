//! HTTP-level behavior of the generation client.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use gemini_image_gen::{
    EventSink, FileSystemPublisher, GenerateImage, ImageGenerationError,
    ImageGenerationRequestHandler, ImageModel, OutcomeSummary, OutputEvent, Settings,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> Settings {
    Settings::builder().api_key("test-api-key").build()
}

fn png_base64() -> String {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        3,
        5,
        image::Rgba([12, 200, 80, 255]),
    ))
    .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
    .unwrap();
    STANDARD.encode(bytes)
}

#[tokio::test]
async fn sends_the_prompt_requesting_both_modalities() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent",
        ))
        .and(query_param("key", "test-api-key"))
        .and(body_json(json!({
            "contents": [{ "parts": [{ "text": "a flying pig" }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Here is your pig." }], "role": "model" },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 5,
                "candidatesTokenCount": 7,
                "totalTokenCount": 12
            },
            "modelVersion": "gemini-2.0-flash-exp-image-generation"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model = ImageModel::new(settings()).with_base_url(server.uri());

    let response = model.generate("a flying pig").await.unwrap();
    assert_eq!(response.parts().len(), 1);
    assert_eq!(response.text(), "Here is your pig.");
}

#[tokio::test]
async fn surfaces_provider_rejections_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let model = ImageModel::new(settings()).with_base_url(server.uri());

    match model.generate("a flying pig").await {
        Err(ImageGenerationError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 429);
            assert_eq!(body, "quota exhausted");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let model = ImageModel::new(settings()).with_base_url(server.uri());

    assert!(model.generate("a flying pig").await.is_err());
}

/// Sink that records every event in emission order.
#[derive(Default)]
struct CollectingSink {
    events: std::sync::Mutex<Vec<OutputEvent>>,
}

#[async_trait::async_trait]
impl EventSink for CollectingSink {
    async fn emit(&self, event: OutputEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[tokio::test]
async fn generates_and_saves_an_image_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "A green rectangle, as requested." },
                        { "inlineData": { "mimeType": "image/png", "data": png_base64() } }
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let settings = settings();
    let model = ImageModel::new(settings.clone()).with_base_url(server.uri());
    let handler =
        ImageGenerationRequestHandler::new(settings, model, FileSystemPublisher::new(dir.path()));

    let sink = CollectingSink::default();
    let outcome = handler
        .handle(&Value::String("a green rectangle".into()), &sink)
        .await;

    assert_eq!(outcome, OutcomeSummary::Succeeded);

    let saved: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);

    let decoded = image::open(&saved[0]).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 5);

    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[0],
        OutputEvent::status("Generating an image", false)
    );
    assert!(matches!(
        &events[3],
        OutputEvent::Status { done: true, .. }
    ));
}
