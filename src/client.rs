//! Client implementation for the generation API.

use tracing::debug;

use crate::{
    error::ImageGenerationError,
    models::{GenerationConfig, Request, RequestType, Response},
    settings::Settings,
};

/// Default API endpoint for Google's Generative AI service
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";

/// Issues one generation request on behalf of the handler.
///
/// A single attempt per call; no retry and no timeout beyond the underlying
/// client defaults. Cancellation is dropping the returned future.
#[async_trait::async_trait]
pub trait GenerateImage: Send + Sync {
    /// Requests text and image generation for the prompt.
    async fn generate(&self, prompt: &str) -> Result<Response, ImageGenerationError>;
}

/// A client for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct ImageModel {
    settings: Settings,
    base_url: String,
    client: reqwest::Client,
}

impl ImageModel {
    /// Creates a new client with the specified settings.
    ///
    /// # Arguments
    ///
    /// * `settings` - Credentials and model selection for the provider
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the API endpoint, for proxies and tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_url(&self, request_type: RequestType) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            self.base_url,
            DEFAULT_API_VERSION,
            self.settings.model,
            request_type,
            self.settings.api_key
        )
    }

    /// Sends the request and checks the transport-level outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the provider responds with a
    /// non-success status; the response body is forwarded verbatim.
    async fn make_request(
        &self,
        url: &str,
        request: Request,
    ) -> Result<reqwest::Response, ImageGenerationError> {
        let response = self.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageGenerationError::Api { status, body });
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl GenerateImage for ImageModel {
    async fn generate(&self, prompt: &str) -> Result<Response, ImageGenerationError> {
        let request = Request::with_prompt(prompt)
            .with_generation_config(GenerationConfig::text_and_image());
        let url = self.build_url(RequestType::GenerateContent);
        debug!(model = %self.settings.model, "dispatching generateContent request");
        Ok(self.make_request(&url, request).await?.json().await?)
    }
}
