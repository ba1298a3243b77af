//! Response models for the generation API.

use serde::Deserialize;

use super::InlineData;

/// A response from the generation API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Metadata about token usage.
    pub usage_metadata: Option<UsageMetadata>,
    /// The version of the model used.
    pub model_version: Option<String>,
}

impl Response {
    /// Parts of the first candidate, in the order the provider produced them.
    ///
    /// A response with no candidates yields an empty slice.
    pub fn parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .map(|candidate| candidate.content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate's text parts.
    pub fn text(&self) -> String {
        self.parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A candidate response from the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate response.
    #[serde(default)]
    pub content: CandidateContent,
    /// The reason why the generation finished.
    pub finish_reason: Option<FinishReason>,
}

/// Content produced by a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContent {
    /// The parts that make up the content.
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    /// Role the provider attributes the content to.
    pub role: Option<String>,
}

/// One unit of a multimodal response.
///
/// Text and inline data are non-exclusive as presented by the provider; use
/// [`ResponsePart::content`] for an exhaustive classification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    /// Text carried by this part, if any.
    pub text: Option<String>,
    /// Inline image payload carried by this part, if any.
    pub inline_data: Option<InlineData>,
}

/// Exhaustive classification of a response part.
#[derive(Debug, Clone, Copy)]
pub enum PartContent<'a> {
    /// Neither text nor image; contributes nothing.
    Empty,
    /// Text only.
    Text(
        /// The text carried by the part
        &'a str,
    ),
    /// Inline image only.
    Image(
        /// The inline payload carried by the part
        &'a InlineData,
    ),
    /// Both text and an inline image in one part.
    TextAndImage {
        /// The text carried by the part
        text: &'a str,
        /// The inline payload carried by the part
        image: &'a InlineData,
    },
}

impl ResponsePart {
    /// Classifies this part. Present-but-empty text counts as absent.
    pub fn content(&self) -> PartContent<'_> {
        let text = self.text.as_deref().filter(|text| !text.is_empty());
        match (text, self.inline_data.as_ref()) {
            (Some(text), Some(image)) => PartContent::TextAndImage { text, image },
            (Some(text), None) => PartContent::Text(text),
            (None, Some(image)) => PartContent::Image(image),
            (None, None) => PartContent::Empty,
        }
    }
}

/// Reason why the generation finished.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Natural stop point of the model or provided stop sequence.
    Stop,
    /// The maximum number of tokens as specified in the request was reached.
    MaxTokens,
    /// The response candidate content was flagged for safety reasons.
    Safety,
    /// The response candidate content was flagged for recitation reasons.
    Recitation,
    /// Any reason this client does not recognize.
    #[serde(other)]
    Other,
}

/// Metadata about token usage in the request and response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: i32,
    /// Number of tokens in the generated candidates.
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens used.
    #[serde(default)]
    pub total_token_count: i32,
}
