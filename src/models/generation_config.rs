//! Generation configuration for content requests.

use serde::{Deserialize, Serialize};

/// An output kind the model may include in its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Plain text output
    Text,
    /// Inline image output
    Image,
}

/// Configuration parameters sent with a generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response modalities to request from the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<Modality>>,
}

impl GenerationConfig {
    /// Requests both text and image output.
    pub fn text_and_image() -> Self {
        Self {
            response_modalities: Some(vec![Modality::Text, Modality::Image]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_modalities_in_wire_casing() {
        let config = GenerationConfig::text_and_image();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({ "responseModalities": ["TEXT", "IMAGE"] })
        );
    }

    #[test]
    fn empty_config_serializes_to_empty_object() {
        let config = GenerationConfig::default();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({})
        );
    }
}
