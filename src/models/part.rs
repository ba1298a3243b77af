//! Common part model used in requests.

use serde::{Deserialize, Serialize};

/// One unit of request content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
    },
    /// A part containing inline binary data
    InlineData {
        /// The inline data content of the part
        inline_data: InlineData,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Inline binary content, carried as base64 text on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The MIME type of the inline data
    pub mime_type: String,
    /// Base64-encoded payload
    pub data: String,
}
