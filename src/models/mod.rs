//! Data structures for the generation API requests and responses.

mod generation_config;
mod part;
mod request;
mod request_type;
mod response;

pub use generation_config::{GenerationConfig, Modality};
pub use part::{InlineData, Part};
pub use request::{Content, Request, Role};
pub use request_type::RequestType;
pub use response::{
    Candidate, CandidateContent, FinishReason, PartContent, Response, ResponsePart, UsageMetadata,
};
