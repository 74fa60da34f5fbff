//! Core data types for the Atelier web-page generation library.
//!
//! This crate provides the foundation data types and pure functions used
//! across the Atelier workspace: generation modes, request/response values,
//! prompt construction, title derivation, and markdown-fence stripping.

mod fence;
mod mode;
pub mod prompt;
mod request;
mod title;

pub use fence::strip_markdown_fence;
pub use mode::GenerationMode;
pub use request::{
    GenerationMetadata, GenerationRequest, GenerationRequestBuilder, GenerationResponse,
};
pub use title::derive_title;
