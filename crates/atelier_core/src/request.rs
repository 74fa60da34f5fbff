//! Request and response types for document generation.

use crate::{GenerationMode, derive_title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single generation request: the user's free-text description plus the
/// requested mode. Created per invocation, never mutated.
///
/// # Examples
///
/// ```
/// use atelier_core::{GenerationMode, GenerationRequest};
///
/// let request = GenerationRequest::new("a recipe card", GenerationMode::PlainHtml);
/// assert_eq!(*request.mode(), GenerationMode::PlainHtml);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct GenerationRequest {
    /// The user's description of the page to generate
    prompt: String,
    /// Which document shape to request
    mode: GenerationMode,
}

impl GenerationRequest {
    /// Creates a new request from a description and mode.
    pub fn new(prompt: impl Into<String>, mode: GenerationMode) -> Self {
        Self {
            prompt: prompt.into(),
            mode,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// A successful generation result.
///
/// `content` is the model's raw output. Markdown fencing, when present, is
/// left in place; stripping is the rendering layer's concern (see
/// [`crate::strip_markdown_fence`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationResponse {
    /// Raw model output
    content: String,
    /// Response metadata
    metadata: GenerationMetadata,
}

impl GenerationResponse {
    /// Creates a new response from raw model output and metadata.
    pub fn new(content: impl Into<String>, metadata: GenerationMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// Metadata attached to a successful generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationMetadata {
    /// Instant the response was assembled
    timestamp: DateTime<Utc>,
    /// Echoes the request's mode
    mode: GenerationMode,
    /// Short display title derived from the description
    title: Option<String>,
}

impl GenerationMetadata {
    /// Stamps metadata for a response generated now, deriving the display
    /// title from the request description.
    pub fn stamp(mode: GenerationMode, description: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            mode,
            title: Some(derive_title(description)),
        }
    }
}
