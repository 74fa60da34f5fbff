//! Caller-side generation state and gating.

use crate::GenerationEngine;
use atelier_core::{GenerationMode, GenerationRequest};
use atelier_error::{EngineError, EngineErrorKind};
use atelier_interface::{LanguageBackend, ModelAvailability};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Error shape surfaced verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DisplayedError {
    /// Short title
    title: String,
    /// Plain-language message
    message: String,
    /// Actionable next step, where one exists
    recovery_suggestion: Option<String>,
}

impl DisplayedError {
    fn from_engine(error: &EngineError) -> Self {
        match error.kind() {
            EngineErrorKind::Generation(e) => Self {
                title: e.title().to_string(),
                message: e.message(),
                recovery_suggestion: e.recovery_suggestion().map(str::to_string),
            },
            _ => Self {
                title: "Unexpected Error".to_string(),
                message: error.to_string(),
                recovery_suggestion: Some("Please try again.".to_string()),
            },
        }
    }
}

/// Owns the user-facing generation state around a [`GenerationEngine`]:
/// the input buffer, the last generated document, the in-flight flag, and
/// the last displayable error.
///
/// This is the layer that enforces the engine's preconditions. A request is
/// only forwarded when the input is non-empty after trimming, no call is in
/// flight, and the model reported itself available; anything else is
/// silently ignored rather than passed through.
pub struct Studio<B: LanguageBackend> {
    engine: GenerationEngine<B>,
    input: String,
    generated_html: String,
    loading: bool,
    current_error: Option<DisplayedError>,
    availability: ModelAvailability,
}

impl<B: LanguageBackend> Studio<B> {
    /// Creates a studio around the given engine, querying model
    /// availability once up front.
    pub fn new(engine: GenerationEngine<B>) -> Self {
        let availability = engine.availability();
        Self {
            engine,
            input: String::new(),
            generated_html: String::new(),
            loading: false,
            current_error: None,
            availability,
        }
    }

    /// Replaces the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The last generated document, empty when none.
    pub fn generated_html(&self) -> &str {
        &self.generated_html
    }

    /// The last displayable error, cleared on each new attempt.
    pub fn current_error(&self) -> Option<&DisplayedError> {
        self.current_error.as_ref()
    }

    /// Whether a generation is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cached model availability; refresh with
    /// [`Studio::refresh_model_status`].
    pub fn availability(&self) -> &ModelAvailability {
        &self.availability
    }

    /// Whether a generation may start: non-empty trimmed input, no call in
    /// flight, model available.
    pub fn can_generate(&self) -> bool {
        !self.input.trim().is_empty() && !self.loading && self.availability.is_available()
    }

    /// Whether a generated document is held.
    pub fn has_generated_content(&self) -> bool {
        !self.generated_html.is_empty()
    }

    /// Runs one generation for the current input in the given mode.
    ///
    /// Ignored when [`Studio::can_generate`] is false; the engine is never
    /// reached with an empty description or an unavailable model. On
    /// success the document is stored and the input cleared; on failure the
    /// categorized error is stored for display.
    #[instrument(skip(self), fields(mode = %mode))]
    pub async fn generate_web_app(&mut self, mode: GenerationMode) {
        if !self.can_generate() {
            debug!("Generation request ignored by gating");
            return;
        }

        self.loading = true;
        self.current_error = None;

        let request = GenerationRequest::new(self.input.clone(), mode);
        match self.engine.generate(&request).await {
            Ok(response) => {
                self.generated_html = response.content().clone();
                self.input.clear();
            }
            Err(error) => {
                self.current_error = Some(DisplayedError::from_engine(&error));
            }
        }

        self.loading = false;
    }

    /// Clears the generated document and any displayed error.
    pub fn clear_generation(&mut self) {
        self.generated_html.clear();
        self.current_error = None;
    }

    /// Re-queries the backend for model availability.
    pub fn refresh_model_status(&mut self) {
        self.availability = self.engine.availability();
    }

    /// Get a reference to the underlying engine.
    pub fn engine(&self) -> &GenerationEngine<B> {
        &self.engine
    }
}
