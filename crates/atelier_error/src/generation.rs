//! User-facing generation error taxonomy.

use crate::BackendFailure;
use derive_more::Display;

/// Categories a backend failure classifies into.
///
/// The set is closed: every failure signal maps to exactly one category,
/// with anything unrecognized folded into [`GenerationErrorKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum GenerationErrorKind {
    /// Accumulated session context exceeded the model's window.
    #[display("context window exceeded")]
    ContextWindowExceeded,

    /// Model assets are not available on this device.
    #[display("model assets unavailable")]
    AssetsUnavailable,

    /// The request violated content policy.
    #[display("content policy violation")]
    PolicyViolation,

    /// The request used an unsupported generation feature.
    #[display("unsupported feature")]
    UnsupportedFeature,

    /// The request's language or locale is unsupported.
    #[display("unsupported locale")]
    UnsupportedLocale,

    /// The model's response could not be parsed.
    #[display("response parsing failure")]
    ResponseParsingFailure,

    /// Too many requests in a short window.
    #[display("rate limited")]
    RateLimited,

    /// Unrecognized failure; carries the backend's native description.
    #[display("unknown: {}", _0)]
    Unknown(String),
}

impl GenerationErrorKind {
    /// Whether discarding the session and retrying once can recover this
    /// failure. True only for the context-window case.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_error::GenerationErrorKind;
    ///
    /// assert!(GenerationErrorKind::ContextWindowExceeded.is_session_recoverable());
    /// assert!(!GenerationErrorKind::RateLimited.is_session_recoverable());
    /// ```
    pub fn is_session_recoverable(&self) -> bool {
        matches!(self, GenerationErrorKind::ContextWindowExceeded)
    }

    /// Short display title for this category.
    pub fn title(&self) -> &'static str {
        match self {
            GenerationErrorKind::ContextWindowExceeded => "Context Window Exceeded",
            GenerationErrorKind::AssetsUnavailable => "Model Assets Unavailable",
            GenerationErrorKind::PolicyViolation => "Content Policy Violation",
            GenerationErrorKind::UnsupportedFeature => "Unsupported Feature",
            GenerationErrorKind::UnsupportedLocale => "Language Not Supported",
            GenerationErrorKind::ResponseParsingFailure => "Response Parsing Error",
            GenerationErrorKind::RateLimited => "Rate Limited",
            GenerationErrorKind::Unknown(_) => "Generation Error",
        }
    }

    /// Plain-language description for display alongside the title.
    pub fn message(&self) -> String {
        match self {
            GenerationErrorKind::ContextWindowExceeded => {
                "The conversation has become too long.".to_string()
            }
            GenerationErrorKind::AssetsUnavailable => {
                "AI model assets are not currently available.".to_string()
            }
            GenerationErrorKind::PolicyViolation => {
                "The request violates content policies.".to_string()
            }
            GenerationErrorKind::UnsupportedFeature => {
                "The requested feature is not supported.".to_string()
            }
            GenerationErrorKind::UnsupportedLocale => {
                "The current language is not supported by the model.".to_string()
            }
            GenerationErrorKind::ResponseParsingFailure => {
                "Failed to parse the AI response.".to_string()
            }
            GenerationErrorKind::RateLimited => {
                "Too many requests. Please wait before trying again.".to_string()
            }
            GenerationErrorKind::Unknown(description) => description.clone(),
        }
    }

    /// Actionable next step, where one exists.
    ///
    /// Unrecognized failures carry no suggestion; their message is already
    /// the backend's own description.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            GenerationErrorKind::ContextWindowExceeded => {
                Some("Starting a new session to continue.")
            }
            GenerationErrorKind::AssetsUnavailable => {
                Some("Please try again later or check your internet connection.")
            }
            GenerationErrorKind::PolicyViolation => {
                Some("Please modify your request and try again.")
            }
            GenerationErrorKind::UnsupportedFeature => Some("Please try a simpler request."),
            GenerationErrorKind::UnsupportedLocale => {
                Some("Please change your device language or try English.")
            }
            GenerationErrorKind::ResponseParsingFailure => {
                Some("Please try your request again.")
            }
            GenerationErrorKind::RateLimited => Some("Wait a moment and try again."),
            GenerationErrorKind::Unknown(_) => None,
        }
    }
}

impl From<BackendFailure> for GenerationErrorKind {
    fn from(failure: BackendFailure) -> Self {
        match failure {
            BackendFailure::ExceededContextWindow { .. } => {
                GenerationErrorKind::ContextWindowExceeded
            }
            BackendFailure::AssetsUnavailable { .. } => GenerationErrorKind::AssetsUnavailable,
            BackendFailure::GuardrailViolation { .. } => GenerationErrorKind::PolicyViolation,
            BackendFailure::UnsupportedGuide { .. } => GenerationErrorKind::UnsupportedFeature,
            BackendFailure::UnsupportedLanguageOrLocale { .. } => {
                GenerationErrorKind::UnsupportedLocale
            }
            BackendFailure::DecodingFailure { .. } => GenerationErrorKind::ResponseParsingFailure,
            BackendFailure::RateLimited { .. } => GenerationErrorKind::RateLimited,
            BackendFailure::Other { description } => GenerationErrorKind::Unknown(description),
        }
    }
}

/// Generation error with location tracking.
///
/// Wraps a [`GenerationErrorKind`] and exposes the user-facing shape
/// (title, message, optional recovery suggestion) the UI displays verbatim.
///
/// # Examples
///
/// ```
/// use atelier_error::{BackendFailure, GenerationError};
///
/// let err = GenerationError::classify(BackendFailure::RateLimited {
///     context: "burst quota exhausted".to_string(),
/// });
/// assert_eq!(err.title(), "Rate Limited");
/// assert!(err.recovery_suggestion().is_some());
/// ```
#[derive(Debug, Clone, Display)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The classified error category.
    pub kind: GenerationErrorKind,
    /// Line number where the error was classified.
    pub line: u32,
    /// File where the error was classified.
    pub file: &'static str,
}

impl GenerationError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Classifies a backend failure signal into its error category.
    #[track_caller]
    pub fn classify(failure: BackendFailure) -> Self {
        Self::new(failure.into())
    }

    /// Short display title.
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Plain-language message.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Actionable next step, where one exists.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        self.kind.recovery_suggestion()
    }
}

impl std::error::Error for GenerationError {}
