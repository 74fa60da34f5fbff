//! Failure signals reported by a language-model backend.

use derive_more::Display;

/// Closed set of failure signals a [`crate::GenerationError`] classifies from.
///
/// These mirror the failure cases an on-device inference service reports for
/// a single respond call. The `context` payloads carry the backend's native
/// description and are preserved through classification for logging.
///
/// # Examples
///
/// ```
/// use atelier_error::BackendFailure;
///
/// let failure = BackendFailure::RateLimited {
///     context: "burst quota exhausted".to_string(),
/// };
/// assert!(format!("{}", failure).contains("rate limited"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum BackendFailure {
    /// The session's accumulated context no longer fits the model's window.
    #[display("context window exceeded: {}", context)]
    ExceededContextWindow {
        /// Backend-native description of the failure
        context: String,
    },

    /// Model weights or supporting assets are not available on this device.
    #[display("model assets unavailable: {}", context)]
    AssetsUnavailable {
        /// Backend-native description of the failure
        context: String,
    },

    /// The request tripped the backend's content guardrails.
    #[display("guardrail violation: {}", context)]
    GuardrailViolation {
        /// Backend-native description of the failure
        context: String,
    },

    /// The request used a generation guide the backend does not support.
    #[display("unsupported generation guide: {}", context)]
    UnsupportedGuide {
        /// Backend-native description of the failure
        context: String,
    },

    /// The request's language or locale is not supported by the model.
    #[display("unsupported language or locale: {}", context)]
    UnsupportedLanguageOrLocale {
        /// Backend-native description of the failure
        context: String,
    },

    /// The backend failed to decode the model's response.
    #[display("response decoding failure: {}", context)]
    DecodingFailure {
        /// Backend-native description of the failure
        context: String,
    },

    /// The backend rejected the call due to request-rate limits.
    #[display("rate limited: {}", context)]
    RateLimited {
        /// Backend-native description of the failure
        context: String,
    },

    /// Any failure outside the recognized set.
    #[display("{}", description)]
    Other {
        /// Backend-native description of the failure
        description: String,
    },
}

impl BackendFailure {
    /// The backend's native description of this failure.
    pub fn context(&self) -> &str {
        match self {
            BackendFailure::ExceededContextWindow { context }
            | BackendFailure::AssetsUnavailable { context }
            | BackendFailure::GuardrailViolation { context }
            | BackendFailure::UnsupportedGuide { context }
            | BackendFailure::UnsupportedLanguageOrLocale { context }
            | BackendFailure::DecodingFailure { context }
            | BackendFailure::RateLimited { context } => context,
            BackendFailure::Other { description } => description,
        }
    }
}

impl std::error::Error for BackendFailure {}
