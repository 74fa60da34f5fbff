//! Language-model backend trait definitions.

use async_trait::async_trait;
use atelier_error::BackendFailure;

/// Result type for backend respond calls.
pub type BackendResult<T> = Result<T, BackendFailure>;

/// A platform-provided inference service that holds conversational sessions.
///
/// This trait decouples the generation engine from any concrete model
/// runtime. Implementations own the actual inference call; the engine owns
/// session lifecycle. Sessions are opaque to everything but their backend:
/// the engine holds one, replaces it on context-window recovery, and never
/// shares it.
///
/// By programming to this interface rather than a concrete runtime, we get:
/// - Backend flexibility (on-device runtime, remote service, test double)
/// - Better testability (scripted mock backends, no model needed)
/// - Reduced coupling (runtime changes don't ripple through the engine)
#[async_trait]
pub trait LanguageBackend: Send + Sync {
    /// Opaque conversational context held by the backend across calls.
    type Session: Send;

    /// Current availability of the underlying model.
    fn availability(&self) -> ModelAvailability;

    /// Opens a fresh session primed with the given system instructions.
    ///
    /// A new session carries no conversation history.
    fn open_session(&self, instructions: &str) -> Self::Session;

    /// Sends one prompt to the model within the given session.
    ///
    /// Returns the model's raw text output, or a failure signal from the
    /// closed set in [`BackendFailure`].
    async fn respond(&self, session: &mut Self::Session, prompt: &str) -> BackendResult<String>;
}

/// Availability of the underlying language model.
///
/// # Examples
///
/// ```
/// use atelier_interface::ModelAvailability;
///
/// let status = ModelAvailability::Unavailable {
///     reason: "model assets not downloaded".to_string(),
/// };
/// assert!(!status.is_available());
/// assert!(status.status_message().contains("not downloaded"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelAvailability {
    /// The model is ready to serve requests.
    Available,
    /// The model cannot serve requests.
    Unavailable {
        /// Backend-reported reason
        reason: String,
    },
}

impl ModelAvailability {
    /// Whether the model can serve requests right now.
    pub fn is_available(&self) -> bool {
        matches!(self, ModelAvailability::Available)
    }

    /// Human-readable status line for display.
    pub fn status_message(&self) -> String {
        match self {
            ModelAvailability::Available => "Model Available".to_string(),
            ModelAvailability::Unavailable { reason } => {
                format!("Model Unavailable: {}", reason)
            }
        }
    }
}
