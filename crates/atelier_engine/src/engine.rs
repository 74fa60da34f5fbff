//! The generation engine: session ownership, invocation, and recovery.

use atelier_core::{GenerationMetadata, GenerationRequest, GenerationResponse, prompt};
use atelier_error::{BusyError, EngineResult, GenerationError};
use atelier_interface::{LanguageBackend, ModelAvailability};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Orchestrates document generation against a single backend session.
///
/// The engine owns exactly one live session at a time. A generation that
/// fails because the session's context window is exhausted discards the
/// session, opens a fresh one with the same instructions, and retries the
/// same prompt exactly once; every other failure propagates immediately as
/// a categorized [`GenerationError`].
///
/// At most one `generate` call may be in flight per engine. A second caller
/// is rejected with a [`BusyError`] rather than queued, so the session is
/// never used concurrently.
///
/// Preconditions the engine does not re-check (they belong to the caller,
/// see [`crate::Studio`]): the description is trimmed and non-empty, and
/// the model reported itself available.
pub struct GenerationEngine<B: LanguageBackend> {
    backend: B,
    instructions: String,
    session: Mutex<B::Session>,
    epoch: AtomicU64,
}

impl<B: LanguageBackend> GenerationEngine<B> {
    /// Creates an engine with the default session instructions.
    pub fn new(backend: B) -> Self {
        Self::with_instructions(backend, prompt::SESSION_INSTRUCTIONS)
    }

    /// Creates an engine whose sessions use the given system instructions.
    ///
    /// Replacement sessions opened during context-window recovery use the
    /// same text.
    pub fn with_instructions(backend: B, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        let session = Mutex::new(backend.open_session(&instructions));
        Self {
            backend,
            instructions,
            session,
            epoch: AtomicU64::new(0),
        }
    }

    /// Current availability of the underlying model.
    pub fn availability(&self) -> ModelAvailability {
        self.backend.availability()
    }

    /// Identity of the current session slot.
    ///
    /// Increments exactly when the session is replaced during recovery, so
    /// callers can observe the start-fresh transition.
    pub fn session_epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Generates a document for the given request.
    ///
    /// Returns the model's raw output (markdown fencing, when present, is
    /// the rendering layer's concern) together with stamped metadata.
    ///
    /// # Errors
    ///
    /// [`BusyError`] when another call is in flight, otherwise the
    /// categorized [`GenerationError`] from the final failed attempt.
    #[instrument(skip(self, request), fields(mode = %request.mode()))]
    pub async fn generate(&self, request: &GenerationRequest) -> EngineResult<GenerationResponse> {
        let mut session = self
            .session
            .try_lock()
            .map_err(|_| BusyError::new("a generation is already in flight"))?;

        let text = prompt::build(request.prompt(), *request.mode());

        debug!(prompt_len = text.len(), "Sending prompt");

        match self.backend.respond(&mut session, &text).await {
            Ok(content) => {
                debug!(content_len = content.len(), "Generation succeeded");
                Ok(self.assemble(request, content))
            }
            Err(failure) => {
                let error = GenerationError::classify(failure);
                if !error.kind.is_session_recoverable() {
                    warn!(category = %error.kind, "Generation failed");
                    return Err(error.into());
                }

                // Context window exhausted: start fresh and retry the same
                // prompt once. No history is carried over.
                warn!("Context window exceeded; replacing session and retrying");
                *session = self.backend.open_session(&self.instructions);
                self.epoch.fetch_add(1, Ordering::AcqRel);

                match self.backend.respond(&mut session, &text).await {
                    Ok(content) => {
                        debug!(content_len = content.len(), "Retry succeeded");
                        Ok(self.assemble(request, content))
                    }
                    Err(second) => {
                        let error = GenerationError::classify(second);
                        warn!(category = %error.kind, "Retry failed");
                        Err(error.into())
                    }
                }
            }
        }
    }

    fn assemble(&self, request: &GenerationRequest, content: String) -> GenerationResponse {
        let metadata = GenerationMetadata::stamp(*request.mode(), request.prompt());
        GenerationResponse::new(content, metadata)
    }

    /// Get a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
