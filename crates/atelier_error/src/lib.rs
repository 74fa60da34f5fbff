//! Error types for the Atelier web-page generation library.
//!
//! This crate provides the foundation error types used throughout the
//! Atelier workspace: the closed set of backend failure signals, the
//! user-facing generation error taxonomy classified from them, and the
//! engine-level aggregate.

mod backend;
mod busy;
mod config;
mod generation;

pub use backend::BackendFailure;
pub use busy::BusyError;
pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind};

/// Engine-level error variants.
///
/// Generation failures carry the categorized, user-displayable error;
/// the other variants cover concerns outside the model-failure taxonomy.
#[derive(Debug, derive_more::From)]
pub enum EngineErrorKind {
    /// Classified model-service failure
    Generation(GenerationError),
    /// Rejected re-entrant call
    Busy(BusyError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineErrorKind::Generation(e) => write!(f, "{}", e),
            EngineErrorKind::Busy(e) => write!(f, "{}", e),
            EngineErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Atelier engine error with kind discrimination.
#[derive(Debug)]
pub struct EngineError(Box<EngineErrorKind>);

impl EngineError {
    /// Create a new error from a kind.
    pub fn new(kind: EngineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.0
    }

    /// The classified generation error, when this is a generation failure.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            EngineErrorKind::Generation(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atelier Error: {}", self.0)
    }
}

impl std::error::Error for EngineError {}

// Generic From implementation for any type that converts to EngineErrorKind
impl<T> From<T> for EngineError
where
    T: Into<EngineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
