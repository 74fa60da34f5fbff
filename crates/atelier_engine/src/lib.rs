//! Generation orchestration for the Atelier web-page generation library.
//!
//! The engine takes a user description plus a generation mode, builds the
//! model prompt, invokes the backend, recovers from context-window
//! exhaustion by restarting the session once, and maps every other failure
//! into the closed error taxonomy in `atelier_error`.

mod config;
mod engine;
mod observability;
mod studio;

pub use config::EngineConfig;
pub use engine::GenerationEngine;
pub use observability::init_tracing;
pub use studio::{DisplayedError, Studio};
