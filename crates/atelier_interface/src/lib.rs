//! Backend trait definitions for the Atelier web-page generation library.

mod backend;

pub use backend::{BackendResult, LanguageBackend, ModelAvailability};
