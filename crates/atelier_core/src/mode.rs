//! Generation modes.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The three fixed request shapes a document can be generated in.
///
/// The mode governs which instructions the prompt builder emits; it does
/// not change how the response is handled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Complete HTML document with optional inline styling.
    #[display("plain HTML")]
    PlainHtml,
    /// Complete HTML document with styling embedded in a head-level style block.
    #[display("HTML with embedded CSS")]
    HtmlWithEmbeddedCss,
    /// Complete HTML document with embedded interactive scripting.
    #[display("full interactive app")]
    FullInteractiveApp,
}
