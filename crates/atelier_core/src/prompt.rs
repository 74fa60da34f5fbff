//! Prompt construction per generation mode.
//!
//! Pure functions: the same description and mode always produce the same
//! instruction text, so prompts are unit-testable without a model.

use crate::GenerationMode;

/// Fixed per-session instructions. Every session the engine opens, including
/// replacements after a context-window restart, uses this same text.
pub const SESSION_INSTRUCTIONS: &str = "\
You are an expert web developer. Generate clean, modern, and functional HTML code based on user descriptions.

For HTML-only requests:
- Create semantic, accessible HTML
- Use proper HTML5 structure
- Include inline styles if needed for basic styling
- Make forms functional with proper input types
- Ensure responsive design principles

Always respond with complete, valid HTML that can be rendered immediately.
Do not include markdown code blocks or explanations - just the HTML code.";

/// Builds the instruction text sent to the model for one generation.
///
/// The caller guarantees `description` is trimmed and non-empty; the
/// builder does not validate.
///
/// # Examples
///
/// ```
/// use atelier_core::{GenerationMode, prompt};
///
/// let text = prompt::build("a recipe card", GenerationMode::PlainHtml);
/// assert!(text.contains("a recipe card"));
/// assert!(text.contains("no explanations or markdown"));
/// ```
pub fn build(description: &str, mode: GenerationMode) -> String {
    match mode {
        GenerationMode::PlainHtml => format!(
            "\
Create a complete HTML page for: {description}

Requirements:
- Complete HTML document with DOCTYPE, html, head, and body tags
- Include a title in the head section
- Use semantic HTML5 elements
- Add basic inline CSS for styling and layout
- Make it responsive and accessible
- Ensure all forms are functional

Generate only the HTML code, no explanations or markdown."
        ),

        GenerationMode::HtmlWithEmbeddedCss => format!(
            "\
Create a complete HTML page with embedded CSS for: {description}

Requirements:
- Complete HTML document with DOCTYPE, html, head, and body tags
- Include a title in the head section
- Embedded CSS in <style> tags within <head>, not inline styles
- Modern, clean design
- Responsive layout
- Proper color scheme and typography

Generate only the HTML code, no explanations or markdown."
        ),

        GenerationMode::FullInteractiveApp => format!(
            "\
Create a complete web application for: {description}

Requirements:
- Complete HTML document with DOCTYPE, html, head, and body tags
- Include a title in the head section
- Embedded CSS and JavaScript
- Interactive functionality using JavaScript
- Proper error handling in JavaScript
- Modern UI with good UX
- Responsive design

Generate only the HTML code, no explanations or markdown."
        ),
    }
}
