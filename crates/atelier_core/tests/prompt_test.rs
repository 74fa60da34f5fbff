//! Tests for prompt construction across all generation modes.

use atelier_core::{GenerationMode, prompt};

const MODES: [GenerationMode; 3] = [
    GenerationMode::PlainHtml,
    GenerationMode::HtmlWithEmbeddedCss,
    GenerationMode::FullInteractiveApp,
];

#[test]
fn test_build_is_deterministic() {
    for mode in MODES {
        let first = prompt::build("a landing page for a bakery", mode);
        let second = prompt::build("a landing page for a bakery", mode);
        assert_eq!(first, second);
    }
}

#[test]
fn test_build_embeds_description() {
    for mode in MODES {
        let text = prompt::build("a kanban board", mode);
        assert!(text.contains("a kanban board"), "mode {mode} lost the description");
    }
}

#[test]
fn test_all_modes_forbid_markdown_and_prose() {
    for mode in MODES {
        let text = prompt::build("a recipe card", mode);
        assert!(
            text.contains("no explanations or markdown"),
            "mode {mode} must forbid fencing and prose"
        );
    }
}

#[test]
fn test_all_modes_require_complete_document() {
    for mode in MODES {
        let text = prompt::build("a recipe card", mode);
        assert!(
            text.contains("Complete HTML document with DOCTYPE, html, head, and body tags"),
            "mode {mode} must require full document structure"
        );
        assert!(
            text.contains("title in the head section"),
            "mode {mode} must require a head title"
        );
    }
}

#[test]
fn test_plain_html_requests_inline_styling() {
    let text = prompt::build("a recipe card", GenerationMode::PlainHtml);
    assert!(text.contains("inline CSS"));
    assert!(text.contains("semantic HTML5 elements"));
}

#[test]
fn test_embedded_css_requests_style_block() {
    let text = prompt::build("a recipe card", GenerationMode::HtmlWithEmbeddedCss);
    assert!(text.contains("<style> tags within <head>"));
    assert!(text.contains("not inline styles"));
}

#[test]
fn test_interactive_app_requests_scripting_with_error_handling() {
    let text = prompt::build("a recipe card", GenerationMode::FullInteractiveApp);
    assert!(text.contains("Interactive functionality using JavaScript"));
    assert!(text.contains("error handling in JavaScript"));
}

#[test]
fn test_session_instructions_forbid_markdown() {
    assert!(prompt::SESSION_INSTRUCTIONS.contains("Do not include markdown code blocks"));
    assert!(prompt::SESSION_INSTRUCTIONS.contains("complete, valid HTML"));
}
