//! Tests for the core data types.

use atelier_core::{GenerationMetadata, GenerationMode, GenerationRequest, GenerationResponse};

#[test]
fn test_mode_serializes_snake_case() {
    let json = serde_json::to_string(&GenerationMode::HtmlWithEmbeddedCss)
        .expect("serialization failed");
    assert_eq!(json, "\"html_with_embedded_css\"");

    let parsed: GenerationMode =
        serde_json::from_str("\"full_interactive_app\"").expect("deserialization failed");
    assert_eq!(parsed, GenerationMode::FullInteractiveApp);
}

#[test]
fn test_request_builder() {
    let request = GenerationRequest::builder()
        .prompt("a pricing table")
        .mode(GenerationMode::PlainHtml)
        .build()
        .expect("builder failed");

    assert_eq!(request.prompt(), "a pricing table");
    assert_eq!(*request.mode(), GenerationMode::PlainHtml);
}

#[test]
fn test_metadata_stamp_echoes_mode_and_derives_title() {
    let metadata = GenerationMetadata::stamp(
        GenerationMode::HtmlWithEmbeddedCss,
        "Create a simple contact form with validation",
    );

    assert_eq!(*metadata.mode(), GenerationMode::HtmlWithEmbeddedCss);
    assert_eq!(metadata.title().as_deref(), Some("Create A Simple Contact"));
}

#[test]
fn test_response_round_trips_through_json() {
    let metadata = GenerationMetadata::stamp(GenerationMode::PlainHtml, "a pricing table");
    let response = GenerationResponse::new("<html></html>", metadata);

    let json = serde_json::to_string(&response).expect("serialization failed");
    let parsed: GenerationResponse = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(parsed, response);
}
