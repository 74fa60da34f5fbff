//! Markdown-fence stripping for raw model output.

/// Strips a markdown code-block wrapper from generated content.
///
/// Handles formats like ```` ```html ... ``` ```` or ```` ``` ... ``` ````.
/// Content without a leading fence is returned unchanged.
///
/// # Examples
///
/// ```
/// use atelier_core::strip_markdown_fence;
///
/// let wrapped = "```html\n<!DOCTYPE html>\n<html></html>\n```";
/// assert_eq!(strip_markdown_fence(wrapped), "<!DOCTYPE html>\n<html></html>");
/// ```
pub fn strip_markdown_fence(content: &str) -> String {
    let trimmed = content.trim();

    if !trimmed.starts_with("```") {
        return content.to_string();
    }

    let mut lines: Vec<&str> = trimmed.lines().collect();

    // Drop the opening fence line (```html or bare ```)
    lines.remove(0);

    // Drop the closing fence line when present
    if lines.last().is_some_and(|last| last.trim() == "```") {
        lines.pop();
    }

    lines.join("\n")
}
