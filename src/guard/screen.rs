use once_cell::sync::Lazy;
use regex::Regex;

use crate::guard::error::GuardError;

/// Markup tags rejected when they appear after a `<`. Keyword characters
/// are matched with `\W*` between them, so separators inserted to dodge
/// the filter (`<s c r i p t`, `<s*c*r*i*p*t`) still match.
const BLOCKED_TAGS: &[&str] = &[
    "script", "iframe", "style", "svg", "img", "object", "embed", "form", "applet", "link", "meta",
];

static DENYLIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(&denylist_pattern()).expect("denylist pattern must compile"));

/// Denylist screen for request payloads. A match means the payload likely
/// carries markup or script injection; it is a coarse heuristic, not an
/// HTML sanitizer, and backends still own output encoding.
#[derive(Debug, Clone, Default)]
pub struct InputScreen;

impl InputScreen {
    pub fn new() -> Self {
        Self
    }

    /// Empty payloads always pass.
    pub fn check(&self, text: &str) -> Result<(), GuardError> {
        if text.is_empty() {
            return Ok(());
        }
        if DENYLIST.is_match(text) {
            return Err(GuardError::ForbiddenInput);
        }
        Ok(())
    }
}

/// Textual rendering of a request message handed to the screen.
pub trait PayloadText {
    fn payload_text(&self) -> String;
}

fn interleaved(keyword: &str) -> String {
    let mut pattern = String::new();
    for (i, ch) in keyword.chars().enumerate() {
        if i > 0 {
            pattern.push_str(r"\W*");
        }
        pattern.push(ch);
    }
    pattern
}

fn denylist_pattern() -> String {
    let mut alternatives: Vec<String> = BLOCKED_TAGS
        .iter()
        .map(|tag| format!(r"<\W*{}", interleaved(tag)))
        .collect();
    // inline event handlers (onclick=, onload=, ...)
    alternatives.push(format!(r"\b{}\w+\W*=", interleaved("on")));
    // javascript: URLs
    alternatives.push(format!(r"\b{}\W*:", interleaved("javascript")));
    format!("(?i){}", alternatives.join("|"))
}
