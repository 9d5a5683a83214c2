//! Free-text sanitizer applied to user-supplied fields before they reach the prompt.
//!
//! Regex stripping is not an HTML parser; crafted markup can survive it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Removes `<script>` blocks, then any remaining tags, then trims.
pub fn sanitize(text: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(text, "");
    let without_tags = HTML_TAG.replace_all(&without_scripts, "");
    without_tags.trim().to_string()
}
