//! Request validation. Rules run in a fixed order and the first failure wins.

use crate::generation::request::GenerationRequest;

pub const MIN_VARIATIONS: i64 = 1;
pub const MAX_VARIATIONS: i64 = 3;

/// Free-text fields with their maximum length in characters, in check order.
fn length_limits(request: &GenerationRequest) -> [(&'static str, usize, &str); 5] {
    [
        ("Product name", 200, request.product_name.as_str()),
        ("Key message", 2000, request.key_message.as_str()),
        ("Target audience", 1000, request.target_audience.as_str()),
        ("Keywords", 500, request.keywords.as_str()),
        ("Business page link", 300, request.business_page_link.as_str()),
    ]
}

/// Returns the message of the first violated rule, or `Ok(())`.
///
/// Order: contentType → contentLength → style → numVariations → max lengths.
/// Lengths are measured on the raw input, before sanitization.
pub fn validate_request(request: &GenerationRequest) -> Result<(), String> {
    if request.content_type.trim().is_empty() {
        return Err("Content type is required".to_string());
    }

    if request.content_length.trim().is_empty() {
        return Err("Content length is required".to_string());
    }

    if request.style.trim().is_empty() {
        return Err("Style is required".to_string());
    }

    if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&request.num_variations) {
        return Err(format!(
            "Number of variations must be between {MIN_VARIATIONS} and {MAX_VARIATIONS}"
        ));
    }

    for (label, max, value) in length_limits(request) {
        if value.chars().count() > max {
            return Err(format!("{label} too long (max {max} characters)"));
        }
    }

    Ok(())
}
