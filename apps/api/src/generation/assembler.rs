//! Prompt assembler: guideline block plus a labeled dump of the sanitized request.

use crate::generation::guidelines::compose_guidelines;
use crate::generation::prompts::{
    FLAG_NO, FLAG_YES, GENERAL_AUDIENCE, GENERATION_PROMPT_TEMPLATE, NONE_GIVEN, NOT_SPECIFIED,
};
use crate::generation::request::SanitizedRequest;
use crate::llm_client::prompts::{marker_instruction, BURMESE_ONLY_INSTRUCTION};

/// Builds the single prompt string sent to the model.
pub fn assemble_prompt(request: &SanitizedRequest) -> String {
    let guidelines = compose_guidelines(&request.target_audience, request.num_variations);
    let marker_instruction = marker_instruction();
    let num_variations = request.num_variations.to_string();

    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("guidelines", guidelines.as_str()),
            ("platform", or_placeholder(&request.platform, NOT_SPECIFIED)),
            ("content_type", or_placeholder(&request.content_type, NOT_SPECIFIED)),
            ("content_length", or_placeholder(&request.content_length, NOT_SPECIFIED)),
            ("objective", or_placeholder(&request.objective, NOT_SPECIFIED)),
            ("style", or_placeholder(&request.style, NOT_SPECIFIED)),
            ("content_category", or_placeholder(&request.content_category, NOT_SPECIFIED)),
            ("product_name", or_placeholder(&request.product_name, NONE_GIVEN)),
            ("key_message", or_placeholder(&request.key_message, NONE_GIVEN)),
            ("target_audience", or_placeholder(&request.target_audience, GENERAL_AUDIENCE)),
            ("keywords", or_placeholder(&request.keywords, NONE_GIVEN)),
            ("business_page_link", or_placeholder(&request.business_page_link, NONE_GIVEN)),
            ("include_cta", flag(request.include_cta)),
            ("include_emojis", flag(request.include_emojis)),
            ("include_hashtags", flag(request.include_hashtags)),
            ("num_variations", num_variations.as_str()),
            ("marker_instruction", marker_instruction.as_str()),
            ("language_instruction", BURMESE_ONLY_INSTRUCTION),
        ],
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        FLAG_YES
    } else {
        FLAG_NO
    }
}

/// Replaces each `{key}` in `template` in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to
/// contain `{keywords}` stays literal. Unknown `{...}` sequences are kept.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::prompts::{VARIATION_END, VARIATION_START};

    fn request() -> SanitizedRequest {
        SanitizedRequest {
            platform: "facebook".to_string(),
            content_type: "Post".to_string(),
            content_length: "standard".to_string(),
            objective: String::new(),
            style: "friendly".to_string(),
            content_category: "food".to_string(),
            product_name: "Mohinga Express".to_string(),
            key_message: String::new(),
            target_audience: "young adults".to_string(),
            keywords: "breakfast, yangon".to_string(),
            business_page_link: String::new(),
            include_cta: true,
            include_emojis: false,
            include_hashtags: true,
            num_variations: 2,
        }
    }

    #[test]
    fn test_prompt_contains_guidelines_and_fields() {
        let prompt = assemble_prompt(&request());

        assert!(prompt.starts_with(&compose_guidelines("young adults", 2)));
        assert!(prompt.contains("Platform: facebook"));
        assert!(prompt.contains("Content Type: Post"));
        assert!(prompt.contains("Product/Service Name: Mohinga Express"));
        assert!(prompt.contains("Keywords: breakfast, yangon"));
        assert!(prompt.contains("Number of Variations: 2"));
    }

    #[test]
    fn test_empty_fields_get_placeholders() {
        let prompt = assemble_prompt(&request());

        assert!(prompt.contains(&format!("Objective: {NOT_SPECIFIED}")));
        assert!(prompt.contains(&format!("Key Message/Details: {NONE_GIVEN}")));
        assert!(prompt.contains(&format!("Business Page Link: {NONE_GIVEN}")));

        let anonymous = SanitizedRequest {
            target_audience: String::new(),
            ..request()
        };
        assert!(assemble_prompt(&anonymous).contains(&format!("Target Audience: {GENERAL_AUDIENCE}")));
    }

    #[test]
    fn test_flags_render_as_phrases() {
        let prompt = assemble_prompt(&request());

        assert!(prompt.contains(&format!("Include CTA: {FLAG_YES}")));
        assert!(prompt.contains(&format!("Include Emojis: {FLAG_NO}")));
        assert!(prompt.contains(&format!("Include Hashtags: {FLAG_YES}")));
    }

    #[test]
    fn test_prompt_closes_with_markers_and_language_rule() {
        let prompt = assemble_prompt(&request());

        assert!(prompt.contains(VARIATION_START));
        assert!(prompt.contains(VARIATION_END));
        assert!(prompt.trim_end().ends_with(BURMESE_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_user_text_is_not_expanded() {
        let tricky = SanitizedRequest {
            product_name: "{keywords} {unknown".to_string(),
            ..request()
        };
        let prompt = assemble_prompt(&tricky);
        assert!(prompt.contains("Product/Service Name: {keywords} {unknown"));
    }

    #[test]
    fn test_fill_template_keeps_unknown_keys() {
        assert_eq!(
            fill_template("{a} and {b} and {", &[("a", "1")]),
            "1 and {b} and {"
        );
    }
}
