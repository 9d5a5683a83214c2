//! Guideline composer: the instruction block that steers style mix and tone.
//!
//! Layout, in order: persona preamble, one style mix per requested variation,
//! creative guidance, adult-audience addendum (conditional), extra context
//! guidance, authoring checklist. Pure string building.

use crate::generation::prompts::{
    StyleMix, ADULT_AUDIENCE_GUIDANCE, ADULT_AUDIENCE_MARKERS, AUTHORING_CHECKLIST,
    CONTEXT_GUIDANCE, CREATIVE_GUIDANCE, PERSONA_TEMPLATE, STYLE_MIXES, STYLE_MIX_TEMPLATE,
};

/// True when the audience text names an adult age group.
pub fn is_adult_audience(target_audience: &str) -> bool {
    let audience = target_audience.to_lowercase();
    ADULT_AUDIENCE_MARKERS
        .iter()
        .any(|marker| audience.contains(marker))
}

/// Style mixes for the first `num_variations` variations (clamped to 1..=3).
pub fn style_mixes_for(num_variations: usize) -> &'static [StyleMix] {
    &STYLE_MIXES[..num_variations.clamp(1, STYLE_MIXES.len())]
}

/// Builds the guideline block for `target_audience` and `num_variations`.
pub fn compose_guidelines(target_audience: &str, num_variations: usize) -> String {
    let mixes = style_mixes_for(num_variations);

    let mut sections = vec![PERSONA_TEMPLATE.replace("{count}", &mixes.len().to_string())];

    sections.extend(mixes.iter().enumerate().map(|(i, mix)| {
        STYLE_MIX_TEMPLATE
            .replace("{index}", &(i + 1).to_string())
            .replace("{name}", mix.name)
            .replace("{description}", mix.description)
    }));

    sections.push(CREATIVE_GUIDANCE.to_string());

    if is_adult_audience(target_audience) {
        sections.push(ADULT_AUDIENCE_GUIDANCE.to_string());
    }

    sections.push(CONTEXT_GUIDANCE.to_string());
    sections.push(AUTHORING_CHECKLIST.to_string());

    sections.join("\n\n")
}
