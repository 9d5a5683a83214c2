//! Plain-text export of generated variations.

/// Download name offered to the browser.
pub const EXPORT_FILENAME: &str = "burmese_social_media_content.txt";

/// Header line per variation. Replace `{index}` (1-based). "ပုံစံကွဲ" = "variation".
const EXPORT_HEADER_TEMPLATE: &str = "=== ပုံစံကွဲ {index} ===";

/// Renders every variation under a numbered header, separated by blank lines.
pub fn render_export(variations: &[String]) -> String {
    variations
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let header = EXPORT_HEADER_TEMPLATE.replace("{index}", &(i + 1).to_string());
            format!("{header}\n\n{text}\n\n")
        })
        .collect()
}
