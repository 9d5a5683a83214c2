// Shared prompt fragments.
// The marker tokens are a contract between the prompt text and the reply parser:
// both sides import them from here so the wording cannot drift apart.

/// Opens one variation block in the model reply.
pub const VARIATION_START: &str = "===VARIATION_START===";

/// Closes one variation block in the model reply.
pub const VARIATION_END: &str = "===VARIATION_END===";

/// "Separate each one with the start and end markers." Replace `{start}` and `{end}`.
pub const MARKER_INSTRUCTION_TEMPLATE: &str =
    "တစ်ခုစီကို \"{start}\" နှင့် \"{end}\" ဖြင့် ပိုင်းခြားပေးပါ။";

/// "Respond in Burmese only."
pub const BURMESE_ONLY_INSTRUCTION: &str = "မြန်မာဘာသာဖြင့်သာ response ပေးပါ။";

/// Marker instruction with the shared tokens substituted.
pub fn marker_instruction() -> String {
    MARKER_INSTRUCTION_TEMPLATE
        .replace("{start}", VARIATION_START)
        .replace("{end}", VARIATION_END)
}
