//! Response parser: turns the model's free text into exactly N variations.
//!
//! Primary path: blocks between the shared marker tokens.
//! Fallback: the first separator from `FALLBACK_SEPARATORS` found in the text.
//! Short results are padded by repeating the first variation.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::llm_client::prompts::{VARIATION_END, VARIATION_START};

/// Tried in order; only the first one present in the text is used.
pub const FALLBACK_SEPARATORS: [&str; 4] = ["---", "***", "###", "\n\n\n"];

/// Fallback pieces shorter than this (in characters) are discarded.
pub const MIN_FALLBACK_PIECE_CHARS: usize = 10;

lazy_static! {
    static ref MARKED_BLOCK: Regex = Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(VARIATION_START),
        regex::escape(VARIATION_END)
    ))
    .unwrap();
}

/// Extracts up to `n` variations from `text`.
///
/// The result has exactly `n` entries whenever at least one variation was
/// found. An empty result means nothing usable was returned; callers treat
/// that as a failed generation.
pub fn parse_variations(text: &str, n: usize) -> Vec<String> {
    let mut variations = match marked_blocks(text) {
        Some(blocks) => blocks,
        None => {
            warn!("Model reply has no variation markers, falling back to separators");
            split_on_fallback_separator(text)
        }
    };

    if let Some(first) = variations.first().cloned() {
        if variations.len() < n {
            warn!(
                "Model returned {} of {} variations, padding with the first",
                variations.len(),
                n
            );
            variations.resize(n, first);
        }
    }

    variations.truncate(n);
    variations
}

/// `None` when the reply has no complete marker pair. Blank blocks are dropped,
/// so a reply made only of blank blocks yields `Some(vec![])`.
fn marked_blocks(text: &str) -> Option<Vec<String>> {
    let mut found = false;
    let blocks: Vec<String> = MARKED_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .inspect(|_| found = true)
        .map(|m| m.as_str().trim())
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect();

    found.then_some(blocks)
}

fn split_on_fallback_separator(text: &str) -> Vec<String> {
    match FALLBACK_SEPARATORS.iter().find(|sep| text.contains(**sep)) {
        Some(separator) => text
            .split(separator)
            .map(str::trim)
            .filter(|piece| piece.chars().count() >= MIN_FALLBACK_PIECE_CHARS)
            .map(str::to_string)
            .collect(),
        None => {
            let whole = text.trim();
            if whole.is_empty() {
                Vec::new()
            } else {
                vec![whole.to_string()]
            }
        }
    }
}
