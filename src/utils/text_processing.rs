use crate::models::color::{ColorToken, ExtractionResult, MessageLine};
use once_cell::sync::Lazy;
use regex::Regex;

// The short form needs an ASCII word boundary after it so that `#ff000`
// is not read as `#ff0`.
static COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)#[0-9a-f]{6}|#[0-9a-f]{3}(?-u:\b)").expect("color regex is valid")
});

/// Harvests `#rgb`/`#rrggbb` colors (and their `0x` spellings) from a message,
/// grouped by line. Lines without a color are dropped.
pub fn extract_colors(text: &str) -> ExtractionResult {
    // Plain substitution, not a tokenizer: `0x` inside a word is rewritten too.
    let text = text.replace("0x", "#");

    let lines = text
        .split('\n')
        .filter_map(|line| {
            let colors: Vec<ColorToken> = COLOR_REGEX
                .find_iter(line)
                .filter_map(|mat| ColorToken::parse(mat.as_str()))
                .collect();
            (!colors.is_empty()).then_some(MessageLine { colors })
        })
        .collect();

    ExtractionResult { lines }
}
