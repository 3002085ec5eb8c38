use serde::{Serialize, Serializer};
use std::fmt;

/// A validated color in canonical `#rrggbb` form (lowercase).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorToken(String);

impl ColorToken {
    /// Parses `#rgb` or `#rrggbb` in any case. Short forms are expanded by
    /// doubling each digit.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded = match digits.len() {
            6 => digits.to_ascii_lowercase(),
            3 => digits
                .chars()
                .flat_map(|c| {
                    let c = c.to_ascii_lowercase();
                    [c, c]
                })
                .collect(),
            _ => return None,
        };

        Some(Self(format!("#{}", expanded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The colors found on one line of a message, in order of appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageLine {
    pub colors: Vec<ColorToken>,
}

/// Every line of a message that held at least one color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    pub lines: Vec<MessageLine>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn flatten(&self) -> Vec<&ColorToken> {
        self.lines.iter().flat_map(|line| line.colors.iter()).collect()
    }

    /// Rows of hex strings, one row per line.
    pub fn into_grid(self) -> Vec<Vec<String>> {
        self.lines
            .into_iter()
            .map(|line| line.colors.into_iter().map(|c| c.0).collect())
            .collect()
    }
}
