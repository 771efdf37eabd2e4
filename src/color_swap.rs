//! The color substitution itself
//!
//! The old color is matched in its two spellings (lowercase and uppercase hex
//! digits). Both are rewritten to the same new value.

/// Legacy brand color, lowercase spelling
pub const OLD_COLOR: &str = "#3399ff";

/// Legacy brand color, uppercase spelling
pub const OLD_COLOR_UPPER: &str = "#3399FF";

/// Replacement brand color
pub const NEW_COLOR: &str = "#006EF7";

/// A literal find/replace pair with any number of spellings for the old value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSwap {
    variants: Vec<String>,
    replacement: String,
}

/// Result of running a swap over a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swapped {
    pub content: String,
    pub replacements: usize,
}

impl Default for ColorSwap {
    fn default() -> Self {
        Self::new(&[OLD_COLOR, OLD_COLOR_UPPER], NEW_COLOR)
    }
}

impl ColorSwap {
    pub fn new(variants: &[&str], replacement: &str) -> Self {
        Self {
            variants: variants
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
                .collect(),
            replacement: replacement.to_string(),
        }
    }

    /// The spelling shown in the summary line
    pub fn old_value(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or_default()
    }

    pub fn new_value(&self) -> &str {
        &self.replacement
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Replace every variant in `content`, one variant at a time, left to right.
    ///
    /// Returns `None` when nothing changed, so callers never rewrite a file
    /// whose content would come out identical.
    pub fn apply(&self, content: &str) -> Option<Swapped> {
        let mut result = content.to_string();
        let mut replacements = 0;

        for variant in &self.variants {
            let hits = result.matches(variant.as_str()).count();
            if hits > 0 {
                replacements += hits;
                result = result.replace(variant.as_str(), &self.replacement);
            }
        }

        if result == content {
            return None;
        }

        Some(Swapped {
            content: result,
            replacements,
        })
    }
}
