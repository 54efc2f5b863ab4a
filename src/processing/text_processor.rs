//! Text normalization and word tokenization

use regex::Regex;
use std::sync::OnceLock;

/// Characters allowed inside a token that are not meaningful at its end.
const TRAILING_JOINERS: &[char] = &['.'];

pub struct TextProcessor {
    whitespace_regex: Regex,
    token_regex: Regex,
}

#[derive(Debug, Clone)]
pub struct ProcessedText {
    pub normalized: String,
    pub tokens: Vec<String>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        // A token starts with a letter or digit; `+ # .` may join it so that
        // "c++", "c#" and "node.js" stay whole. Hyphens and apostrophes split.
        let token_regex = Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}+#.]*")
            .expect("Invalid token regex");

        Self {
            whitespace_regex,
            token_regex,
        }
    }

    /// Process-wide processor, compiled on first use.
    pub fn shared() -> &'static TextProcessor {
        static PROCESSOR: OnceLock<TextProcessor> = OnceLock::new();
        PROCESSOR.get_or_init(TextProcessor::new)
    }

    /// Normalize and tokenize in one pass
    pub fn process(&self, text: &str) -> ProcessedText {
        let normalized = self.normalize(text);
        let tokens = self.tokenize(&normalized);

        ProcessedText { normalized, tokens }
    }

    /// Collapse whitespace runs to single spaces, trim and lowercase
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.whitespace_regex
            .replace_all(text, " ")
            .trim()
            .to_lowercase()
    }

    /// Split already-normalized text into word tokens.
    ///
    /// Anything that is not a letter, digit or joiner separates tokens, so
    /// "python-based" yields "python" and "react's" yields "react". A
    /// trailing dot is dropped so "python." at the end of a sentence yields
    /// "python".
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.token_regex
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(TRAILING_JOINERS))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Normalize free text; absent input yields an empty string.
pub fn normalize_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    match text.into() {
        Some(text) => TextProcessor::shared().normalize(text),
        None => String::new(),
    }
}
