//! Counting words and uppercase runs in input text.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Summary of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct TextReport {
    /// Whitespace-separated tokens.
    word_count: usize,
    /// Tokens written entirely in capitals.
    upper_word_count: usize,
    /// Characters, whitespace included.
    char_count: usize,
    /// Uppercase characters.
    upper_char_count: usize,
}

/// Analyzes a borrowed block of text.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    text: &'a str,
}

impl<'a> TextAnalyzer<'a> {
    /// Wraps `text` for analysis.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Counts whitespace-separated words.
    pub fn count_words(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Counts words that contain a capital and no lowercase letter.
    ///
    /// Punctuation and digits are ignored, so `"GREAT."` counts and
    /// `"123"` does not.
    pub fn count_upper_words(&self) -> usize {
        self.text
            .split_whitespace()
            .filter(|word| is_upper_word(word))
            .count()
    }

    /// Counts characters (Unicode scalar values).
    pub fn count_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Counts uppercase characters.
    pub fn count_upper_chars(&self) -> usize {
        self.text.chars().filter(|c| c.is_uppercase()).count()
    }

    /// Runs every count and collects them into a report.
    #[instrument(skip(self), fields(len = self.text.len()))]
    pub fn analyze(&self) -> TextReport {
        let report = TextReport {
            word_count: self.count_words(),
            upper_word_count: self.count_upper_words(),
            char_count: self.count_chars(),
            upper_char_count: self.count_upper_chars(),
        };
        debug!(?report, "Text analyzed");
        report
    }
}

fn is_upper_word(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
