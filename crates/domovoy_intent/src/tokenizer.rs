//! Utterance tokenization.
//!
//! Converts recognized speech into a sequence of lowercase words.

/// Tokenizes utterances.
pub struct UtteranceTokenizer;

impl UtteranceTokenizer {
    /// Tokenizes a raw utterance into words.
    ///
    /// - Splits on whitespace
    /// - Converts words to lowercase
    /// - Strips sentence punctuation; hyphens inside words are kept
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            match ch {
                c if c.is_whitespace() => {
                    if !current_word.is_empty() {
                        tokens.push(current_word.to_lowercase());
                        current_word.clear();
                    }
                }
                // Punctuation to strip
                '.' | ',' | '!' | '?' | ';' | ':' | '"' | '\'' | '«' | '»' | '(' | ')' => {}
                _ => current_word.push(ch),
            }
        }

        if !current_word.is_empty() {
            tokens.push(current_word.to_lowercase());
        }

        tokens
    }
}
