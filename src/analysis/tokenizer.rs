//! Tokenizer implementations.
//!
//! Tokenizers split raw text into tokens. The default [`RegexTokenizer`]
//! extracts sequences of word characters, which matches the word-splitting
//! behavior of common bag-of-words vectorizers.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{ParlanceError, Result};

/// Trait for tokenizers that split text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// The default pattern `r"\w+"` matches sequences of word characters.
///
/// # Examples
///
/// ```
/// use parlance::analysis::tokenizer::{RegexTokenizer, Tokenizer};
///
/// let tokenizer = RegexTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("where is my order?").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["where", "is", "my", "order"]);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ParlanceError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer_default() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<_> = tokenizer
            .tokenize("Hello, world! 123")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "123");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_regex_tokenizer_empty_input() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_regex_tokenizer_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("abc DEF ghi").unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].text, "ghi");
    }

    #[test]
    fn test_regex_tokenizer_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[");
        assert!(result.is_err());
    }
}
