//! Token filter implementations for token transformation.
//!
//! Filters transform a token stream: lowercasing, stop word removal, and
//! word n-gram expansion. Filters are applied sequentially in the order they
//! are added to a pipeline.

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Default English stop words list.
///
/// Common English words that typically carry no classification signal.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A filter that converts all token text to lowercase.
///
/// # Examples
///
/// ```
/// use parlance::analysis::token_filter::{LowercaseFilter, TokenFilter};
/// use parlance::analysis::token::Token;
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "hello");
/// assert_eq!(result[1].text, "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered = tokens.map(|token| {
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        });
        Ok(Box::new(filtered))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that removes common stop words from the token stream.
///
/// Positions of surviving tokens are reassigned so downstream n-gram
/// generation sees a contiguous stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: HashSet<String>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: DEFAULT_ENGLISH_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Check whether a word is in the stop list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = self.stop_words.clone();
        let filtered: Vec<Token> = tokens
            .filter(|token| !stop_words.contains(&token.text))
            .enumerate()
            .map(|(position, token)| Token::new(token.text, position))
            .collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// A filter that expands the token stream with word n-grams.
///
/// N-grams are built over adjacent tokens *after* earlier filters have run,
/// joined with a single space. With `min_gram = 1` and `max_gram = 2` the
/// output contains the original unigrams followed by all bigrams, matching
/// the common `ngram_range=(1, 2)` vectorizer setting.
///
/// # Examples
///
/// ```
/// use parlance::analysis::token_filter::{NgramFilter, TokenFilter};
/// use parlance::analysis::token::Token;
///
/// let filter = NgramFilter::unigrams_and_bigrams();
/// let tokens = vec![Token::new("track", 0), Token::new("my", 1), Token::new("order", 2)];
/// let result: Vec<String> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
///
/// assert_eq!(result, vec!["track", "my", "order", "track my", "my order"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramFilter {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramFilter {
    /// Create a new n-gram filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram < min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(crate::error::ParlanceError::analysis(
                "min_gram must be at least 1".to_string(),
            ));
        }
        if max_gram < min_gram {
            return Err(crate::error::ParlanceError::analysis(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(Self { min_gram, max_gram })
    }

    /// Create a filter emitting unigrams and bigrams (n = 1..=2).
    pub fn unigrams_and_bigrams() -> Self {
        Self {
            min_gram: 1,
            max_gram: 2,
        }
    }
}

impl TokenFilter for NgramFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words: Vec<String> = tokens.map(|t| t.text).collect();
        let mut output = Vec::new();

        for n in self.min_gram..=self.max_gram {
            if n > words.len() {
                break;
            }
            for window in words.windows(n) {
                output.push(window.join(" "));
            }
        }

        let tokens: Vec<Token> = output
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    fn texts(stream: TokenStream) -> Vec<String> {
        stream.map(|t| t.text).collect()
    }

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let result = texts(filter.filter(stream(&["The", "QUICK", "Brown"])).unwrap());
        assert_eq!(result, vec!["the", "quick", "brown"]);
    }

    #[test]
    fn test_stop_filter_default_words() {
        let filter = StopFilter::new();
        let result = texts(filter.filter(stream(&["the", "quick", "brown"])).unwrap());
        assert_eq!(result, vec!["quick", "brown"]);
    }

    #[test]
    fn test_stop_filter_reassigns_positions() {
        let filter = StopFilter::new();
        let result: Vec<Token> = filter
            .filter(stream(&["the", "quick", "brown"]))
            .unwrap()
            .collect();
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].position, 1);
    }

    #[test]
    fn test_stop_filter_custom_words() {
        let filter = StopFilter::from_words(vec!["foo"]);
        let result = texts(filter.filter(stream(&["foo", "bar"])).unwrap());
        assert_eq!(result, vec!["bar"]);
        assert!(filter.is_stop_word("foo"));
        assert!(!filter.is_stop_word("the"));
    }

    #[test]
    fn test_ngram_filter_unigrams_and_bigrams() {
        let filter = NgramFilter::unigrams_and_bigrams();
        let result = texts(filter.filter(stream(&["cancel", "my", "order"])).unwrap());
        assert_eq!(
            result,
            vec!["cancel", "my", "order", "cancel my", "my order"]
        );
    }

    #[test]
    fn test_ngram_filter_single_token() {
        let filter = NgramFilter::unigrams_and_bigrams();
        let result = texts(filter.filter(stream(&["hello"])).unwrap());
        assert_eq!(result, vec!["hello"]);
    }

    #[test]
    fn test_ngram_filter_invalid_bounds() {
        assert!(NgramFilter::new(0, 2).is_err());
        assert!(NgramFilter::new(3, 2).is_err());
    }
}
