//! Token types for text analysis.
//!
//! A [`Token`] is the fundamental unit that flows through the analysis
//! pipeline. Unlike a full search engine, classification only needs the term
//! text and its position in the stream, so tokens carry no offsets or
//! scoring metadata.
//!
//! # Examples
//!
//! ```
//! use parlance::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            position: self.position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_with_text() {
        let token = Token::new("Hello", 3);
        let lowered = token.with_text("hello");
        assert_eq!(lowered.text, "hello");
        assert_eq!(lowered.position, 3);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }
}
