//! Text analysis pipeline for Parlance.
//!
//! Analyzers combine a tokenizer with a chain of token filters to transform
//! raw text into the terms consumed by the TF-IDF vectorizer:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The [`StandardAnalyzer`] provides the default pipeline: regex
//! tokenization, lowercasing, English stop word removal, and word-level
//! unigram + bigram emission.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{LowercaseFilter, NgramFilter, StopFilter, TokenFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};
