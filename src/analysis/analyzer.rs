//! Analyzer trait and implementations.
//!
//! Analyzers are the complete text processing pipeline, from raw text to the
//! terms fed into the vectorizer. The [`StandardAnalyzer`] is the default
//! used everywhere in Parlance: regex tokenization, lowercasing, English
//! stop word removal, and unigram + bigram emission.
//!
//! # Examples
//!
//! ```
//! use parlance::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms: Vec<_> = analyzer.analyze("Track the order").unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! // "the" is removed as a stop word, then bigrams are appended
//! assert_eq!(terms, vec!["track", "order", "track order"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, NgramFilter, StopFilter, TokenFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// threads; every implementation in this crate is read-only after
/// construction.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline. Filters run in insertion order.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the number of filters in the pipeline.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// A standard analyzer that provides the default pipeline for Parlance.
///
/// Pipeline: regex tokenizer → lowercase → English stop words →
/// unigrams + bigrams. Bigrams are formed after stop word removal, so
/// "track the order" produces the bigram "track order".
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(NgramFilter::unigrams_and_bigrams()));

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a standard analyzer that emits unigrams only.
    pub fn without_bigrams() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(analyzer: &dyn Analyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_standard_analyzer_pipeline() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let result = terms(&analyzer, "Where IS my Order");
        assert_eq!(result, vec!["where", "my", "order", "where my", "my order"]);
    }

    #[test]
    fn test_standard_analyzer_empty_text() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert!(terms(&analyzer, "").is_empty());
        assert!(terms(&analyzer, "   ").is_empty());
    }

    #[test]
    fn test_standard_analyzer_stop_words_before_bigrams() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let result = terms(&analyzer, "track the order");
        assert!(result.contains(&"track order".to_string()));
        assert!(!result.contains(&"the order".to_string()));
    }

    #[test]
    fn test_without_bigrams() {
        let analyzer = StandardAnalyzer::without_bigrams().unwrap();
        let result = terms(&analyzer, "cancel my order");
        assert_eq!(result, vec!["cancel", "my", "order"]);
    }

    #[test]
    fn test_pipeline_analyzer_custom() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["hello"])));

        assert_eq!(analyzer.filter_count(), 2);
        let result: Vec<String> = analyzer
            .analyze("Hello World")
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(result, vec!["world"]);
    }
}
