//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer is fit once over a corpus and then transforms arbitrary
//! text into dense feature vectors using the fitted vocabulary. Terms not
//! seen at fit time contribute zero weight; the vocabulary is never refit at
//! transform time.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{ParlanceError, Result};

/// Calculate cosine similarity between two vectors.
///
/// Returns 0.0 if the vectors have different lengths or either has zero
/// magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}

/// Serializable fitted state of a [`TfIdfVectorizer`].
///
/// The analyzer is not part of the state; it is reconstructed
/// deterministically when the vectorizer is restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerState {
    /// Vocabulary terms in index order.
    pub vocabulary: Vec<String>,
    /// Inverse document frequency for each vocabulary index.
    pub idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    pub n_documents: usize,
}

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on a corpus of documents.
    ///
    /// Builds the vocabulary in first-seen order and computes smooth IDF:
    /// `ln((N + 1) / (df + 1)) + 1`.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.analyze_terms(doc)?;
            let mut seen: Vec<String> = Vec::new();
            for token in tokens {
                if !seen.contains(&token) {
                    seen.push(token);
                }
            }

            for token in seen {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token, idx);
                }
            }
        }

        let mut idf = vec![0.0; vocabulary.len()];
        for (term, idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Only fitted vocabulary terms contribute; out-of-vocabulary terms are
    /// ignored. Term frequencies are normalized by token count before the
    /// IDF weights are applied.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.analyze_terms(document)?;
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Export the fitted state for persistence.
    pub fn state(&self) -> VectorizerState {
        let mut vocabulary = vec![String::new(); self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            vocabulary[idx] = term.clone();
        }
        VectorizerState {
            vocabulary,
            idf: self.idf.clone(),
            n_documents: self.n_documents,
        }
    }

    /// Restore a fitted vectorizer from persisted state.
    pub fn from_state(state: VectorizerState, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if state.vocabulary.len() != state.idf.len() {
            return Err(ParlanceError::vectorize(format!(
                "vocabulary length ({}) does not match idf length ({})",
                state.vocabulary.len(),
                state.idf.len()
            )));
        }

        let vocabulary: AHashMap<String, usize> = state
            .vocabulary
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        Ok(Self {
            vocabulary,
            idf: state.idf,
            n_documents: state.n_documents,
            analyzer,
        })
    }

    fn analyze_terms(&self, text: &str) -> Result<Vec<String>> {
        let terms: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(terms)
    }
}
