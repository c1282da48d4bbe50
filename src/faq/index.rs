//! Semantic similarity index over FAQ questions.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::faq::store::FaqEntry;
use crate::vectorize::{TfIdfVectorizer, cosine_similarity};

/// A read-only nearest-neighbor index over FAQ questions.
///
/// The index fits a TF-IDF vectorizer over all questions at build time and
/// keeps one feature vector per entry. Queries are vectorized with the same
/// fitted vocabulary (out-of-vocabulary terms contribute zero weight) and
/// ranked by cosine similarity. The index never mutates after build, so it
/// is safe for unsynchronized concurrent queries.
pub struct FaqIndex {
    vectorizer: TfIdfVectorizer,
    entries: Vec<FaqEntry>,
    vectors: Vec<Vec<f64>>,
}

impl std::fmt::Debug for FaqIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqIndex")
            .field("entries", &self.entries.len())
            .field("vectorizer", &self.vectorizer)
            .finish()
    }
}

impl FaqIndex {
    /// Build an index over the given FAQ entries.
    ///
    /// An empty entry list is permitted; the resulting index never matches.
    pub fn build(entries: Vec<FaqEntry>, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        let questions: Vec<String> = entries.iter().map(|e| e.question.clone()).collect();

        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&questions)?;

        let mut vectors = Vec::with_capacity(entries.len());
        for question in &questions {
            vectors.push(vectorizer.transform(question)?);
        }

        Ok(FaqIndex {
            vectorizer,
            entries,
            vectors,
        })
    }

    /// Find the best-matching FAQ answer for the given query.
    ///
    /// Returns `None` when the query is empty/whitespace-only or when the
    /// best cosine similarity is strictly below `threshold` (a score exactly
    /// at the threshold matches). Ties resolve to the earliest entry in
    /// build order.
    pub fn query(&self, text: &str, threshold: f64) -> Result<Option<&str>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let query_vec = self.vectorizer.transform(text)?;

        let mut best_idx: Option<usize> = None;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, vector) in self.vectors.iter().enumerate() {
            let score = cosine_similarity(&query_vec, vector);
            if score > best_score {
                best_score = score;
                best_idx = Some(idx);
            }
        }

        match best_idx {
            Some(idx) if best_score >= threshold => {
                log::debug!(
                    "faq match: score {:.3} for question {:?}",
                    best_score,
                    self.entries[idx].question
                );
                Ok(Some(self.entries[idx].answer.as_str()))
            }
            _ => Ok(None),
        }
    }

    /// Get the number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
