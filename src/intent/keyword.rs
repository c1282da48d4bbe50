//! Keyword-based intent classifier.
//!
//! Uses simple keyword voting to determine intent. This model exposes no
//! confidence scores, so the gate cannot demote its predictions; it is the
//! concrete degraded mode and doubles as a dependency-free test model.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::intent::classifier::{IntentModel, Prediction};
use crate::intent::label::IntentLabel;

/// Keyword-based intent classifier.
pub struct KeywordClassifier {
    /// Keyword sets per label, in registration order.
    keyword_sets: Vec<(IntentLabel, HashSet<String>)>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for KeywordClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordClassifier")
            .field(
                "labels",
                &self
                    .keyword_sets
                    .iter()
                    .map(|(label, _)| *label)
                    .collect::<Vec<_>>(),
            )
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl KeywordClassifier {
    /// Create an empty keyword classifier.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        KeywordClassifier {
            keyword_sets: Vec::new(),
            analyzer,
        }
    }

    /// Register a keyword set for a label. Registration order breaks ties.
    pub fn with_keywords<I, S>(mut self, label: IntentLabel, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_sets
            .push((label, keywords.into_iter().map(|s| s.into()).collect()));
        self
    }
}

impl IntentModel for KeywordClassifier {
    fn predict(&self, text: &str) -> Result<IntentLabel> {
        let terms: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();

        let mut best_label = IntentLabel::Fallback;
        let mut best_score = 0usize;

        for (label, keywords) in &self.keyword_sets {
            let score = terms.iter().filter(|term| keywords.contains(*term)).count();
            if score > best_score {
                best_score = score;
                best_label = *label;
            }
        }

        Ok(best_label)
    }

    fn predict_proba(&self, _text: &str) -> Result<Option<Prediction>> {
        // Keyword voting has no probabilistic interpretation.
        Ok(None)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
