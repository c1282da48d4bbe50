//! Centroid-based intent classifier using TF-IDF features.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::{ParlanceError, Result};
use crate::intent::artifact::ModelArtifact;
use crate::intent::classifier::{IntentModel, Prediction};
use crate::intent::label::IntentLabel;
use crate::vectorize::{TfIdfVectorizer, cosine_similarity};

/// A fitted intent classifier.
///
/// The model keeps one centroid (mean TF-IDF vector of the training
/// samples) per intent label. Prediction computes the cosine similarity of
/// the message against every centroid and normalizes the positive scores
/// into a distribution; the arg-max class and its normalized score form the
/// prediction. Labels are stored in sorted order so inference is
/// deterministic.
pub struct CentroidClassifier {
    /// TF-IDF vectorizer fitted over the training corpus.
    vectorizer: TfIdfVectorizer,
    /// Intent labels in sorted order, one per centroid.
    labels: Vec<IntentLabel>,
    /// One mean feature vector per label.
    centroids: Vec<Vec<f64>>,
}

impl std::fmt::Debug for CentroidClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentroidClassifier")
            .field("labels", &self.labels)
            .field("vectorizer", &self.vectorizer)
            .finish()
    }
}

impl CentroidClassifier {
    /// Create a classifier from already-fitted parts.
    ///
    /// `labels` and `centroids` must be parallel and `labels` must be
    /// sorted; [`trainer::train`](crate::intent::trainer::train) and
    /// [`from_artifact`](Self::from_artifact) uphold this.
    pub(crate) fn from_parts(
        vectorizer: TfIdfVectorizer,
        labels: Vec<IntentLabel>,
        centroids: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if labels.len() != centroids.len() {
            return Err(ParlanceError::model(format!(
                "label count ({}) does not match centroid count ({})",
                labels.len(),
                centroids.len()
            )));
        }
        if labels.is_empty() {
            return Err(ParlanceError::model("classifier has no classes"));
        }
        Ok(CentroidClassifier {
            vectorizer,
            labels,
            centroids,
        })
    }

    /// Reconstruct a fitted classifier from a persisted artifact.
    pub fn from_artifact(artifact: ModelArtifact, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        artifact.check_version()?;

        let vectorizer = TfIdfVectorizer::from_state(artifact.vectorizer, analyzer)?;

        let mut pairs: Vec<(IntentLabel, Vec<f64>)> = artifact
            .centroids
            .into_iter()
            .map(|c| (c.label, c.vector))
            .collect();
        pairs.sort_by_key(|(label, _)| *label);

        let (labels, centroids): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self::from_parts(vectorizer, labels, centroids)
    }

    /// Get the classes this model was trained on.
    pub fn labels(&self) -> &[IntentLabel] {
        &self.labels
    }

    fn predict_impl(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.transform(text)?;

        let mut scores: Vec<f64> = Vec::with_capacity(self.centroids.len());
        for centroid in &self.centroids {
            scores.push(cosine_similarity(&features, centroid).max(0.0));
        }

        let total: f64 = scores.iter().sum();
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        // All-zero scores give zero confidence, which the gate demotes.
        let confidence = if total > 0.0 { best_score / total } else { 0.0 };

        Ok(Prediction {
            label: self.labels[best_idx],
            confidence,
        })
    }
}

impl IntentModel for CentroidClassifier {
    fn predict(&self, text: &str) -> Result<IntentLabel> {
        Ok(self.predict_impl(text)?.label)
    }

    fn predict_proba(&self, text: &str) -> Result<Option<Prediction>> {
        Ok(Some(self.predict_impl(text)?))
    }

    fn name(&self) -> &str {
        "centroid"
    }
}
