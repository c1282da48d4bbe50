//! Offline model fitting.
//!
//! Training is a one-shot batch job: it fits the TF-IDF vectorizer over the
//! labeled corpus, averages per-label feature vectors into centroids, and
//! produces both a ready [`CentroidClassifier`] and the [`ModelArtifact`]
//! to persist. Nothing here runs on the serving path.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{ParlanceError, Result};
use crate::intent::artifact::{ARTIFACT_FORMAT_VERSION, ClassCentroid, ModelArtifact};
use crate::intent::centroid::CentroidClassifier;
use crate::intent::label::IntentLabel;
use crate::vectorize::TfIdfVectorizer;

/// Training sample for intent classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSample {
    /// Message text.
    pub text: String,
    /// Intent label.
    pub intent: IntentLabel,
}

/// Load training samples from a CSV file with `text,intent` headers.
pub fn load_training_samples<P: AsRef<Path>>(path: P) -> Result<Vec<IntentSample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut samples = Vec::new();
    for record in reader.deserialize() {
        let sample: IntentSample = record?;
        samples.push(sample);
    }
    Ok(samples)
}

/// Fit a centroid classifier from labeled samples.
///
/// Samples labeled `fallback` are rejected: the fallback label is produced
/// by the confidence gate, never predicted directly.
pub fn train(
    samples: Vec<IntentSample>,
    analyzer: Arc<dyn Analyzer>,
) -> Result<(CentroidClassifier, ModelArtifact)> {
    if samples.is_empty() {
        return Err(ParlanceError::model("training samples cannot be empty"));
    }
    if samples.iter().any(|s| s.intent == IntentLabel::Fallback) {
        return Err(ParlanceError::model(
            "fallback is not a trainable intent label",
        ));
    }

    let documents: Vec<String> = samples.iter().map(|s| s.text.clone()).collect();

    let mut vectorizer = TfIdfVectorizer::new(analyzer);
    vectorizer.fit(&documents)?;

    // BTreeMap keeps the label order sorted and therefore deterministic.
    let mut grouped: BTreeMap<IntentLabel, Vec<Vec<f64>>> = BTreeMap::new();
    for sample in &samples {
        let features = vectorizer.transform(&sample.text)?;
        grouped.entry(sample.intent).or_default().push(features);
    }

    let mut labels = Vec::with_capacity(grouped.len());
    let mut centroids = Vec::with_capacity(grouped.len());
    for (label, vectors) in grouped {
        let dim = vectorizer.vocabulary_size();
        let mut centroid = vec![0.0; dim];
        for vector in &vectors {
            for (slot, value) in centroid.iter_mut().zip(vector.iter()) {
                *slot += value;
            }
        }
        let count = vectors.len() as f64;
        for slot in &mut centroid {
            *slot /= count;
        }
        labels.push(label);
        centroids.push(centroid);
    }

    log::info!(
        "trained centroid classifier: {} samples, {} classes, vocabulary {}",
        samples.len(),
        labels.len(),
        vectorizer.vocabulary_size()
    );

    let artifact = ModelArtifact {
        format_version: ARTIFACT_FORMAT_VERSION,
        trained_at: chrono::Utc::now(),
        vectorizer: vectorizer.state(),
        centroids: labels
            .iter()
            .zip(centroids.iter())
            .map(|(label, vector)| ClassCentroid {
                label: *label,
                vector: vector.clone(),
            })
            .collect(),
    };

    let classifier = CentroidClassifier::from_parts(vectorizer, labels, centroids)?;
    Ok((classifier, artifact))
}
