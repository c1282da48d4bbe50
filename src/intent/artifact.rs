//! Fitted model artifacts.
//!
//! A [`ModelArtifact`] is the versioned JSON document produced by the
//! offline trainer and loaded at startup. The runtime only loads and
//! queries artifacts, never refits; a version mismatch is fatal because the
//! process must not serve traffic with an unusable classifier.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParlanceError, Result};
use crate::intent::label::IntentLabel;
use crate::vectorize::VectorizerState;

/// Current artifact format version.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// One fitted class centroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCentroid {
    /// Intent label this centroid represents.
    pub label: IntentLabel,
    /// Mean TF-IDF feature vector of the label's training samples.
    pub vector: Vec<f64>,
}

/// Versioned on-disk representation of a fitted classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version, checked at load time.
    pub format_version: u32,
    /// When the model was trained.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Fitted vectorizer state.
    pub vectorizer: VectorizerState,
    /// Per-class centroids.
    pub centroids: Vec<ClassCentroid>,
}

impl ModelArtifact {
    /// Verify the artifact format version.
    pub fn check_version(&self) -> Result<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ParlanceError::model(format!(
                "unsupported artifact format version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        Ok(())
    }

    /// Load an artifact from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ParlanceError::model(format!("cannot read artifact {}: {e}", path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        artifact.check_version()?;

        log::info!(
            "loaded model artifact from {} ({} classes, vocabulary {})",
            path.display(),
            artifact.centroids.len(),
            artifact.vectorizer.vocabulary.len()
        );
        Ok(artifact)
    }

    /// Save the artifact to a JSON file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            trained_at: chrono::Utc::now(),
            vectorizer: VectorizerState {
                vocabulary: vec!["order".to_string(), "cancel".to_string()],
                idf: vec![1.0, 1.4],
                n_documents: 2,
            },
            centroids: vec![ClassCentroid {
                label: IntentLabel::OrderStatus,
                vector: vec![0.5, 0.0],
            }],
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("models").join("intent_classifier.json");

        let original = artifact();
        original.save(&path).unwrap();

        let loaded = ModelArtifact::load(&path).unwrap();
        assert_eq!(loaded.format_version, ARTIFACT_FORMAT_VERSION);
        assert_eq!(loaded.vectorizer.vocabulary, original.vectorizer.vocabulary);
        assert_eq!(loaded.centroids.len(), 1);
        assert_eq!(loaded.centroids[0].label, IntentLabel::OrderStatus);
    }

    #[test]
    fn test_load_rejects_version_mismatch() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("model.json");

        let mut bad = artifact();
        bad.format_version = ARTIFACT_FORMAT_VERSION + 1;
        let content = serde_json::to_string(&bad).unwrap();
        std::fs::write(&path, content).unwrap();

        assert!(ModelArtifact::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(ModelArtifact::load(dir.path().join("absent.json")).is_err());
    }
}
