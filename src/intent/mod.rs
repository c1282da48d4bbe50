//! Intent classification.
//!
//! This module provides intent resolution for support-bot messages:
//!
//! - [`IntentLabel`]: the closed set of supported intents
//! - [`IntentModel`] trait: common interface for all classifiers
//! - [`CentroidClassifier`]: TF-IDF + cosine similarity model with
//!   per-class confidences
//! - [`KeywordClassifier`]: keyword-voting model without confidences
//! - [`GatedClassifier`]: confidence threshold that demotes low-confidence
//!   predictions to [`IntentLabel::Fallback`]
//! - [`ModelArtifact`]: versioned on-disk format for fitted models
//! - [`trainer`]: one-shot offline fitting, never on the serving path
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use parlance::analysis::StandardAnalyzer;
//! use parlance::intent::{GatedClassifier, trainer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Arc::new(StandardAnalyzer::new()?);
//! let samples = trainer::load_training_samples("data/intents.csv")?;
//! let (classifier, _artifact) = trainer::train(samples, analyzer)?;
//!
//! let gated = GatedClassifier::new(Box::new(classifier), 0.3);
//! let label = gated.resolve("where is my order")?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod centroid;
pub mod classifier;
pub mod keyword;
pub mod label;
pub mod trainer;

pub use artifact::{ARTIFACT_FORMAT_VERSION, ModelArtifact};
pub use centroid::CentroidClassifier;
pub use classifier::{GatedClassifier, IntentModel, Prediction};
pub use keyword::KeywordClassifier;
pub use label::IntentLabel;
pub use trainer::IntentSample;

/// Default confidence threshold below which a prediction falls back.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;
