//! Intent classifier trait and the confidence gate.

use crate::error::Result;
use crate::intent::label::IntentLabel;

/// A single prediction with its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted label.
    pub label: IntentLabel,
    /// Confidence in the prediction, in `[0, 1]`.
    pub confidence: f64,
}

/// Intent classifier trait.
///
/// Implementations provide different methods of classifying a message into
/// an [`IntentLabel`]. Inference must be deterministic: identical text and
/// identical fitted parameters always yield the identical result.
pub trait IntentModel: Send + Sync {
    /// Predict the intent for a given message.
    fn predict(&self, text: &str) -> Result<IntentLabel>;

    /// Predict the intent together with a confidence score.
    ///
    /// Returns `Ok(None)` when this model cannot produce confidences. Such
    /// models still classify, but the confidence gate cannot demote their
    /// low-quality predictions (degraded mode).
    fn predict_proba(&self, text: &str) -> Result<Option<Prediction>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// Wraps an [`IntentModel`] with a confidence threshold.
///
/// When the underlying model reports a confidence strictly below the
/// threshold, the prediction is demoted to [`IntentLabel::Fallback`]. When
/// the model reports no confidence at all, its raw label passes through
/// unchanged.
pub struct GatedClassifier {
    model: Box<dyn IntentModel>,
    threshold: f64,
}

impl std::fmt::Debug for GatedClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatedClassifier")
            .field("model", &self.model.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl GatedClassifier {
    /// Create a new gated classifier with the given confidence threshold.
    pub fn new(model: Box<dyn IntentModel>, threshold: f64) -> Self {
        GatedClassifier { model, threshold }
    }

    /// Resolve the effective intent for a message.
    pub fn resolve(&self, text: &str) -> Result<IntentLabel> {
        match self.model.predict_proba(text)? {
            Some(prediction) => {
                if prediction.confidence < self.threshold {
                    log::debug!(
                        "demoting {} (confidence {:.3} < {:.3}) to fallback",
                        prediction.label,
                        prediction.confidence,
                        self.threshold
                    );
                    Ok(IntentLabel::Fallback)
                } else {
                    Ok(prediction.label)
                }
            }
            None => {
                // Model exposes no confidences; pass the raw label through.
                log::debug!("model {} has no confidence scores", self.model.name());
                self.model.predict(text)
            }
        }
    }

    /// Get the configured confidence threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
