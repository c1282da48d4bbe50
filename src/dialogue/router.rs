//! Intent routing.

use crate::error::Result;
use crate::intent::classifier::GatedClassifier;
use crate::intent::label::IntentLabel;

use super::state::ConversationState;

/// Decide the effective intent for a message.
///
/// If the trimmed message consists only of decimal digits and the previous
/// turn left an order-flow intent pending, that intent is returned verbatim
/// without invoking the classifier: a bare digit string following an
/// order-related prompt is almost certainly the requested order identifier,
/// not a new intent. Otherwise the gated classifier decides.
///
/// This function never mutates `state`; the post-turn update is the turn
/// engine's responsibility.
pub fn resolve(
    text: &str,
    state: &ConversationState,
    classifier: &GatedClassifier,
) -> Result<IntentLabel> {
    let trimmed = text.trim();
    let all_digits = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());

    if all_digits
        && let Some(pending) = state.pending_intent
        && pending.is_order_flow()
    {
        log::debug!("digit short-circuit to pending intent {pending}");
        return Ok(pending);
    }

    classifier.resolve(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::classifier::{IntentModel, Prediction};

    struct AlwaysGreeting;

    impl IntentModel for AlwaysGreeting {
        fn predict(&self, _text: &str) -> Result<IntentLabel> {
            Ok(IntentLabel::Greeting)
        }

        fn predict_proba(&self, _text: &str) -> Result<Option<Prediction>> {
            Ok(Some(Prediction {
                label: IntentLabel::Greeting,
                confidence: 0.9,
            }))
        }

        fn name(&self) -> &str {
            "always_greeting"
        }
    }

    fn classifier() -> GatedClassifier {
        GatedClassifier::new(Box::new(AlwaysGreeting), 0.3)
    }

    #[test]
    fn test_digit_short_circuit_with_pending_order_status() {
        let state = ConversationState::with_pending(Some(IntentLabel::OrderStatus));
        let intent = resolve("123456", &state, &classifier()).unwrap();
        assert_eq!(intent, IntentLabel::OrderStatus);
    }

    #[test]
    fn test_digit_short_circuit_with_pending_cancel_order() {
        let state = ConversationState::with_pending(Some(IntentLabel::CancelOrder));
        // Classifier would say greeting; the short-circuit wins regardless.
        let intent = resolve("  99999  ", &state, &classifier()).unwrap();
        assert_eq!(intent, IntentLabel::CancelOrder);
    }

    #[test]
    fn test_digits_without_pending_intent_classify_normally() {
        let state = ConversationState::new();
        let intent = resolve("123456", &state, &classifier()).unwrap();
        assert_eq!(intent, IntentLabel::Greeting);
    }

    #[test]
    fn test_non_digit_text_classifies_normally() {
        let state = ConversationState::with_pending(Some(IntentLabel::OrderStatus));
        let intent = resolve("order 123456", &state, &classifier()).unwrap();
        assert_eq!(intent, IntentLabel::Greeting);
    }

    #[test]
    fn test_empty_text_classifies_normally() {
        let state = ConversationState::with_pending(Some(IntentLabel::OrderStatus));
        let intent = resolve("   ", &state, &classifier()).unwrap();
        assert_eq!(intent, IntentLabel::Greeting);
    }
}
