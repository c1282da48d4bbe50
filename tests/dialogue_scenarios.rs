//! End-to-end conversation turn scenarios.

use std::sync::Arc;

use parlance::analysis::StandardAnalyzer;
use parlance::dialogue::{ChatEngine, ConversationState, EngineConfig};
use parlance::faq::{FaqEntry, FaqIndex};
use parlance::intent::{GatedClassifier, IntentLabel, IntentSample, trainer};
use parlance::orders::{OrderRecord, OrderStore};

fn sample(text: &str, intent: IntentLabel) -> IntentSample {
    IntentSample {
        text: text.to_string(),
        intent,
    }
}

fn training_corpus() -> Vec<IntentSample> {
    vec![
        sample("hello", IntentLabel::Greeting),
        sample("hi there", IntentLabel::Greeting),
        sample("good morning", IntentLabel::Greeting),
        sample("bye bye", IntentLabel::Goodbye),
        sample("goodbye see you", IntentLabel::Goodbye),
        sample("thanks goodbye", IntentLabel::Goodbye),
        sample("what is your refund policy", IntentLabel::RefundPolicy),
        sample("can i get a refund", IntentLabel::RefundPolicy),
        sample("how do refunds work", IntentLabel::RefundPolicy),
        sample("do you ship internationally", IntentLabel::ShippingInfo),
        sample("how long does shipping take", IntentLabel::ShippingInfo),
        sample("shipping costs", IntentLabel::ShippingInfo),
        sample("talk to a human", IntentLabel::HumanAgent),
        sample("connect me to an agent", IntentLabel::HumanAgent),
        sample("i want a real person", IntentLabel::HumanAgent),
        sample("how are you doing", IntentLabel::SmallTalk),
        sample("are you a robot", IntentLabel::SmallTalk),
        sample("tell me a joke", IntentLabel::SmallTalk),
        sample("where is my order", IntentLabel::OrderStatus),
        sample("track my order", IntentLabel::OrderStatus),
        sample("order status please", IntentLabel::OrderStatus),
        sample("when will my order arrive", IntentLabel::OrderStatus),
        sample("cancel my order", IntentLabel::CancelOrder),
        sample("i want to cancel my purchase", IntentLabel::CancelOrder),
        sample("please cancel", IntentLabel::CancelOrder),
        sample("stop my order cancel it", IntentLabel::CancelOrder),
    ]
}

fn build_engine() -> ChatEngine {
    let analyzer = Arc::new(StandardAnalyzer::new().unwrap());

    let (classifier, _artifact) = trainer::train(training_corpus(), analyzer.clone()).unwrap();
    let config = EngineConfig::default();
    let gated = GatedClassifier::new(Box::new(classifier), config.classifier_threshold);

    let orders = OrderStore::from_records(vec![
        (
            "555555".to_string(),
            OrderRecord {
                status: "Processing".to_string(),
                eta: "2026-09-05".to_string(),
                total: "$49.99".to_string(),
                shipping_provider: "DHL".to_string(),
            },
        ),
        (
            "777777".to_string(),
            OrderRecord {
                status: "Shipped".to_string(),
                eta: "2026-09-02".to_string(),
                total: "$12.00".to_string(),
                shipping_provider: "UPS".to_string(),
            },
        ),
    ]);

    let faq = FaqIndex::build(
        vec![
            FaqEntry {
                question: "What payment methods do you accept?".to_string(),
                answer: "We accept credit cards and PayPal.".to_string(),
            },
            FaqEntry {
                question: "How do I change my shipping address?".to_string(),
                answer: "Contact support before the order ships.".to_string(),
            },
        ],
        analyzer,
    )
    .unwrap();

    ChatEngine::new(orders, faq, gated, config)
}

#[test]
fn scenario_order_status_prompt() {
    // Input "where is my order" with no prior state resolves to order_status,
    // replies with the order-ID prompt, and leaves order_status pending.
    let engine = build_engine();
    let mut state = ConversationState::new();

    let outcome = engine.handle_turn("where is my order", &mut state).unwrap();

    assert_eq!(outcome.intent, IntentLabel::OrderStatus);
    assert!(outcome.reply.contains("provide your order ID"));
    assert_eq!(state.pending_intent, Some(IntentLabel::OrderStatus));
}

#[test]
fn scenario_pending_order_status_with_unknown_id() {
    // A bare digit follow-up with order_status pending hits the not-found
    // branch and keeps order_status pending.
    let engine = build_engine();
    let mut state = ConversationState::with_pending(Some(IntentLabel::OrderStatus));

    let outcome = engine.handle_turn("123456", &mut state).unwrap();

    assert_eq!(outcome.intent, IntentLabel::OrderStatus);
    assert!(outcome.reply.contains("couldn't find"));
    assert!(outcome.reply.contains("123456"));
    assert_eq!(state.pending_intent, Some(IntentLabel::OrderStatus));
}

#[test]
fn scenario_cancel_processing_order() {
    // Order 555555 exists with status Processing; a cancel request with the
    // id inline confirms cancellation.
    let engine = build_engine();
    let mut state = ConversationState::new();

    let outcome = engine
        .handle_turn("please cancel 555555", &mut state)
        .unwrap();

    assert_eq!(outcome.intent, IntentLabel::CancelOrder);
    assert!(outcome.reply.contains("555555"));
    assert!(outcome.reply.contains("marked for cancellation"));
    assert_eq!(state.pending_intent, Some(IntentLabel::CancelOrder));
}

#[test]
fn scenario_multi_turn_status_lookup() {
    // Full two-turn flow: prompt, then a bare id resolves via the pending
    // intent and returns the order summary.
    let engine = build_engine();
    let mut state = ConversationState::new();

    let first = engine.handle_turn("track my order", &mut state).unwrap();
    assert_eq!(first.intent, IntentLabel::OrderStatus);

    let second = engine.handle_turn("555555", &mut state).unwrap();
    assert_eq!(second.intent, IntentLabel::OrderStatus);
    assert!(second.reply.contains("Status: Processing"));
    assert!(second.reply.contains("Shipping provider: DHL"));
}

#[test]
fn scenario_digit_short_circuit_under_cancel() {
    let engine = build_engine();
    let mut state = ConversationState::with_pending(Some(IntentLabel::CancelOrder));

    let outcome = engine.handle_turn("777777", &mut state).unwrap();

    assert_eq!(outcome.intent, IntentLabel::CancelOrder);
    assert!(outcome.reply.contains("already been Shipped"));
    assert_eq!(state.pending_intent, Some(IntentLabel::CancelOrder));
}

#[test]
fn scenario_non_order_intent_clears_pending_state() {
    let engine = build_engine();
    let mut state = ConversationState::with_pending(Some(IntentLabel::OrderStatus));

    let outcome = engine.handle_turn("hello", &mut state).unwrap();

    assert_eq!(outcome.intent, IntentLabel::Greeting);
    assert_eq!(state.pending_intent, None);
}

#[test]
fn scenario_fallback_clears_pending_state() {
    let engine = build_engine();
    let mut state = ConversationState::with_pending(Some(IntentLabel::CancelOrder));

    // Out-of-vocabulary text yields zero confidence and falls back; the
    // fallback turn clears the pending intent too.
    let outcome = engine.handle_turn("xyzzy plugh quux", &mut state).unwrap();

    assert_eq!(outcome.intent, IntentLabel::Fallback);
    assert_eq!(state.pending_intent, None);
}

#[test]
fn scenario_fallback_answers_from_faq() {
    let engine = build_engine();
    let mut state = ConversationState::new();

    // No training sample mentions payments, so classification has zero
    // confidence and falls back to the FAQ index.
    let outcome = engine
        .handle_turn("payment methods accepted", &mut state)
        .unwrap();

    assert_eq!(outcome.intent, IntentLabel::Fallback);
    assert_eq!(outcome.reply, "We accept credit cards and PayPal.");
    assert_eq!(state.pending_intent, None);
}

#[test]
fn resolved_intents_stay_in_the_closed_set() {
    let engine = build_engine();

    for text in [
        "hello",
        "please cancel 555555",
        "",
        "   ",
        "1234",
        "123456",
        "complete gibberish xyzzy",
        "what payment methods do you accept",
    ] {
        let mut state = ConversationState::new();
        let outcome = engine.handle_turn(text, &mut state).unwrap();
        assert!(
            IntentLabel::ALL.contains(&outcome.intent),
            "unexpected label for {text:?}"
        );
        assert!(!outcome.reply.is_empty());
    }
}

#[test]
fn repeated_turns_are_idempotent() {
    let engine = build_engine();

    for text in ["where is my order", "cancel 555555", "hello", "777777"] {
        let mut state_a = ConversationState::with_pending(Some(IntentLabel::OrderStatus));
        let mut state_b = ConversationState::with_pending(Some(IntentLabel::OrderStatus));

        let a = engine.handle_turn(text, &mut state_a).unwrap();
        let b = engine.handle_turn(text, &mut state_b).unwrap();

        assert_eq!(a, b);
        assert_eq!(state_a, state_b);
    }
}

#[test]
fn artifact_round_trip_preserves_turn_behavior() {
    let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
    let (classifier, artifact) = trainer::train(training_corpus(), analyzer.clone()).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    artifact.save(&path).unwrap();

    let reloaded = parlance::intent::ModelArtifact::load(&path).unwrap();
    let restored =
        parlance::intent::CentroidClassifier::from_artifact(reloaded, analyzer).unwrap();

    use parlance::intent::IntentModel;
    for text in ["where is my order", "hello", "please cancel", "gibberish"] {
        assert_eq!(
            classifier.predict_proba(text).unwrap(),
            restored.predict_proba(text).unwrap()
        );
    }
}
