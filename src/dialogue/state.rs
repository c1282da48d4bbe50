//! Per-conversation dialogue state.

use serde::{Deserialize, Serialize};

use crate::intent::label::IntentLabel;

/// The single memory cell of a conversation.
///
/// Holds the last pending intent so a bare numeric follow-up message can be
/// interpreted as the order identifier the previous turn asked for. The
/// value is only ever `order_status` or `cancel_order`; every other handled
/// intent clears it. One instance per conversation, owned by the caller and
/// never persisted beyond the conversation's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Intent remembered from the previous turn, if any.
    pub pending_intent: Option<IntentLabel>,
}

impl ConversationState {
    /// Create a fresh state with no pending intent.
    pub fn new() -> Self {
        ConversationState::default()
    }

    /// Create a state with a pending intent already set.
    ///
    /// Useful for stateless callers (such as an HTTP layer) that receive
    /// the prior pending intent from the client on each request.
    pub fn with_pending(pending_intent: Option<IntentLabel>) -> Self {
        ConversationState { pending_intent }
    }

    /// Apply the post-turn update rule for a handled intent.
    ///
    /// Order-flow intents are remembered for the next turn; any other
    /// intent clears the memory.
    pub fn update_after_turn(&mut self, intent: IntentLabel) {
        if intent.is_order_flow() {
            self.pending_intent = Some(intent);
        } else {
            self.pending_intent = None;
        }
        debug_assert!(
            self.pending_intent.is_none_or(|label| label.is_order_flow()),
            "pending intent must be an order-flow label"
        );
    }
}
