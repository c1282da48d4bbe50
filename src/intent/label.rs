//! The closed set of support intents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParlanceError;

/// A closed category of user purpose that determines the response strategy.
///
/// `Fallback` is the only label that triggers the FAQ similarity search;
/// every other label maps to exactly one canned response or handler branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    /// User says hello.
    Greeting,
    /// User says goodbye.
    Goodbye,
    /// User asks about the refund policy.
    RefundPolicy,
    /// User asks about shipping options or costs.
    ShippingInfo,
    /// User wants to talk to a human agent.
    HumanAgent,
    /// Chit-chat with no support purpose.
    SmallTalk,
    /// User asks where an order is.
    OrderStatus,
    /// User wants to cancel an order.
    CancelOrder,
    /// Catch-all when classification confidence is insufficient.
    Fallback,
}

impl IntentLabel {
    /// All labels in declaration order.
    pub const ALL: [IntentLabel; 9] = [
        IntentLabel::Greeting,
        IntentLabel::Goodbye,
        IntentLabel::RefundPolicy,
        IntentLabel::ShippingInfo,
        IntentLabel::HumanAgent,
        IntentLabel::SmallTalk,
        IntentLabel::OrderStatus,
        IntentLabel::CancelOrder,
        IntentLabel::Fallback,
    ];

    /// Get the snake_case wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentLabel::Greeting => "greeting",
            IntentLabel::Goodbye => "goodbye",
            IntentLabel::RefundPolicy => "refund_policy",
            IntentLabel::ShippingInfo => "shipping_info",
            IntentLabel::HumanAgent => "human_agent",
            IntentLabel::SmallTalk => "small_talk",
            IntentLabel::OrderStatus => "order_status",
            IntentLabel::CancelOrder => "cancel_order",
            IntentLabel::Fallback => "fallback",
        }
    }

    /// Check whether this label belongs to the order-related flows that may
    /// persist across turns as a pending intent.
    pub fn is_order_flow(&self) -> bool {
        matches!(self, IntentLabel::OrderStatus | IntentLabel::CancelOrder)
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IntentLabel {
    type Err = ParlanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(IntentLabel::Greeting),
            "goodbye" => Ok(IntentLabel::Goodbye),
            "refund_policy" => Ok(IntentLabel::RefundPolicy),
            "shipping_info" => Ok(IntentLabel::ShippingInfo),
            "human_agent" => Ok(IntentLabel::HumanAgent),
            "small_talk" => Ok(IntentLabel::SmallTalk),
            "order_status" => Ok(IntentLabel::OrderStatus),
            "cancel_order" => Ok(IntentLabel::CancelOrder),
            "fallback" => Ok(IntentLabel::Fallback),
            other => Err(ParlanceError::invalid_argument(format!(
                "unknown intent label: {other}"
            ))),
        }
    }
}
