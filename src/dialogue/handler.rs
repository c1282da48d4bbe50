//! Intent handling.
//!
//! Pure decision logic mapping (intent, text, stores) to a response. The
//! handler never mutates the stores and keeps no state of its own; the
//! per-conversation memory lives in the caller-owned
//! [`ConversationState`](super::state::ConversationState).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::faq::FaqIndex;
use crate::intent::label::IntentLabel;
use crate::orders::{OrderRecord, OrderStore};

use super::responses::canned_response;

lazy_static! {
    // Order IDs are runs of 5 or more digits on word boundaries.
    static ref ORDER_ID_PATTERN: Regex = Regex::new(r"\b\d{5,}\b").unwrap();
}

/// Extract a numeric order ID from the user's text, if present.
///
/// Returns the leftmost run of 5 or more consecutive decimal digits bounded
/// by non-digit boundaries.
pub fn extract_order_id(text: &str) -> Option<&str> {
    ORDER_ID_PATTERN.find(text).map(|mat| mat.as_str())
}

/// Decide the reply for an intent.
///
/// `faq_threshold` is the similarity cutoff for the fallback FAQ search.
pub fn handle(
    intent: IntentLabel,
    text: &str,
    orders: &OrderStore,
    faq: &FaqIndex,
    faq_threshold: f64,
) -> Result<String> {
    match intent {
        IntentLabel::OrderStatus => Ok(handle_order_status(text, orders)),
        IntentLabel::CancelOrder => Ok(handle_cancel_order(text, orders)),
        IntentLabel::Fallback => {
            let answer = faq.query(text, faq_threshold)?;
            Ok(match answer {
                Some(answer) => answer.to_string(),
                None => canned_response(IntentLabel::Fallback).to_string(),
            })
        }
        other => Ok(canned_response(other).to_string()),
    }
}

fn handle_order_status(text: &str, orders: &OrderStore) -> String {
    let Some(order_id) = extract_order_id(text) else {
        return "Please provide your order ID (e.g., a 6-8 digit number).".to_string();
    };

    match orders.get(order_id) {
        Some(info) => format_order_summary(order_id, info),
        None => format!(
            "I couldn't find any details for order {order_id}. \
             Please double-check the order ID or contact support if you think this is a mistake."
        ),
    }
}

fn format_order_summary(order_id: &str, info: &OrderRecord) -> String {
    format!(
        "Here's what I found for order {order_id}:\n\
         - Status: {}\n\
         - Estimated delivery: {}\n\
         - Total amount: {}\n\
         - Shipping provider: {}\n\
         If you have more questions about this order, you can ask me!",
        info.status, info.eta, info.total, info.shipping_provider
    )
}

fn handle_cancel_order(text: &str, orders: &OrderStore) -> String {
    let Some(order_id) = extract_order_id(text) else {
        return "To cancel an order, please tell me your order ID (e.g., a 6-8 digit number)."
            .to_string();
    };

    let Some(info) = orders.get(order_id) else {
        return format!(
            "I couldn't find any details for order {order_id}. \
             Please double-check the order ID or contact support for help with cancellation."
        );
    };

    match info.status.to_lowercase().as_str() {
        "processing" => format!(
            "Order {order_id} is currently in Processing and has been marked for cancellation. \
             You'll receive a confirmation email shortly, and any payment will be refunded \
             according to our refund policy."
        ),
        "shipped" => format!(
            "Order {order_id} has already been Shipped. \
             We can no longer cancel it at this stage. You may refuse delivery or request \
             a return once it arrives."
        ),
        "delivered" => format!(
            "Order {order_id} has already been Delivered. \
             We cannot cancel a delivered order, but you may be able to request a return \
             or refund depending on our return policy."
        ),
        "cancelled" => format!(
            "Order {order_id} is already marked as Cancelled. \
             If you didn't request this, please contact support."
        ),
        _ => format!(
            "Order {order_id} has status {}. \
             Please contact support if you'd like to change or cancel this order.",
            info.status
        ),
    }
}
