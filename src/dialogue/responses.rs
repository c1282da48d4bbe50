//! Canned response templates, one per intent label.

use crate::intent::label::IntentLabel;

/// Look up the fixed response template for an intent.
///
/// The match is exhaustive over the closed label set, so there is no
/// "unknown label" case to defend against. `Fallback` returns the generic
/// apology used when the FAQ search also misses.
pub fn canned_response(intent: IntentLabel) -> &'static str {
    match intent {
        IntentLabel::Greeting => "Hi there! How can I help you today?",
        IntentLabel::Goodbye => "Thanks for contacting us. Have a great day!",
        IntentLabel::RefundPolicy => {
            "You can request a refund within 30 days of purchase if the item is unused \
             and in its original packaging. Do you want me to explain the refund steps?"
        }
        IntentLabel::ShippingInfo => {
            "We offer standard (5-7 business days) and express (2-3 business days) shipping. \
             Shipping costs depend on your location and order total."
        }
        IntentLabel::HumanAgent => {
            "Okay, I'll connect you to a human agent. Please wait a moment... \
             If it's urgent, you can also email support@example.com."
        }
        IntentLabel::SmallTalk => {
            "I'm just a bot, but I'm here to help you with your orders and questions!"
        }
        IntentLabel::OrderStatus => {
            "I can help you with your order status. Please provide your order ID (numbers)."
        }
        IntentLabel::CancelOrder => {
            "I can help cancel your order. Please share your order ID."
        }
        IntentLabel::Fallback => {
            "I'm not sure I understood that. You can ask about: order status, refund, \
             shipping, cancellation, or talking to a human."
        }
    }
}
