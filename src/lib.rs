//! # Parlance
//!
//! An intent resolution and dialogue dispatch engine for customer support
//! bots.
//!
//! ## Features
//!
//! - TF-IDF intent classification with a confidence-based fallback gate
//! - Semantic FAQ search by cosine similarity
//! - Minimal per-conversation memory for order-related flows
//! - Order status and cancellation decision logic over a read-only registry
//! - Pluggable text analysis pipeline (tokenizer + filters)

pub mod analysis;
pub mod cli;
pub mod dialogue;
pub mod error;
pub mod faq;
pub mod intent;
pub mod orders;
pub mod vectorize;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
