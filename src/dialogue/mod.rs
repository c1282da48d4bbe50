//! Dialogue state, intent routing, and turn handling.
//!
//! This module ties the classifier, FAQ index, and order registry together
//! into the conversation turn pipeline:
//!
//! ```text
//! raw text → state check → [classifier | short-circuit] → intent
//!          → handler → (FAQ index on fallback) → reply + updated state
//! ```
//!
//! [`ChatEngine`] is the single seam callers (CLI, HTTP, UI) go through; it
//! owns the read-only stores and models, while each conversation's
//! [`ConversationState`] is owned by the caller and threaded through every
//! turn.

pub mod engine;
pub mod handler;
pub mod responses;
pub mod router;
pub mod state;

pub use engine::{ChatEngine, EngineConfig, InteractionLog, TurnOutcome, TurnRecord};
pub use handler::{extract_order_id, handle};
pub use responses::canned_response;
pub use router::resolve;
pub use state::ConversationState;
