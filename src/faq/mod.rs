//! FAQ corpus and semantic similarity index.
//!
//! The FAQ corpus is a read-only list of question/answer pairs loaded once
//! at startup. The [`FaqIndex`] fits a TF-IDF vectorizer over the questions
//! and answers nearest-neighbor queries by cosine similarity. It is the
//! secondary resolution path used when intent classification falls back.

pub mod index;
pub mod store;

pub use index::FaqIndex;
pub use store::{FaqEntry, FaqStore};

/// Default similarity threshold below which a query has no FAQ match.
pub const DEFAULT_FAQ_THRESHOLD: f64 = 0.25;
