//! Vector-space text representation.
//!
//! This module provides the TF-IDF vectorizer shared by the intent
//! classifier and the FAQ similarity index, plus the cosine similarity
//! helper used to compare the resulting vectors.

pub mod tfidf;

pub use tfidf::{TfIdfVectorizer, VectorizerState, cosine_similarity};
