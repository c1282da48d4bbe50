//! FAQ corpus loading.

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single question/answer pair from the FAQ corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Read-only FAQ corpus, immutable after load.
///
/// Entries keep the insertion order of the source data. Duplicate questions
/// are permitted; disambiguation is the similarity index's concern.
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    entries: Vec<FaqEntry>,
}

impl FaqStore {
    /// Create a store from pre-built entries.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        FaqStore { entries }
    }

    /// Load the FAQ corpus from a CSV file with `question,answer` headers.
    ///
    /// Rows with a missing or empty question or answer are dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())?;

        let mut entries = Vec::new();
        for record in reader.deserialize() {
            let entry: FaqEntry = record?;
            if entry.question.is_empty() || entry.answer.is_empty() {
                continue;
            }
            entries.push(entry);
        }

        log::info!("loaded {} FAQ entries", entries.len());
        Ok(FaqStore { entries })
    }

    /// Get all entries in load order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
