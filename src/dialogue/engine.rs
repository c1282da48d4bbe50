//! The conversation turn engine.
//!
//! [`ChatEngine`] is constructed once at process startup from the read-only
//! stores and the fitted classifier, and is the single seam outer layers
//! call. It takes `&self` only; the per-conversation mutability lives in
//! the caller-owned [`ConversationState`], so turns for different
//! conversations may run in parallel without synchronization.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::faq::{DEFAULT_FAQ_THRESHOLD, FaqIndex};
use crate::intent::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::intent::classifier::GatedClassifier;
use crate::intent::label::IntentLabel;
use crate::orders::OrderStore;

use super::handler::handle;
use super::router::resolve;
use super::state::ConversationState;

/// Tunable thresholds for the turn pipeline.
///
/// The defaults carry the reference values forward; they are parameters,
/// not re-tuned constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Classifier confidence below which a prediction falls back.
    pub classifier_threshold: f64,
    /// FAQ similarity below which a query has no match.
    pub faq_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classifier_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            faq_threshold: DEFAULT_FAQ_THRESHOLD,
        }
    }
}

/// The result of one handled turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The effective intent the turn resolved to.
    pub intent: IntentLabel,
    /// The bot's reply text.
    pub reply: String,
}

/// The intent resolution and dialogue dispatch engine.
pub struct ChatEngine {
    orders: OrderStore,
    faq: FaqIndex,
    classifier: GatedClassifier,
    config: EngineConfig,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("orders", &self.orders.len())
            .field("faq", &self.faq.len())
            .field("classifier", &self.classifier)
            .field("config", &self.config)
            .finish()
    }
}

impl ChatEngine {
    /// Create an engine from its parts.
    ///
    /// The classifier threshold in `config` should match the one the
    /// [`GatedClassifier`] was built with.
    pub fn new(
        orders: OrderStore,
        faq: FaqIndex,
        classifier: GatedClassifier,
        config: EngineConfig,
    ) -> Self {
        ChatEngine {
            orders,
            faq,
            classifier,
            config,
        }
    }

    /// Handle one conversation turn.
    ///
    /// Resolves the effective intent, computes the reply, then applies the
    /// post-turn state update: order-flow intents are remembered in
    /// `state.pending_intent`, everything else clears it.
    pub fn handle_turn(&self, message: &str, state: &mut ConversationState) -> Result<TurnOutcome> {
        let intent = resolve(message, state, &self.classifier)?;
        let reply = handle(
            intent,
            message,
            &self.orders,
            &self.faq,
            self.config.faq_threshold,
        )?;
        state.update_after_turn(intent);

        log::debug!("turn resolved to {intent}");
        Ok(TurnOutcome { intent, reply })
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Borrow the order registry.
    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    /// Borrow the FAQ index.
    pub fn faq(&self) -> &FaqIndex {
        &self.faq
    }
}

/// One interaction-log record, emitted by the core for the caller's sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// When the turn was handled.
    pub timestamp: chrono::DateTime<chrono::Local>,
    /// The resolved intent.
    pub intent: IntentLabel,
    /// The user's message.
    pub user_text: String,
    /// The bot's reply.
    pub bot_reply: String,
}

impl TurnRecord {
    /// Create a record stamped with the current local time.
    pub fn new(intent: IntentLabel, user_text: &str, bot_reply: &str) -> Self {
        TurnRecord {
            timestamp: chrono::Local::now(),
            intent,
            user_text: user_text.to_string(),
            bot_reply: bot_reply.to_string(),
        }
    }
}

/// A CSV interaction-log sink.
///
/// Appends one row per turn; the header is written when the file is
/// created. Persistence format is the caller's concern, not the engine's —
/// this sink is used by the CLI chat loop.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    path: PathBuf,
}

impl InteractionLog {
    /// Create a sink writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        InteractionLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append a single record.
    pub fn append(&self, record: &TurnRecord) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file_exists = self.path.exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if !file_exists {
            writer.write_record(["timestamp", "intent", "user_text", "bot_reply"])?;
        }
        writer.write_record([
            record.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            record.intent.to_string(),
            record.user_text.clone(),
            record.bot_reply.clone(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}
