//! Command line argument parsing for the Parlance CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Parlance - an intent resolution and dialogue dispatch engine
#[derive(Parser, Debug, Clone)]
#[command(name = "parlance")]
#[command(about = "A customer support bot engine with intent classification and FAQ search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParlanceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ParlanceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Resolve a single message and print the reply
    Ask(AskArgs),

    /// Train the intent classifier from a labeled corpus
    Train(TrainArgs),
}

/// Data paths and thresholds shared by the serving commands.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Path to the fitted model artifact
    #[arg(long, env = "PARLANCE_MODEL", default_value = "models/intent_classifier.json")]
    pub model: PathBuf,

    /// Path to the FAQ corpus CSV (question,answer)
    #[arg(long, env = "PARLANCE_FAQ", default_value = "data/faq.csv")]
    pub faq: PathBuf,

    /// Path to the order registry CSV (missing file means empty registry)
    #[arg(long, env = "PARLANCE_ORDERS", default_value = "data/orders.csv")]
    pub orders: PathBuf,

    /// Classifier confidence threshold for the fallback gate
    #[arg(long, default_value_t = crate::intent::DEFAULT_CONFIDENCE_THRESHOLD)]
    pub classifier_threshold: f64,

    /// FAQ similarity threshold
    #[arg(long, default_value_t = crate::faq::DEFAULT_FAQ_THRESHOLD)]
    pub faq_threshold: f64,
}

/// Arguments for the interactive chat session
#[derive(Args, Debug, Clone)]
pub struct ChatArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Append each turn to this interaction log CSV
    #[arg(long)]
    pub log: Option<PathBuf>,
}

/// Arguments for resolving a single message
#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// The message to resolve
    pub message: String,

    /// Pending intent from the previous turn (order_status or cancel_order)
    #[arg(long)]
    pub last_intent: Option<String>,
}

/// Arguments for training the intent classifier
#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the labeled corpus CSV (text,intent)
    #[arg(long, default_value = "data/intents.csv")]
    pub data: PathBuf,

    /// Where to write the fitted model artifact
    #[arg(long, default_value = "models/intent_classifier.json")]
    pub output: PathBuf,
}
