//! CLI command execution.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::analysis::analyzer::StandardAnalyzer;
use crate::cli::args::{AskArgs, ChatArgs, Command, EngineArgs, ParlanceArgs, TrainArgs};
use crate::dialogue::{
    ChatEngine, ConversationState, EngineConfig, InteractionLog, TurnRecord, canned_response,
};
use crate::faq::{FaqIndex, FaqStore};
use crate::intent::artifact::ModelArtifact;
use crate::intent::centroid::CentroidClassifier;
use crate::intent::classifier::GatedClassifier;
use crate::intent::label::IntentLabel;
use crate::intent::trainer;
use crate::orders::OrderStore;

/// Execute the parsed CLI command.
pub fn execute_command(args: ParlanceArgs) -> Result<()> {
    match args.command {
        Command::Chat(chat_args) => execute_chat(chat_args),
        Command::Ask(ask_args) => execute_ask(ask_args),
        Command::Train(train_args) => execute_train(train_args),
    }
}

/// Build the chat engine from the serving arguments.
///
/// Fatal when the model artifact or FAQ corpus cannot be loaded; a missing
/// orders file degrades to an empty registry inside [`OrderStore::load`].
fn build_engine(args: &EngineArgs) -> Result<ChatEngine> {
    let analyzer = Arc::new(StandardAnalyzer::new()?);

    let artifact = ModelArtifact::load(&args.model)
        .with_context(|| format!("failed to load model artifact {}", args.model.display()))?;
    let classifier = CentroidClassifier::from_artifact(artifact, analyzer.clone())?;
    let gated = GatedClassifier::new(Box::new(classifier), args.classifier_threshold);

    let faq_store = FaqStore::load(&args.faq)
        .with_context(|| format!("failed to load FAQ corpus {}", args.faq.display()))?;
    let faq_index = FaqIndex::build(faq_store.entries().to_vec(), analyzer)?;

    let orders = OrderStore::load(&args.orders)?;

    let config = EngineConfig {
        classifier_threshold: args.classifier_threshold,
        faq_threshold: args.faq_threshold,
    };

    Ok(ChatEngine::new(orders, faq_index, gated, config))
}

fn execute_chat(args: ChatArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;
    let interaction_log = args.log.map(InteractionLog::new);
    let mut state = ConversationState::new();

    println!("Customer Support Bot");
    println!("Type 'exit' or 'quit' to stop.\n");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            println!("Bot: {}", canned_response(IntentLabel::Goodbye));
            break;
        }

        let outcome = engine.handle_turn(message, &mut state)?;
        println!("Bot: {}", outcome.reply);

        if let Some(log) = &interaction_log {
            let record = TurnRecord::new(outcome.intent, message, &outcome.reply);
            if let Err(e) = log.append(&record) {
                log::warn!("failed to append interaction log: {e}");
            }
        }
    }

    Ok(())
}

fn execute_ask(args: AskArgs) -> Result<()> {
    let engine = build_engine(&args.engine)?;

    let pending = match &args.last_intent {
        Some(raw) => {
            let label: IntentLabel = raw.parse()?;
            if !label.is_order_flow() {
                anyhow::bail!("--last-intent must be order_status or cancel_order, got {label}");
            }
            Some(label)
        }
        None => None,
    };

    let mut state = ConversationState::with_pending(pending);
    let outcome = engine.handle_turn(&args.message, &mut state)?;

    println!("intent: {}", outcome.intent);
    println!("reply: {}", outcome.reply);
    if let Some(next) = state.pending_intent {
        println!("next_intent: {next}");
    }

    Ok(())
}

fn execute_train(args: TrainArgs) -> Result<()> {
    let analyzer = Arc::new(StandardAnalyzer::new()?);

    let samples = trainer::load_training_samples(&args.data)
        .with_context(|| format!("failed to load training corpus {}", args.data.display()))?;
    println!("Loaded {} training samples", samples.len());

    let (classifier, artifact) = trainer::train(samples, analyzer)?;
    println!(
        "Trained classifier over {} classes (vocabulary size {})",
        classifier.labels().len(),
        artifact.vectorizer.vocabulary.len()
    );

    artifact.save(&args.output)?;
    println!("Saved model artifact to {}", args.output.display());

    Ok(())
}
