//! Command line interface for the Parlance support bot.

pub mod args;
pub mod commands;

pub use args::{Command, ParlanceArgs};
pub use commands::execute_command;
