// ABOUTME: EARE CLI - terminal front end for the learning engine's chat modes and study tools
// ABOUTME: Parses commands, initializes logging, and builds the Gemini-backed model gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform
//!
//! Usage:
//! ```bash
//! # Talk to the mentor persona
//! eare-cli chat
//!
//! # Start in fact-checker mode
//! eare-cli chat --mode fact_checker
//!
//! # Generate flashcards from notes on stdin
//! cat notes.txt | eare-cli tool revision_generator
//!
//! # Summarize inline text
//! eare-cli tool summarizer --input "Photosynthesis converts light into chemical energy"
//!
//! # List modes and tools
//! eare-cli modes
//! eare-cli tools
//! ```

mod commands;
mod helpers;

use std::env;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eare_intelligence::{
    config::{GatewayConfig, LogLevel},
    gateway::ModelGateway,
    llm::{GeminiProvider, LlmProvider},
    logging::{LogFormat, LoggingConfig},
    models::{ConversationMode, StudyToolKind},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "eare-cli",
    about = "EARE Thinking Partner CLI",
    long_about = "Chat with the EARE mentor personas and run one-shot study tools from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Model identifier override
    #[arg(long, global = true)]
    model: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive conversation
    Chat {
        /// Starting conversation mode
        #[arg(long, default_value = "mentor", value_parser = parse_mode)]
        mode: ConversationMode,
    },

    /// Run a study tool once
    Tool {
        /// Tool to run (e.g. "summarizer", "flashcards")
        #[arg(value_parser = parse_tool)]
        kind: StudyToolKind,

        /// Input text; read from stdin when omitted
        #[arg(long, short = 'i')]
        input: Option<String>,
    },

    /// List conversation modes
    Modes,

    /// List study tools
    Tools,
}

fn parse_mode(s: &str) -> std::result::Result<ConversationMode, String> {
    ConversationMode::parse(s).ok_or_else(|| format!("unknown mode '{s}'"))
}

fn parse_tool(s: &str) -> std::result::Result<StudyToolKind, String> {
    StudyToolKind::parse(s).ok_or_else(|| format!("unknown tool '{s}'"))
}

fn build_gateway(model: Option<String>) -> Result<ModelGateway> {
    let mut config = GatewayConfig::from_env();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_env()?);
    info!(provider = provider.name(), model = %config.model, "Model gateway ready");
    Ok(ModelGateway::new(provider, config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if env::var("LOG_FORMAT").is_err() {
        logging = logging.with_format(LogFormat::Compact);
    }
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    logging.init()?;

    match cli.command {
        Command::Modes => helpers::display::print_modes(),
        Command::Tools => helpers::display::print_tools(),
        Command::Chat { mode } => {
            let gateway = build_gateway(cli.model)?;
            commands::chat::run(&gateway, mode).await?;
        }
        Command::Tool { kind, input } => {
            let gateway = build_gateway(cli.model)?;
            commands::tool::run(&gateway, kind, input).await?;
        }
    }

    Ok(())
}
