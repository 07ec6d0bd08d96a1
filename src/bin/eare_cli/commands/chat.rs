// ABOUTME: Interactive chat loop for eare-cli over a single chat session
// ABOUTME: Handles slash commands for switching modes, printing history, and quitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use anyhow::Result;
use eare_intelligence::{
    constants::chat::DEFAULT_GREETING, gateway::ModelGateway, models::ConversationMode,
    session::ChatSession,
};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::helpers::display::{print_prompt, print_turn};

/// One parsed line of REPL input
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Quit,
    History,
    Mode(Option<ConversationMode>),
    Help,
    Message(&'a str),
    Blank,
}

fn parse_line(line: &str) -> ReplInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Blank;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Message(line);
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    match parts.next().unwrap_or_default() {
        "quit" | "exit" | "q" => ReplInput::Quit,
        "history" => ReplInput::History,
        "mode" => ReplInput::Mode(parts.next().and_then(ConversationMode::parse)),
        _ => ReplInput::Help,
    }
}

fn print_help() {
    println!("Commands: /mode <name>, /history, /quit");
    let names: Vec<&str> = ConversationMode::ALL.iter().map(ConversationMode::as_str).collect();
    println!("Modes: {}", names.join(", "));
}

/// Run the chat loop until `/quit` or end of input
pub async fn run(gateway: &ModelGateway, mode: ConversationMode) -> Result<()> {
    let mut session = ChatSession::new()
        .with_mode(mode)
        .with_greeting(DEFAULT_GREETING);
    info!(session_id = %session.id(), mode = %mode, "Chat session started");

    for turn in session.turns() {
        print_turn(turn);
    }

    let mut lines = BufReader::new(stdin()).lines();
    print_prompt(session.mode());
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ReplInput::Quit => break,
            ReplInput::Blank => {}
            ReplInput::Help => print_help(),
            ReplInput::History => {
                for turn in session.turns() {
                    print_turn(turn);
                }
            }
            ReplInput::Mode(Some(next)) => {
                session.set_mode(next);
                println!("Switched to {}.", next.display_name());
            }
            ReplInput::Mode(None) => print_help(),
            ReplInput::Message(text) => {
                if let Some(reply) = session.submit(gateway, text).await {
                    print_turn(reply);
                }
            }
        }
        print_prompt(session.mode());
    }

    info!(session_id = %session.id(), turns = session.turns().len(), "Chat session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(parse_line("/quit"), ReplInput::Quit);
        assert_eq!(parse_line("  /history "), ReplInput::History);
        assert_eq!(
            parse_line("/mode fact-checker"),
            ReplInput::Mode(Some(ConversationMode::FactChecker))
        );
        assert_eq!(parse_line("/mode nope"), ReplInput::Mode(None));
        assert_eq!(parse_line("/what"), ReplInput::Help);
        assert_eq!(parse_line("   "), ReplInput::Blank);
        assert_eq!(parse_line("hello"), ReplInput::Message("hello"));
    }
}
