// ABOUTME: Output formatting helpers for eare-cli
// ABOUTME: Prints chat turns, mode and tool listings, flashcards, and literacy scores as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::io::{self, Write};

use eare_intelligence::{
    models::{ChatTurn, ConversationMode, Speaker, StudyToolKind},
    normalizer::ToolOutput,
};

/// Print a chat turn; model text is printed verbatim
pub fn print_turn(turn: &ChatTurn) {
    let label = match (turn.speaker(), turn.mode()) {
        (Speaker::User, _) => "You".to_owned(),
        (Speaker::Model, Some(mode)) => format!("EARE [{}]", mode.display_name()),
        (Speaker::Model, None) => "EARE".to_owned(),
    };
    println!("\n{label} ({}):", turn.timestamp().format("%H:%M"));
    println!("{}", turn.text());
}

/// Print the input prompt without a trailing newline
pub fn print_prompt(mode: ConversationMode) {
    print!("\n[{mode}] > ");
    io::stdout().flush().ok();
}

/// List every conversation mode
pub fn print_modes() {
    for mode in ConversationMode::ALL {
        println!("{:<14} {}", mode.as_str(), mode.display_name());
    }
}

/// List every study tool
pub fn print_tools() {
    for kind in StudyToolKind::ALL {
        println!(
            "{:<20} {:<22} {}",
            kind.as_str(),
            kind.display_name(),
            kind.description()
        );
    }
}

/// Print the result of a tool run
pub fn print_tool_output(kind: StudyToolKind, output: &ToolOutput) {
    println!("{}", kind.display_name());
    println!("{}", "=".repeat(60));
    match output {
        ToolOutput::Flashcards(cards) => {
            for (index, card) in cards.iter().enumerate() {
                println!("{}. {}", index + 1, card.front);
                println!("   {}", card.back);
            }
        }
        ToolOutput::LiteracyScores(update) => {
            println!("   Ethics:       {}%", update.scores.ethics);
            println!("   Prompting:    {}%", update.scores.prompting);
            println!("   Verification: {}%", update.scores.verification);
            println!("\n{}", update.feedback);
        }
        ToolOutput::Text(text) => println!("{text}"),
    }
}
