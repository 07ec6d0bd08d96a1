// ABOUTME: System prompts for every conversation mode and study tool, loaded at compile time
// ABOUTME: Merges the shared base instruction with the mode or tool block via exhaustive matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! # System Prompts
//!
//! Prompt texts live in markdown files next to this module and are embedded
//! with `include_str!`. Lookups are exhaustive `match`es, so adding a mode or
//! tool without an instruction fails to compile.

use crate::models::{ConversationMode, StudyToolKind};

/// Shared behavioral requirements prepended to every instruction
pub const BASE_INSTRUCTION: &str = include_str!("base.md");

/// Role block for a conversation mode
#[must_use]
pub const fn mode_instruction(mode: ConversationMode) -> &'static str {
    match mode {
        ConversationMode::Mentor => include_str!("modes/mentor.md"),
        ConversationMode::FactChecker => include_str!("modes/fact_checker.md"),
        ConversationMode::Sandbox => include_str!("modes/sandbox.md"),
        ConversationMode::CareerCoach => include_str!("modes/career_coach.md"),
        ConversationMode::Reflection => include_str!("modes/reflection.md"),
    }
}

/// Task block for a study tool
#[must_use]
pub const fn tool_instruction(kind: StudyToolKind) -> &'static str {
    match kind {
        StudyToolKind::Summarizer => include_str!("tools/summarizer.md"),
        StudyToolKind::StructureBuilder => include_str!("tools/structure_builder.md"),
        StudyToolKind::RevisionGenerator => include_str!("tools/revision_generator.md"),
        StudyToolKind::PresentationCoach => include_str!("tools/presentation_coach.md"),
        StudyToolKind::LiteracyAnalyzer => include_str!("tools/literacy_analyzer.md"),
    }
}

/// Full system instruction for a conversational call
#[must_use]
pub fn system_instruction_for_mode(mode: ConversationMode) -> String {
    merge(mode_instruction(mode))
}

/// Full system instruction for a tool call
#[must_use]
pub fn system_instruction_for_tool(kind: StudyToolKind) -> String {
    merge(tool_instruction(kind))
}

fn merge(block: &str) -> String {
    format!("{BASE_INSTRUCTION}\n{block}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_starts_merged_instruction() {
        let instruction = system_instruction_for_mode(ConversationMode::Reflection);
        assert!(instruction.starts_with(BASE_INSTRUCTION));
        assert!(instruction.ends_with(mode_instruction(ConversationMode::Reflection)));
    }
}
