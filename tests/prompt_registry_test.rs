// ABOUTME: Tests for the compile-time prompt registry
// ABOUTME: Validates every mode and tool instruction carries the base instruction and its own contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use eare_intelligence::llm::prompts::{
    mode_instruction, tool_instruction, BASE_INSTRUCTION,
};
use eare_intelligence::llm::{system_instruction_for_mode, system_instruction_for_tool};
use eare_intelligence::models::{ConversationMode, StudyToolKind};

#[test]
fn test_every_mode_instruction_contains_base() {
    for mode in ConversationMode::ALL {
        let instruction = system_instruction_for_mode(mode);
        assert!(!instruction.trim().is_empty(), "{mode} instruction is empty");
        assert!(instruction.contains(BASE_INSTRUCTION), "{mode} is missing the base");
        assert!(instruction.contains(mode_instruction(mode)));
    }
}

#[test]
fn test_every_tool_instruction_contains_base() {
    for kind in StudyToolKind::ALL {
        let instruction = system_instruction_for_tool(kind);
        assert!(!instruction.trim().is_empty(), "{kind} instruction is empty");
        assert!(instruction.contains(BASE_INSTRUCTION), "{kind} is missing the base");
        assert!(instruction.contains(tool_instruction(kind)));
    }
}

#[test]
fn test_merged_instruction_is_base_newline_block() {
    let merged = system_instruction_for_tool(StudyToolKind::Summarizer);
    assert_eq!(
        merged,
        format!("{BASE_INSTRUCTION}\n{}", tool_instruction(StudyToolKind::Summarizer))
    );
}

#[test]
fn test_mode_blocks_are_distinct() {
    let blocks: HashSet<&str> = ConversationMode::ALL
        .iter()
        .map(|mode| mode_instruction(*mode))
        .collect();
    assert_eq!(blocks.len(), ConversationMode::ALL.len());
}

#[test]
fn test_tool_blocks_are_distinct() {
    let blocks: HashSet<&str> = StudyToolKind::ALL
        .iter()
        .map(|kind| tool_instruction(*kind))
        .collect();
    assert_eq!(blocks.len(), StudyToolKind::ALL.len());
}

#[test]
fn test_fact_checker_demands_reliability_score() {
    let block = mode_instruction(ConversationMode::FactChecker);
    assert!(block.contains("Reliability Score"));
    assert!(!mode_instruction(ConversationMode::Mentor).contains("Reliability Score"));
}

#[test]
fn test_structured_tools_demand_raw_json() {
    for kind in StudyToolKind::ALL.into_iter().filter(StudyToolKind::is_structured) {
        let block = tool_instruction(kind);
        assert!(block.contains("JSON"), "{kind} does not ask for JSON");
    }
}

#[test]
fn test_base_instruction_covers_code_switching_and_verification() {
    let base = BASE_INSTRUCTION.to_lowercase();
    assert!(base.contains("hinglish"));
    assert!(base.contains("verify"));
}
