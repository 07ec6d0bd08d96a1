// ABOUTME: Tests for code-fence stripping and structured tool output normalization
// ABOUTME: Covers flashcard and literacy parsing, raw-text fallback, and chat reply substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use eare_intelligence::constants::fallbacks::EMPTY_CHAT_REPLY;
use eare_intelligence::models::{Flashcard, LiteracyScoreUpdate, StudyToolKind};
use eare_intelligence::normalizer::{
    normalize_chat_reply, normalize_tool_response, parse_structured, strip_code_fences,
    Structured, ToolOutput,
};

// =============================================================================
// Fence Stripping
// =============================================================================

#[test]
fn test_strip_json_fence() {
    let raw = "```json\n[{\"front\":\"Q\",\"back\":\"A\"}]\n```";
    assert_eq!(strip_code_fences(raw), "[{\"front\":\"Q\",\"back\":\"A\"}]");
}

#[test]
fn test_strip_without_fences_only_trims() {
    assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn test_strip_tolerates_surrounding_whitespace() {
    assert_eq!(strip_code_fences("\n\n```json\n[]\n```\n  "), "[]");
}

#[test]
fn test_strip_only_leading_fence() {
    assert_eq!(strip_code_fences("```json\n[1, 2]"), "[1, 2]");
}

// =============================================================================
// Flashcards
// =============================================================================

#[test]
fn test_fenced_flashcards_parse() {
    let raw = "```json\n[{\"front\":\"Q1\",\"back\":\"A1\"},{\"front\":\"Q2\",\"back\":\"A2\"}]\n```";

    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, raw);

    assert_eq!(
        output.flashcards(),
        &[Flashcard::new("Q1", "A1"), Flashcard::new("Q2", "A2")]
    );
    assert!(output.text().is_none());
}

#[test]
fn test_invalid_flashcards_fall_back_to_text() {
    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, "not json");

    assert!(output.flashcards().is_empty());
    assert_eq!(output, ToolOutput::Text("not json".to_owned()));
}

#[test]
fn test_flashcard_object_is_not_a_deck() {
    let raw = "{\"front\":\"Q\",\"back\":\"A\"}";
    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, raw);
    assert_eq!(output.text(), Some(raw));
}

#[test]
fn test_fallback_text_is_cleaned() {
    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, "```\nsorry, no cards\n```");
    assert_eq!(output.text(), Some("sorry, no cards"));
}

#[test]
fn test_empty_array_is_an_empty_deck() {
    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, "[]");
    assert_eq!(output, ToolOutput::Flashcards(Vec::new()));
}

#[test]
fn test_empty_reply_falls_back_to_empty_text() {
    let output = normalize_tool_response(StudyToolKind::RevisionGenerator, "");
    assert_eq!(output.text(), Some(""));
}

// =============================================================================
// Literacy Scores
// =============================================================================

#[test]
fn test_literacy_scores_parse() {
    let raw = r#"```json
{"scores":{"ethics":40,"prompting":75,"verification":20},"feedback":"Check your sources."}
```"#;

    let output = normalize_tool_response(StudyToolKind::LiteracyAnalyzer, raw);
    let update = output.literacy_scores().unwrap();

    assert_eq!(update.scores.ethics, 40);
    assert_eq!(update.scores.prompting, 75);
    assert_eq!(update.scores.verification, 20);
    assert_eq!(update.feedback, "Check your sources.");
    assert!(output.flashcards().is_empty());
}

#[test]
fn test_out_of_range_score_falls_back_to_text() {
    let raw = r#"{"scores":{"ethics":140,"prompting":75,"verification":20},"feedback":"x"}"#;
    let output = normalize_tool_response(StudyToolKind::LiteracyAnalyzer, raw);
    assert_eq!(output.text(), Some(raw));
}

#[test]
fn test_parse_structured_reports_raw() {
    let parsed: Structured<LiteracyScoreUpdate> = parse_structured("{\"scores\":{}}");
    assert_eq!(parsed, Structured::Raw("{\"scores\":{}}".to_owned()));
    assert!(parsed.parsed().is_none());
}

// =============================================================================
// Pass-through
// =============================================================================

#[test]
fn test_unstructured_tools_pass_through_unmodified() {
    let raw = "```json\n{\"looks\":\"structured\"}\n```\n";
    for kind in [
        StudyToolKind::Summarizer,
        StudyToolKind::StructureBuilder,
        StudyToolKind::PresentationCoach,
    ] {
        assert_eq!(normalize_tool_response(kind, raw), ToolOutput::Text(raw.to_owned()));
    }
}

#[test]
fn test_chat_reply_passes_through() {
    assert_eq!(normalize_chat_reply("  hello  ".to_owned()), "  hello  ");
}

#[test]
fn test_blank_chat_reply_becomes_apology() {
    assert_eq!(normalize_chat_reply(String::new()), EMPTY_CHAT_REPLY);
    assert_eq!(normalize_chat_reply(" \n\t".to_owned()), EMPTY_CHAT_REPLY);
}

#[test]
fn test_tool_output_serializes_with_kind_tag() {
    let json = serde_json::to_value(ToolOutput::Flashcards(vec![Flashcard::new("Q", "A")])).unwrap();
    assert_eq!(json["kind"], "flashcards");
    assert_eq!(json["value"][0]["front"], "Q");
}
