// ABOUTME: Post-processing of raw model text into chat replies and structured tool output
// ABOUTME: Strips markdown code fences and parses flashcards or literacy scores with raw-text fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! # Response Normalizer
//!
//! Models are told to reply with bare JSON for structured tools but often wrap
//! it in a ```` ```json ```` fence anyway. Everything here is infallible: a
//! payload that does not parse degrades to [`ToolOutput::Text`] rather than an
//! error.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::constants::fallbacks::EMPTY_CHAT_REPLY;
use crate::models::{Flashcard, LiteracyScoreUpdate, StudyToolKind};

/// Result of a strict structured parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structured<T> {
    /// The text parsed into the expected shape
    Parsed(T),
    /// The text did not parse; carries the cleaned text for display
    Raw(String),
}

impl<T> Structured<T> {
    /// The parsed value, if any
    #[must_use]
    pub fn parsed(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

/// Output of one tool invocation; exactly one shape is ever populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Revision generator output that parsed as a flashcard array
    Flashcards(Vec<Flashcard>),
    /// Literacy analyzer output that parsed as a score update
    LiteracyScores(LiteracyScoreUpdate),
    /// Free text: unstructured tools, parse failures, and fallback messages
    Text(String),
}

impl ToolOutput {
    /// Flashcards, or an empty slice for any other shape
    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        match self {
            Self::Flashcards(cards) => cards,
            _ => &[],
        }
    }

    /// Raw text, if this is a text result
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Literacy scores, if this is a score update
    #[must_use]
    pub const fn literacy_scores(&self) -> Option<&LiteracyScoreUpdate> {
        match self {
            Self::LiteracyScores(update) => Some(update),
            _ => None,
        }
    }
}

fn leading_fence() -> Option<&'static Regex> {
    static LEADING: OnceLock<Option<Regex>> = OnceLock::new();
    LEADING
        .get_or_init(|| Regex::new(r"\A```[A-Za-z0-9_+-]*[ \t]*\r?\n?").ok())
        .as_ref()
}

fn trailing_fence() -> Option<&'static Regex> {
    static TRAILING: OnceLock<Option<Regex>> = OnceLock::new();
    TRAILING
        .get_or_init(|| Regex::new(r"\r?\n?[ \t]*```\z").ok())
        .as_ref()
}

/// Remove a leading ```` ```lang ```` line and a trailing ```` ``` ```` from model output
///
/// The result is always trimmed. Text without fences passes through trimmed.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(found) = leading_fence().and_then(|re| re.find(text)) {
        text = &text[found.end()..];
    }
    if let Some(found) = trailing_fence().and_then(|re| re.find(text)) {
        text = &text[..found.start()];
    }
    text.trim().to_owned()
}

/// Strictly parse already-cleaned text into `T`
#[must_use]
pub fn parse_structured<T: DeserializeOwned>(cleaned: &str) -> Structured<T> {
    match serde_json::from_str::<T>(cleaned) {
        Ok(value) => Structured::Parsed(value),
        Err(error) => {
            warn!(error = %error, "Structured tool output did not parse, showing raw text");
            Structured::Raw(cleaned.to_owned())
        }
    }
}

/// Turn a tool's raw reply into its display shape
///
/// Structured kinds are fence-stripped and parsed; everything else passes
/// through unmodified.
#[must_use]
pub fn normalize_tool_response(kind: StudyToolKind, raw: &str) -> ToolOutput {
    match kind {
        StudyToolKind::RevisionGenerator => {
            match parse_structured::<Vec<Flashcard>>(&strip_code_fences(raw)) {
                Structured::Parsed(cards) => ToolOutput::Flashcards(cards),
                Structured::Raw(text) => ToolOutput::Text(text),
            }
        }
        StudyToolKind::LiteracyAnalyzer => {
            match parse_structured::<LiteracyScoreUpdate>(&strip_code_fences(raw)) {
                Structured::Parsed(update) => ToolOutput::LiteracyScores(update),
                Structured::Raw(text) => ToolOutput::Text(text),
            }
        }
        StudyToolKind::Summarizer
        | StudyToolKind::StructureBuilder
        | StudyToolKind::PresentationCoach => ToolOutput::Text(raw.to_owned()),
    }
}

/// Pass a conversational reply through, substituting the apology for a blank one
#[must_use]
pub fn normalize_chat_reply(raw: String) -> String {
    if raw.trim().is_empty() {
        warn!("Model returned an empty chat reply");
        EMPTY_CHAT_REPLY.to_owned()
    } else {
        raw
    }
}
