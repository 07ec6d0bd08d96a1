// ABOUTME: Core data models for the EARE learning engine
// ABOUTME: Re-exports conversation modes, study tools, chat turns, and structured tool payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! # Data Models
//!
//! - `ConversationMode`: persona selected for open dialogue
//! - `StudyToolKind`: one-shot, historyless transformation task
//! - `ChatTurn`: one immutable entry in the session log
//! - `Flashcard` / `LiteracyScoreUpdate`: structured payloads produced by tools

mod conversation;
mod mode;
mod study;

pub use conversation::{ChatTurn, Speaker};
pub use mode::{ConversationMode, StudyToolKind};
pub use study::{Flashcard, LiteracyScoreUpdate, LiteracyScores};
