// ABOUTME: Per-surface session state machines for the chat panel and the study tool workbench
// ABOUTME: Enforces single-flight calls and atomic resets without any locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! # Session State
//!
//! Each surface owns its state exclusively. A call is split into a `begin_*`
//! step that validates and moves the machine into its busy state, and a
//! `complete` step that records the result. The async `submit`/`run`
//! helpers chain both around a [`crate::gateway::ModelGateway`] call.
//!
//! Refused transitions (blank input, busy surface, no tool) return `None` or
//! `false`. They are not errors.

mod chat;
mod tools;

pub use chat::{ChatSession, ChatState, PendingReply};
pub use tools::{PendingToolRun, ToolPhase, ToolWorkbench};
