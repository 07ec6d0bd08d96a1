// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Model identifiers, thinking budgets, and the fixed fallback strings shown to students
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Model selection defaults
pub mod models {
    /// Default model identifier for every gateway call
    pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
}

/// Reasoning budgets passed to the provider as a thinking hint
pub mod thinking {
    /// Open-ended dialogue gets the provider's maximum deliberation budget
    pub const CHAT_THINKING_BUDGET: u32 = 32_768;
    /// One-shot tool transformations favor latency
    pub const TOOL_THINKING_BUDGET: u32 = 16_384;
}

/// Fixed user-facing strings substituted when the provider fails
pub mod fallbacks {
    /// Provider answered successfully but with no text
    pub const EMPTY_CHAT_REPLY: &str = "I apologize, I couldn't generate a response.";
    /// Transport or provider error on the conversational path
    pub const CHAT_UNAVAILABLE: &str = "Connection to EARE Neural Net interrupted. Please retry.";
    /// Transport or provider error on the tool path
    pub const TOOL_UNAVAILABLE: &str = "Tool service unavailable.";
}

/// Conversation framing
pub mod chat {
    /// Opening model turn shown before the student types anything
    pub const DEFAULT_GREETING: &str = "Namaste! I am your EARE Thinking Partner. \
        Select a mode below to begin.";
    /// Prefix placed before every tool input sent to the model
    pub const TOOL_INPUT_PREFIX: &str = "INPUT: ";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name
    pub const EARE_INTELLIGENCE: &str = "eare-intelligence";
}
