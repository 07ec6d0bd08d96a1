// ABOUTME: Unit tests for the LLM provider abstraction types
// ABOUTME: Validates capability flags, message constructors, and the chat request builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use eare_intelligence::llm::{ChatMessage, ChatRequest, LlmCapabilities, MessageRole};

#[test]
fn test_capability_presets() {
    let text = LlmCapabilities::text_only();
    assert!(text.supports_system_messages());
    assert!(!text.supports_thinking());

    let reasoning = LlmCapabilities::reasoning();
    assert!(reasoning.supports_system_messages());
    assert!(reasoning.supports_thinking());
    assert_eq!(
        reasoning,
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::THINKING
    );
}

#[test]
fn test_capabilities_serialization() {
    let caps = LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::THINKING;
    let json = serde_json::to_string(&caps).unwrap();
    let back: LlmCapabilities = serde_json::from_str(&json).unwrap();
    assert_eq!(caps, back);
}

#[test]
fn test_message_constructors() {
    assert_eq!(ChatMessage::system("s").role, MessageRole::System);
    assert_eq!(ChatMessage::user("u").role, MessageRole::User);
    assert_eq!(ChatMessage::assistant("a").role, MessageRole::Assistant);
    assert_eq!(MessageRole::Assistant.as_str(), "assistant");
}

#[test]
fn test_chat_request_builder() {
    let request = ChatRequest::new(vec![ChatMessage::user("hi")])
        .with_model("gemini-3-pro-preview")
        .with_temperature(0.4)
        .with_max_tokens(256)
        .with_thinking_budget(16_384);

    assert_eq!(request.model.as_deref(), Some("gemini-3-pro-preview"));
    assert_eq!(request.temperature, Some(0.4));
    assert_eq!(request.max_tokens, Some(256));
    assert_eq!(request.thinking_budget, Some(16_384));
    assert!(request.system_instruction().is_none());
}

#[test]
fn test_system_instruction_is_first_system_message() {
    let request = ChatRequest::new(vec![
        ChatMessage::system("first"),
        ChatMessage::user("hi"),
        ChatMessage::system("second"),
    ]);
    assert_eq!(request.system_instruction(), Some("first"));
}
