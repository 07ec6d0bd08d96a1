// ABOUTME: Model gateway with exactly two entry points, conversational chat and one-shot study tools
// ABOUTME: Builds provider requests from prompts and budgets, converting every failure into a fixed fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! # Model Gateway
//!
//! The only component that talks to an [`LlmProvider`]. Callers never see a
//! provider error: transport failures become one of the fixed strings in
//! [`crate::constants::fallbacks`] and are logged here.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::config::GatewayConfig;
use crate::constants::chat::TOOL_INPUT_PREFIX;
use crate::constants::fallbacks::{CHAT_UNAVAILABLE, TOOL_UNAVAILABLE};
use crate::llm::{
    system_instruction_for_mode, system_instruction_for_tool, ChatMessage, ChatRequest,
    LlmProvider,
};
use crate::models::{ChatTurn, ConversationMode, Speaker, StudyToolKind};
use crate::normalizer::{normalize_chat_reply, normalize_tool_response, strip_code_fences, ToolOutput};

/// Entry point for every model call made by the sessions and the CLI
#[derive(Clone)]
pub struct ModelGateway {
    provider: Arc<dyn LlmProvider>,
    config: GatewayConfig,
}

impl ModelGateway {
    /// Create a gateway over a provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: GatewayConfig) -> Self {
        Self { provider, config }
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Active gateway settings
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send one conversational turn with the full prior history
    ///
    /// `history` must be oldest-first and must not include `text`. Returns the
    /// model's reply, the apology string for a blank reply, or the
    /// connection-interrupted string when the provider fails.
    #[instrument(skip_all, fields(mode = %mode, history_len = history.len()))]
    pub async fn send_chat(
        &self,
        history: &[ChatTurn],
        text: &str,
        mode: ConversationMode,
    ) -> String {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(system_instruction_for_mode(mode)));
        messages.extend(history.iter().map(|turn| match turn.speaker() {
            Speaker::User => ChatMessage::user(turn.text()),
            Speaker::Model => ChatMessage::assistant(turn.text()),
        }));
        messages.push(ChatMessage::user(text));

        let request = ChatRequest::new(messages)
            .with_model(self.config.model.clone())
            .with_thinking_budget(self.config.chat_thinking_budget);

        match self.provider.complete(&request).await {
            Ok(response) => {
                debug!(model = %response.model, chars = response.content.len(), "Chat reply received");
                normalize_chat_reply(response.content)
            }
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "Conversational call failed");
                CHAT_UNAVAILABLE.to_owned()
            }
        }
    }

    /// Run a study tool over a single input with no history
    ///
    /// Structured tools have their code fences removed so the result is ready
    /// for [`normalize_tool_response`].
    #[instrument(skip_all, fields(tool = %kind, input_len = input.len()))]
    pub async fn run_tool(&self, kind: StudyToolKind, input: &str) -> String {
        let request = ChatRequest::new(vec![
            ChatMessage::system(system_instruction_for_tool(kind)),
            ChatMessage::user(format!("{TOOL_INPUT_PREFIX}{input}")),
        ])
        .with_model(self.config.model.clone())
        .with_thinking_budget(self.config.tool_thinking_budget);

        match self.provider.complete(&request).await {
            Ok(response) if kind.is_structured() => strip_code_fences(&response.content),
            Ok(response) => response.content,
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "Tool call failed");
                TOOL_UNAVAILABLE.to_owned()
            }
        }
    }

    /// Run a study tool and normalize its reply into a display shape
    pub async fn invoke_tool(&self, kind: StudyToolKind, input: &str) -> ToolOutput {
        let raw = self.run_tool(kind, input).await;
        normalize_tool_response(kind, &raw)
    }
}
