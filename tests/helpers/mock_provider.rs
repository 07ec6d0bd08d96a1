// ABOUTME: Scripted in-memory LLM provider for gateway and session tests
// ABOUTME: Replays queued replies or failures, counts calls, and records every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eare_intelligence::config::GatewayConfig;
use eare_intelligence::errors::AppError;
use eare_intelligence::gateway::ModelGateway;
use eare_intelligence::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

/// One scripted provider outcome
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail,
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Provider that replays a script, then repeats a fallback outcome
pub struct MockProvider {
    script: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    requests: Mutex<Vec<ChatRequest>>,
    calls: AtomicUsize,
}

impl MockProvider {
    /// Always answer with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self::scripted(Vec::new(), MockReply::text(text))
    }

    /// Always fail with a transport error
    pub fn failing() -> Self {
        Self::scripted(Vec::new(), MockReply::Fail)
    }

    /// Play `script` in order, then keep returning `fallback`
    pub fn scripted(script: Vec<MockReply>, fallback: MockReply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ChatRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("provider was never called")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Mock"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Text(content) => Ok(ChatResponse {
                content,
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| self.default_model().to_owned()),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            MockReply::Fail => Err(AppError::external_unavailable(
                "mock",
                "connection reset by peer",
            )),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Gateway with default settings over a shared mock
pub fn gateway_over(provider: &Arc<MockProvider>) -> ModelGateway {
    ModelGateway::new(provider.clone(), GatewayConfig::default())
}
