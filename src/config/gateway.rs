// ABOUTME: Model gateway and Gemini provider configuration loaded from the environment
// ABOUTME: Model identifier, per-call-type thinking budgets, API key, and endpoint override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::warn;

use crate::constants::{models::DEFAULT_MODEL, thinking};
use crate::errors::{AppError, AppResult};

/// Settings the model gateway applies to every outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Model identifier sent with each request
    pub model: String,
    /// Thinking budget for conversational calls
    pub chat_thinking_budget: u32,
    /// Thinking budget for one-shot tool calls
    pub tool_thinking_budget: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            chat_thinking_budget: thinking::CHAT_THINKING_BUDGET,
            tool_thinking_budget: thinking::TOOL_THINKING_BUDGET,
        }
    }
}

impl GatewayConfig {
    /// Environment variable for model selection
    pub const MODEL_ENV_VAR: &'static str = "EARE_LLM_MODEL";

    /// Environment variable for the conversational thinking budget
    pub const CHAT_BUDGET_ENV_VAR: &'static str = "EARE_CHAT_THINKING_BUDGET";

    /// Environment variable for the tool thinking budget
    pub const TOOL_BUDGET_ENV_VAR: &'static str = "EARE_TOOL_THINKING_BUDGET";

    /// Load from environment, falling back to defaults for anything unset or unparsable
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: env::var(Self::MODEL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.model),
            chat_thinking_budget: budget_from_env(
                Self::CHAT_BUDGET_ENV_VAR,
                defaults.chat_thinking_budget,
            ),
            tool_thinking_budget: budget_from_env(
                Self::TOOL_BUDGET_ENV_VAR,
                defaults.tool_thinking_budget,
            ),
        }
    }

    /// Override the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn budget_from_env(var: &str, default: u32) -> u32 {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = var, value = %raw, "Ignoring unparsable thinking budget");
            default
        }),
        Err(_) => default,
    }
}

/// Credentials and endpoint for the Gemini provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider API key
    pub api_key: String,
    /// API base URL
    pub base_url: String,
}

impl ProviderConfig {
    /// Environment variable for the Gemini API key
    pub const API_KEY_ENV_VAR: &'static str = "GEMINI_API_KEY";

    /// Environment variable overriding the API base URL
    pub const BASE_URL_ENV_VAR: &'static str = "EARE_GEMINI_BASE_URL";

    /// Default Generative Language API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Create a configuration for the public endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Load from environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if `GEMINI_API_KEY` is unset or blank.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(Self::API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} environment variable not set",
                    Self::API_KEY_ENV_VAR
                ))
            })?;

        let base_url = env::var(Self::BASE_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_owned());

        Ok(Self { api_key, base_url })
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
