// ABOUTME: Main library entry point for the EARE learning engine
// ABOUTME: Wires prompts, the model gateway, response normalization, and per-student session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # EARE Intelligence
//!
//! Orchestration core for an AI-literacy learning assistant. A student
//! talks to one model through five conversational modes and five one-shot
//! study tools.
//!
//! ## Architecture
//!
//! - **Prompts**: compile-time instruction texts per mode and tool
//! - **Gateway**: the only caller of the model provider; never returns an error
//! - **Normalizer**: fence stripping and structured parsing with raw-text fallback
//! - **Session**: single-flight chat and tool workbench state machines
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use eare_intelligence::config::GatewayConfig;
//! use eare_intelligence::errors::AppResult;
//! use eare_intelligence::gateway::ModelGateway;
//! use eare_intelligence::llm::GeminiProvider;
//! use eare_intelligence::session::ChatSession;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let provider = Arc::new(GeminiProvider::from_env()?);
//!     let gateway = ModelGateway::new(provider, GatewayConfig::from_env());
//!
//!     let mut session = ChatSession::new();
//!     if let Some(reply) = session.submit(&gateway, "Photosynthesis kya hai?").await {
//!         println!("{}", reply.text());
//!     }
//!     Ok(())
//! }
//! ```

// ── Foundation re-exports ───────────────────────────────────────────────

/// Fixed identifiers, budgets, and fallback strings
pub use eare_core::constants;

/// Structured error types
pub use eare_core::errors;

/// Domain models shared by every layer
pub use eare_core::models;

// ── Public API ──────────────────────────────────────────────────────────

/// Environment-driven configuration for the gateway, provider, and logging
pub mod config;

/// Model gateway: chat and tool entry points with fixed fallbacks
pub mod gateway;

/// Provider abstraction, Gemini implementation, and prompt registry
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Code-fence stripping and structured tool output parsing
pub mod normalizer;

/// Chat session and tool workbench state machines
pub mod session;
