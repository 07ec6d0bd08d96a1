// ABOUTME: Configuration management loaded exclusively from environment variables
// ABOUTME: Exposes log/environment enums plus gateway and provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

//! Configuration module for the EARE intelligence engine
//!
//! There are no configuration files: everything comes from the process
//! environment at startup.
//!
//! - **Types**: `LogLevel` and `Environment`
//! - **Gateway**: model identifier and thinking budgets
//! - **Provider**: API key and endpoint for the Gemini provider

/// Gateway and provider configuration
pub mod gateway;
/// Core configuration type definitions
pub mod types;

pub use gateway::{GatewayConfig, ProviderConfig};
pub use types::{Environment, LogLevel};
