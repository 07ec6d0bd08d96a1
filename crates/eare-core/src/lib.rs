// ABOUTME: Core types and constants for the EARE intelligence engine
// ABOUTME: Foundation crate with error handling, learning domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![deny(unsafe_code)]

//! # EARE Core
//!
//! Foundation crate providing shared types and constants for the EARE
//! AI-literacy learning engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Model identifiers, thinking budgets, and fallback messages
//! - **models**: Conversation modes, study tools, chat turns, and flashcards

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (modes, tools, chat turns, structured tool payloads)
pub mod models;
