// ABOUTME: Re-exports command modules for eare-cli
// ABOUTME: Provides the interactive chat loop and one-shot tool runner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

pub mod chat;
pub mod tool;
