// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the scripted in-memory provider and gateway builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod mock_provider;
