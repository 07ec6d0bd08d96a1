// ABOUTME: Chat turn record types for the in-memory session log
// ABOUTME: Speaker tag plus immutable ChatTurn with id, text, producing mode, and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ConversationMode;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The student
    User,
    /// The language model
    Model,
}

impl Speaker {
    /// Role string used on the provider wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One exchange unit in a chat session
///
/// Turns are never mutated after creation; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    id: Uuid,
    speaker: Speaker,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<ConversationMode>,
    timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Create a student turn
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text.into(), None)
    }

    /// Create a model turn, tagged with the mode that produced it
    #[must_use]
    pub fn model(text: impl Into<String>, mode: Option<ConversationMode>) -> Self {
        Self::new(Speaker::Model, text.into(), mode)
    }

    fn new(speaker: Speaker, text: String, mode: Option<ConversationMode>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text,
            mode,
            timestamp: Utc::now(),
        }
    }

    /// Unique turn identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Who produced this turn
    #[must_use]
    pub const fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Turn body
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mode that produced a model turn; always `None` for student turns
    #[must_use]
    pub const fn mode(&self) -> Option<ConversationMode> {
        self.mode
    }

    /// Creation time
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether the student wrote this turn
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}
