// ABOUTME: Chat session state machine with an ordered turn log and a single in-flight reply
// ABOUTME: Appends the student turn optimistically and tags each model turn with the mode that produced it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::gateway::ModelGateway;
use crate::models::{ChatTurn, ConversationMode};

/// Whether a conversational call is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    /// No call in flight; submissions are accepted
    #[default]
    Idle,
    /// One call in flight; submissions are refused
    Awaiting,
}

impl Display for ChatState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Awaiting => write!(f, "awaiting"),
        }
    }
}

/// A submitted turn awaiting its model reply
///
/// Produced by [`ChatSession::begin_submit`] and consumed by
/// [`ChatSession::complete`]. Carries everything the gateway needs.
#[derive(Debug)]
pub struct PendingReply {
    session_id: Uuid,
    history: Vec<ChatTurn>,
    text: String,
    mode: ConversationMode,
}

impl PendingReply {
    /// Turns preceding the submitted one, oldest first
    #[must_use]
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Submitted student text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mode active at submission time
    #[must_use]
    pub const fn mode(&self) -> ConversationMode {
        self.mode
    }
}

/// One student's conversation with the model
///
/// Sessions cannot be cloned, so an outstanding [`PendingReply`] has exactly
/// one session that will accept it.
///
/// ```compile_fail
/// use eare_intelligence::session::ChatSession;
///
/// let session = ChatSession::new();
/// let _copy = session.clone();
/// ```
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    turns: Vec<ChatTurn>,
    mode: ConversationMode,
    state: ChatState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create an empty session in the default mode
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            mode: ConversationMode::default(),
            state: ChatState::Idle,
        }
    }

    /// Seed the log with an opening model turn
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.turns.push(ChatTurn::model(greeting, None));
        self
    }

    /// Start in a specific mode
    #[must_use]
    pub const fn with_mode(mut self, mode: ConversationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Mode used for the next call
    #[must_use]
    pub const fn mode(&self) -> ConversationMode {
        self.mode
    }

    /// Switch mode for subsequent calls; earlier turns keep their tags
    pub fn set_mode(&mut self, mode: ConversationMode) {
        if mode != self.mode {
            debug!(session_id = %self.id, from = %self.mode, to = %mode, "Conversation mode changed");
        }
        self.mode = mode;
    }

    /// Turn log, oldest first
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> ChatState {
        self.state
    }

    /// Whether a reply is outstanding
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        self.state == ChatState::Awaiting
    }

    /// Accept a submission and append the student turn
    ///
    /// Returns `None` without touching the log when the trimmed input is empty
    /// or a reply is already outstanding.
    pub fn begin_submit(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            debug!(session_id = %self.id, "Ignoring blank submission");
            return None;
        }
        if self.is_awaiting() {
            debug!(session_id = %self.id, "Ignoring submission while a reply is outstanding");
            return None;
        }

        let history = self.turns.clone();
        self.turns.push(ChatTurn::user(input));
        self.state = ChatState::Awaiting;

        Some(PendingReply {
            session_id: self.id,
            history,
            text: input.to_owned(),
            mode: self.mode,
        })
    }

    /// Record the reply for an outstanding submission and return to idle
    ///
    /// Returns the appended model turn, or `None` if `pending` belongs to a
    /// different session or nothing is outstanding.
    pub fn complete(&mut self, pending: PendingReply, reply: impl Into<String>) -> Option<&ChatTurn> {
        if pending.session_id != self.id || !self.is_awaiting() {
            warn!(session_id = %self.id, "Discarding reply that does not match an outstanding submission");
            return None;
        }

        self.turns.push(ChatTurn::model(reply, Some(pending.mode)));
        self.state = ChatState::Idle;
        self.turns.last()
    }

    /// Submit through the gateway and wait for the reply
    pub async fn submit(&mut self, gateway: &ModelGateway, input: &str) -> Option<&ChatTurn> {
        let pending = self.begin_submit(input)?;
        let reply = gateway
            .send_chat(pending.history(), pending.text(), pending.mode())
            .await;
        self.complete(pending, reply)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_history_excludes_submitted_turn() {
        let mut session = ChatSession::new().with_greeting("hi");
        let pending = session.begin_submit("question").unwrap();
        assert_eq!(pending.history().len(), 1);
        assert_eq!(session.turns().len(), 2);
    }

    #[test]
    fn test_foreign_pending_is_rejected() {
        let mut first = ChatSession::new();
        let mut second = ChatSession::new();
        let pending = first.begin_submit("a").unwrap();
        second.begin_submit("b").unwrap();

        assert!(second.complete(pending, "reply").is_none());
        assert!(second.is_awaiting());
    }
}
