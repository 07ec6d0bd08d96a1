// ABOUTME: Study tool workbench state machine covering tool selection, input, and one run at a time
// ABOUTME: Holds exactly one normalized output and resets input and output together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use tracing::{debug, warn};
use uuid::Uuid;

use crate::gateway::ModelGateway;
use crate::models::{Flashcard, LiteracyScoreUpdate, StudyToolKind};
use crate::normalizer::{normalize_tool_response, ToolOutput};

/// Workbench phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPhase {
    /// No tool chosen
    NoToolSelected,
    /// A tool is chosen and nothing is running
    Idle,
    /// A tool run is in flight
    Running,
}

/// An accepted tool run awaiting its reply
#[derive(Debug)]
pub struct PendingToolRun {
    workbench_id: Uuid,
    kind: StudyToolKind,
    input: String,
}

impl PendingToolRun {
    /// Tool being run
    #[must_use]
    pub const fn kind(&self) -> StudyToolKind {
        self.kind
    }

    /// Input captured when the run began
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Tool selection, input buffer, and last output for one student
///
/// ```compile_fail
/// use eare_intelligence::session::ToolWorkbench;
///
/// let workbench = ToolWorkbench::new();
/// let _copy = workbench.clone();
/// ```
#[derive(Debug)]
pub struct ToolWorkbench {
    id: Uuid,
    active: Option<StudyToolKind>,
    input: String,
    output: Option<ToolOutput>,
    running: bool,
}

impl Default for ToolWorkbench {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolWorkbench {
    /// Create a workbench with no tool selected
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            active: None,
            input: String::new(),
            output: None,
            running: false,
        }
    }

    /// Workbench identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> ToolPhase {
        match (self.active, self.running) {
            (None, _) => ToolPhase::NoToolSelected,
            (Some(_), false) => ToolPhase::Idle,
            (Some(_), true) => ToolPhase::Running,
        }
    }

    /// Selected tool
    #[must_use]
    pub const fn active_tool(&self) -> Option<StudyToolKind> {
        self.active
    }

    /// Input buffer
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Output of the last completed run
    #[must_use]
    pub const fn output(&self) -> Option<&ToolOutput> {
        self.output.as_ref()
    }

    /// Flashcards from the last run, empty unless it produced a deck
    #[must_use]
    pub fn flashcards(&self) -> &[Flashcard] {
        match &self.output {
            Some(output) => output.flashcards(),
            None => &[],
        }
    }

    /// Text result from the last run
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.output.as_ref().and_then(ToolOutput::text)
    }

    /// Literacy scores from the last run
    #[must_use]
    pub fn literacy_scores(&self) -> Option<&LiteracyScoreUpdate> {
        self.output.as_ref().and_then(ToolOutput::literacy_scores)
    }

    /// Choose a tool
    ///
    /// Choosing the active tool again keeps input and output. Choosing a
    /// different tool clears both. Refused while running.
    pub fn select(&mut self, kind: StudyToolKind) -> bool {
        if self.running {
            return false;
        }
        if self.active == Some(kind) {
            return true;
        }
        debug!(tool = %kind, "Study tool selected");
        self.active = Some(kind);
        self.clear();
        true
    }

    /// Return to no tool selected, clearing input and output. Refused while running.
    pub fn deselect(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.active = None;
        self.clear();
        true
    }

    /// Replace the input buffer; refused without a tool or while running
    pub fn set_input(&mut self, input: impl Into<String>) -> bool {
        if self.phase() != ToolPhase::Idle {
            return false;
        }
        self.input = input.into();
        true
    }

    /// Start a run over the current input
    ///
    /// Requires an idle tool and non-blank input. Clears the previous output.
    pub fn begin_run(&mut self) -> Option<PendingToolRun> {
        if self.phase() != ToolPhase::Idle {
            debug!(phase = ?self.phase(), "Ignoring tool run request");
            return None;
        }
        let kind = self.active?;
        if self.input.trim().is_empty() {
            debug!(tool = %kind, "Ignoring tool run with blank input");
            return None;
        }

        self.output = None;
        self.running = true;
        Some(PendingToolRun {
            workbench_id: self.id,
            kind,
            input: self.input.clone(),
        })
    }

    /// Normalize and store the reply for an outstanding run
    ///
    /// Returns `None` if `pending` came from a different workbench or nothing
    /// is running.
    pub fn complete(&mut self, pending: PendingToolRun, raw: &str) -> Option<&ToolOutput> {
        if pending.workbench_id != self.id || !self.running || self.active != Some(pending.kind) {
            warn!(
                workbench_id = %self.id,
                tool = %pending.kind,
                "Discarding tool reply that does not match an outstanding run"
            );
            return None;
        }
        self.output = Some(normalize_tool_response(pending.kind, raw));
        self.running = false;
        self.output.as_ref()
    }

    /// Run the selected tool through the gateway and wait for the output
    pub async fn run(&mut self, gateway: &ModelGateway) -> Option<&ToolOutput> {
        let pending = self.begin_run()?;
        let raw = gateway.run_tool(pending.kind(), pending.input()).await;
        self.complete(pending, &raw)
    }

    fn clear(&mut self) {
        self.input.clear();
        self.output = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summarizing(input: &str) -> ToolWorkbench {
        let mut workbench = ToolWorkbench::new();
        workbench.select(StudyToolKind::Summarizer);
        workbench.set_input(input);
        workbench
    }

    #[test]
    fn test_foreign_run_is_rejected() {
        let mut first = summarizing("notes on cells");
        let mut second = summarizing("notes on atoms");
        let first_run = first.begin_run().unwrap();
        let second_run = second.begin_run().unwrap();

        assert!(second.complete(first_run, "summary of cells").is_none());
        assert_eq!(second.phase(), ToolPhase::Running);
        assert!(second.output().is_none());
        assert_eq!(first.phase(), ToolPhase::Running);

        let output = second.complete(second_run, "summary of atoms").unwrap();
        assert_eq!(output.text(), Some("summary of atoms"));
        assert_eq!(second.phase(), ToolPhase::Idle);
    }

    #[test]
    fn test_workbenches_get_distinct_ids() {
        assert_ne!(ToolWorkbench::new().id(), ToolWorkbench::default().id());
    }
}
