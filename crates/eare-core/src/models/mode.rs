// ABOUTME: Conversation mode and study tool enumerations
// ABOUTME: Closed sets with wire tags, display names, and lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Conversational persona governing the system instruction and reply shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationMode {
    /// Socratic guide that never hands out the direct answer
    #[default]
    Mentor,
    /// Critical analyst ending every answer with a reliability score
    FactChecker,
    /// Creative brainstorming with ethics guardrails
    Sandbox,
    /// Employability framing, resume bullets, mock interview questions
    CareerCoach,
    /// Metacognitive prompting about what was learned
    Reflection,
}

impl ConversationMode {
    /// Every mode, in the order the dashboard presents them
    pub const ALL: [Self; 5] = [
        Self::Mentor,
        Self::FactChecker,
        Self::Sandbox,
        Self::CareerCoach,
        Self::Reflection,
    ];

    /// Stable wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::FactChecker => "fact_checker",
            Self::Sandbox => "sandbox",
            Self::CareerCoach => "career_coach",
            Self::Reflection => "reflection",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mentor => "Socratic Mentor",
            Self::FactChecker => "Fact Checker",
            Self::Sandbox => "Creative Sandbox",
            Self::CareerCoach => "Career Coach",
            Self::Reflection => "Reflection",
        }
    }

    /// Parse a tag, returning `None` for unknown input
    ///
    /// Accepts the wire tag as well as dashed or spaced spellings, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_tag(s).as_str() {
            "mentor" | "socratic" => Some(Self::Mentor),
            "fact_checker" | "factchecker" => Some(Self::FactChecker),
            "sandbox" => Some(Self::Sandbox),
            "career_coach" | "careercoach" | "career" => Some(Self::CareerCoach),
            "reflection" | "reflect" => Some(Self::Reflection),
            _ => None,
        }
    }

    /// Parse from string with fallback to the default mode
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl Display for ConversationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// One-shot study transformation with a fixed expected output shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StudyToolKind {
    /// Smart summary with key concepts and a bias check
    Summarizer,
    /// Essay or project outline
    StructureBuilder,
    /// Flashcards, returned as a strict JSON array
    RevisionGenerator,
    /// Presentation script critique
    PresentationCoach,
    /// AI-literacy scoring, returned as a strict JSON object
    LiteracyAnalyzer,
}

impl StudyToolKind {
    /// Every tool kind
    pub const ALL: [Self; 5] = [
        Self::Summarizer,
        Self::StructureBuilder,
        Self::RevisionGenerator,
        Self::PresentationCoach,
        Self::LiteracyAnalyzer,
    ];

    /// Stable wire tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summarizer => "summarizer",
            Self::StructureBuilder => "structure_builder",
            Self::RevisionGenerator => "revision_generator",
            Self::PresentationCoach => "presentation_coach",
            Self::LiteracyAnalyzer => "literacy_analyzer",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Summarizer => "Smart Summarizer",
            Self::StructureBuilder => "Structure Builder",
            Self::RevisionGenerator => "Revision Generator",
            Self::PresentationCoach => "Presentation Coach",
            Self::LiteracyAnalyzer => "Literacy Analyzer",
        }
    }

    /// One-line description shown in tool listings
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Summarizer => "Concept extraction & bias check",
            Self::StructureBuilder => "Essay outlines & logic flow",
            Self::RevisionGenerator => "Flashcards & quizzes",
            Self::PresentationCoach => "Script critique & delivery tips",
            Self::LiteracyAnalyzer => "AI-literacy scoring from conversation logs",
        }
    }

    /// Whether the model must reply with raw JSON for this tool
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::RevisionGenerator | Self::LiteracyAnalyzer)
    }

    /// Parse a tag, returning `None` for unknown input
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_tag(s).as_str() {
            "summarizer" | "summary" => Some(Self::Summarizer),
            "structure_builder" | "structure" | "outline" => Some(Self::StructureBuilder),
            "revision_generator" | "revision" | "flashcards" => Some(Self::RevisionGenerator),
            "presentation_coach" | "presentation" => Some(Self::PresentationCoach),
            "literacy_analyzer" | "literacy" => Some(Self::LiteracyAnalyzer),
            _ => None,
        }
    }
}

impl Display for StudyToolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

fn normalize_tag(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_accepts_variants() {
        assert_eq!(ConversationMode::parse("FACT-CHECKER"), Some(ConversationMode::FactChecker));
        assert_eq!(ConversationMode::parse("career coach"), Some(ConversationMode::CareerCoach));
        assert_eq!(ConversationMode::parse("unknown"), None);
        assert_eq!(
            ConversationMode::from_str_or_default("unknown"),
            ConversationMode::Mentor
        );
    }

    #[test]
    fn test_wire_tags_round_trip_through_parse() {
        for mode in ConversationMode::ALL {
            assert_eq!(ConversationMode::parse(mode.as_str()), Some(mode));
        }
        for kind in StudyToolKind::ALL {
            assert_eq!(StudyToolKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_only_two_tools_are_structured() {
        let structured: Vec<_> = StudyToolKind::ALL
            .into_iter()
            .filter(StudyToolKind::is_structured)
            .collect();
        assert_eq!(
            structured,
            vec![StudyToolKind::RevisionGenerator, StudyToolKind::LiteracyAnalyzer]
        );
    }

    #[test]
    fn test_serde_uses_snake_case_tags() {
        let json = serde_json::to_string(&StudyToolKind::RevisionGenerator).unwrap();
        assert_eq!(json, "\"revision_generator\"");
    }
}
