// ABOUTME: Structured payloads produced by the two JSON-returning study tools
// ABOUTME: Flashcard pairs and the literacy score update with bounded 0-100 scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EARE Learning Platform

use serde::{Deserialize, Deserializer, Serialize};

/// A single revision flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Term or question
    pub front: String,
    /// Definition or answer
    pub back: String,
}

impl Flashcard {
    /// Create a flashcard
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Per-dimension AI-literacy scores, each in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteracyScores {
    /// Asked about bias, privacy, or impact
    #[serde(deserialize_with = "percentage")]
    pub ethics: u8,
    /// Iterated on prompts with context and constraints
    #[serde(deserialize_with = "percentage")]
    pub prompting: u8,
    /// Fact-checked model output
    #[serde(deserialize_with = "percentage")]
    pub verification: u8,
}

/// Literacy analyzer output
///
/// Nothing folds this into a persisted profile; the dashboard score is static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteracyScoreUpdate {
    /// Dimension scores
    pub scores: LiteracyScores,
    /// One-sentence improvement tip
    pub feedback: String,
}

fn percentage<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    if value > 100 {
        return Err(serde::de::Error::custom(format!(
            "score {value} is outside 0-100"
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_literacy_update_parses() {
        let update: LiteracyScoreUpdate = serde_json::from_str(
            r#"{"scores":{"ethics":70,"prompting":55,"verification":90},"feedback":"Cite sources."}"#,
        )
        .unwrap();
        assert_eq!(update.scores.verification, 90);
        assert_eq!(update.feedback, "Cite sources.");
    }

    #[test]
    fn test_literacy_score_above_hundred_is_rejected() {
        let result = serde_json::from_str::<LiteracyScores>(
            r#"{"ethics":101,"prompting":55,"verification":90}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_flashcard_requires_both_sides() {
        assert!(serde_json::from_str::<Flashcard>(r#"{"front":"Q"}"#).is_err());
    }
}
