use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::domain::ResumeDocument;
use crate::config::SimulationConfig;
use crate::runtime::{RandomSource, TaskShape, TaskSimulator};

/// Simulated ATS compatibility report. The score is a draw, not a scoring
/// engine; the suggestions are the only part derived from the document.
#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

const SCORE_FLOOR: u8 = 60;
const KEYWORD_LIMIT: usize = 4;

/// Builds ATS reports and the delay-shaped task the builder UI animates
/// while "analyzing".
#[derive(Debug, Clone)]
pub struct AtsAnalyzer {
    delay: Duration,
}

impl AtsAnalyzer {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            delay: Duration::milliseconds(config.analysis_delay_ms as i64),
        }
    }

    /// Fresh one-shot task covering the simulated wait.
    pub fn task(&self) -> TaskSimulator {
        TaskSimulator::new(TaskShape::Delay(self.delay))
    }

    pub fn analyze(
        &self,
        document: &ResumeDocument,
        random: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> AtsReport {
        let score = SCORE_FLOOR + random.uniform_inclusive(100 - SCORE_FLOOR);

        let matched_keywords = document
            .skills
            .iter()
            .take(KEYWORD_LIMIT)
            .cloned()
            .collect();

        AtsReport {
            score,
            matched_keywords,
            suggestions: suggestions_for(document),
            generated_at: now,
        }
    }
}

fn suggestions_for(document: &ResumeDocument) -> Vec<String> {
    let mut suggestions = Vec::new();

    if document.summary.trim().is_empty() {
        suggestions.push("Add a professional summary near the top".to_string());
    }
    if document.experience.is_empty() {
        suggestions.push("List at least one internship or project experience".to_string());
    } else if document
        .experience
        .iter()
        .any(|entry| entry.accomplishments.is_empty())
    {
        suggestions.push("Back every role with measurable accomplishments".to_string());
    }
    if document.skill_count() < 5 {
        suggestions.push("Add more role-relevant skills".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Tailor keywords to each job description".to_string());
    }

    suggestions
}
