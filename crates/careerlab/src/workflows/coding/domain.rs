use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeId(pub String);

/// Editor languages the lab ships starter code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Python,
    Javascript,
    Java,
    Cpp,
}

impl Language {
    pub const fn label(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One test case. Hidden cases are withheld from challenge views and only
/// participate in `submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    pub hidden: bool,
}

/// Immutable catalog entry, created at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: BTreeSet<String>,
    pub test_cases: Vec<TestCase>,
    pub starter_code: BTreeMap<Language, String>,
    pub points: u32,
    pub success_rate: f32,
    pub submissions: u32,
}

impl Challenge {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn visible_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|case| !case.hidden)
    }

    pub fn hidden_case_count(&self) -> usize {
        self.test_cases.iter().filter(|case| case.hidden).count()
    }

    /// Starter text for a language; challenges without a snippet for the
    /// requested language hand back an empty buffer.
    pub fn starter_for(&self, language: Language) -> &str {
        self.starter_code
            .get(&language)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Listing row without test cases or starter code.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeSummary {
    pub id: ChallengeId,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: BTreeSet<String>,
    pub points: u32,
    pub success_rate: f32,
    pub submissions: u32,
}

impl From<&Challenge> for ChallengeSummary {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            difficulty: challenge.difficulty,
            tags: challenge.tags.clone(),
            points: challenge.points,
            success_rate: challenge.success_rate,
            submissions: challenge.submissions,
        }
    }
}

/// Detail view: starter code plus the visible cases only. Hidden cases are
/// reported as a count so the UI can say "N hidden tests".
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeDetail {
    pub id: ChallengeId,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: BTreeSet<String>,
    pub points: u32,
    pub success_rate: f32,
    pub submissions: u32,
    pub sample_cases: Vec<TestCase>,
    pub hidden_case_count: usize,
    pub starter_code: BTreeMap<Language, String>,
}

impl From<&Challenge> for ChallengeDetail {
    fn from(challenge: &Challenge) -> Self {
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            difficulty: challenge.difficulty,
            tags: challenge.tags.clone(),
            points: challenge.points,
            success_rate: challenge.success_rate,
            submissions: challenge.submissions,
            sample_cases: challenge.visible_cases().cloned().collect(),
            hidden_case_count: challenge.hidden_case_count(),
            starter_code: challenge.starter_code.clone(),
        }
    }
}

/// Verdicts for a practice run over the visible cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub challenge_id: ChallengeId,
    pub verdicts: Vec<bool>,
}

impl RunOutcome {
    pub fn passed_count(&self) -> usize {
        self.verdicts.iter().filter(|passed| **passed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Passed,
    Failed,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Passed => "passed",
            SubmissionStatus::Failed => "failed",
        }
    }
}

/// Transient result of a submit action. Replaced by the next run/submit;
/// nothing is persisted. The aggregate score is drawn independently of the
/// per-case verdicts, so the two can legitimately disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub challenge_id: ChallengeId,
    pub verdicts: Vec<bool>,
    pub score: u8,
    pub status: SubmissionStatus,
}
