use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Contact block at the top of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// One job entry with its ordered accomplishment bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub accomplishments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub credential: String,
    pub period: String,
}

/// The working document. Mutated in place by editor operations; there is no
/// versioning and no history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: BTreeSet<String>,
}

impl ResumeDocument {
    pub fn blank() -> Self {
        Self::default()
    }

    /// The prefilled template the builder opens with when an owner has no
    /// stored document yet.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Jordan Reyes".to_string(),
                email: "jordan.reyes@example.com".to_string(),
                phone: "+1 555 0142".to_string(),
                location: "Austin, TX".to_string(),
            },
            summary: "Final-year computer science student focused on backend systems and \
                      data-intensive applications."
                .to_string(),
            experience: vec![ExperienceEntry {
                role: "Software Engineering Intern".to_string(),
                company: "Brightline Systems".to_string(),
                period: "May 2025 - Aug 2025".to_string(),
                accomplishments: vec![
                    "Built an internal dashboard used by 40+ engineers".to_string(),
                    "Cut report generation time by 30%".to_string(),
                ],
            }],
            education: vec![EducationEntry {
                institution: "Meridian Institute of Technology".to_string(),
                credential: "B.S. Computer Science".to_string(),
                period: "2022 - 2026".to_string(),
            }],
            skills: ["Python", "SQL", "Git", "Linux"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
