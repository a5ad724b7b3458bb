use serde::Deserialize;

use super::domain::{ExperienceEntry, ResumeDocument};

/// Editor failures are index misses; every other operation always applies.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("experience entry {0} does not exist")]
    UnknownExperience(usize),
    #[error("accomplishment {bullet} does not exist on experience entry {entry}")]
    UnknownAccomplishment { entry: usize, bullet: usize },
}

/// One editor action, shaped for the wire so the builder UI can replay user
/// gestures against the stored document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    SetSummary { text: String },
    AddSkill { name: String },
    RemoveSkill { name: String },
    AddExperience { entry: ExperienceEntry },
    RemoveExperience { entry: usize },
    AddAccomplishment { entry: usize, text: String },
    UpdateAccomplishment { entry: usize, bullet: usize, text: String },
    RemoveAccomplishment { entry: usize, bullet: usize },
}

impl EditOperation {
    pub fn apply(self, document: &mut ResumeDocument) -> Result<(), EditError> {
        match self {
            EditOperation::SetSummary { text } => {
                document.summary = text;
                Ok(())
            }
            EditOperation::AddSkill { name } => {
                document.add_skill(name);
                Ok(())
            }
            EditOperation::RemoveSkill { name } => {
                document.remove_skill(&name);
                Ok(())
            }
            EditOperation::AddExperience { entry } => {
                document.add_experience(entry);
                Ok(())
            }
            EditOperation::RemoveExperience { entry } => {
                document.remove_experience(entry).map(|_| ())
            }
            EditOperation::AddAccomplishment { entry, text } => {
                document.add_accomplishment(entry, text)
            }
            EditOperation::UpdateAccomplishment { entry, bullet, text } => {
                document.update_accomplishment(entry, bullet, text)
            }
            EditOperation::RemoveAccomplishment { entry, bullet } => {
                document.remove_accomplishment(entry, bullet).map(|_| ())
            }
        }
    }
}

impl ResumeDocument {
    /// Append a job entry, returning its index for follow-up bullet edits.
    pub fn add_experience(&mut self, entry: ExperienceEntry) -> usize {
        self.experience.push(entry);
        self.experience.len() - 1
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<ExperienceEntry, EditError> {
        if index >= self.experience.len() {
            return Err(EditError::UnknownExperience(index));
        }
        Ok(self.experience.remove(index))
    }

    pub fn add_accomplishment(
        &mut self,
        entry: usize,
        text: impl Into<String>,
    ) -> Result<(), EditError> {
        let experience = self
            .experience
            .get_mut(entry)
            .ok_or(EditError::UnknownExperience(entry))?;
        experience.accomplishments.push(text.into());
        Ok(())
    }

    pub fn update_accomplishment(
        &mut self,
        entry: usize,
        bullet: usize,
        text: impl Into<String>,
    ) -> Result<(), EditError> {
        let experience = self
            .experience
            .get_mut(entry)
            .ok_or(EditError::UnknownExperience(entry))?;
        let slot = experience
            .accomplishments
            .get_mut(bullet)
            .ok_or(EditError::UnknownAccomplishment { entry, bullet })?;
        *slot = text.into();
        Ok(())
    }

    pub fn remove_accomplishment(
        &mut self,
        entry: usize,
        bullet: usize,
    ) -> Result<String, EditError> {
        let experience = self
            .experience
            .get_mut(entry)
            .ok_or(EditError::UnknownExperience(entry))?;
        if bullet >= experience.accomplishments.len() {
            return Err(EditError::UnknownAccomplishment { entry, bullet });
        }
        Ok(experience.accomplishments.remove(bullet))
    }

    /// Skills behave as a set: re-adding an existing skill is a no-op.
    pub fn add_skill(&mut self, name: impl Into<String>) -> bool {
        self.skills.insert(name.into())
    }

    pub fn remove_skill(&mut self, name: &str) -> bool {
        self.skills.remove(name)
    }
}
