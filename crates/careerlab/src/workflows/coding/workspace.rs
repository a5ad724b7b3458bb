use super::domain::{Challenge, Language};

/// Editor state for the coding lab. One shared buffer: selecting a challenge
/// or switching language rewrites it with the matching starter text, and any
/// in-progress edits are discarded. That discard is the product's documented
/// behavior, so it is pinned by tests rather than patched over.
#[derive(Debug, Clone)]
pub struct CodingWorkspace {
    language: Language,
    active: Option<Challenge>,
    buffer: String,
}

impl CodingWorkspace {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            active: None,
            buffer: String::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active(&self) -> Option<&Challenge> {
        self.active.as_ref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with the user's edit. The editor control binds
    /// directly to this.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Make a challenge active and load its starter for the current language.
    pub fn select(&mut self, challenge: &Challenge) {
        self.buffer = challenge.starter_for(self.language).to_string();
        self.active = Some(challenge.clone());
    }

    /// Switch the editor language. The buffer resets to the new language's
    /// starter text for the active challenge; without one it goes blank.
    pub fn change_language(&mut self, language: Language) {
        self.language = language;
        self.buffer = match &self.active {
            Some(challenge) => challenge.starter_for(language).to_string(),
            None => String::new(),
        };
    }
}
