use super::domain::{AccountId, AccountRecord};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait RegistrationRepository: Send + Sync {
    fn insert(&self, record: AccountRecord) -> Result<AccountRecord, RepositoryError>;
    fn fetch(&self, id: &AccountId) -> Result<Option<AccountRecord>, RepositoryError>;
    fn count(&self) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
