//! Registration wizard: declarative field validation, the two-step
//! controller, and the service that persists completed registrations and
//! hands back the role-based redirect.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    fields, AccountId, AccountRecord, CompletedRegistration, FieldValue, FormRecord,
    RegistrationView,
};
pub use repository::{RegistrationRepository, RepositoryError};
pub use router::registration_router;
pub use service::{RegistrationError, RegistrationService};
pub use validation::{validate, FieldRules, Rule, ValidationReport};
pub use wizard::{account_rules, role_rules, RegistrationWizard, WizardError, WizardStep};
