use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::navigation::AppRoute;
use crate::session::{Role, UserAccount};

/// Identifier wrapper for registered accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Raw value captured from a single form control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Textual rendering used by the text-shaped rules. Flags have no
    /// rendering; numbers render as their decimal form.
    pub fn rendered(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(text) => Some(Cow::Borrowed(text)),
            FieldValue::Number(value) => Some(Cow::Owned(value.to_string())),
            FieldValue::Flag(_) => None,
        }
    }

    /// Empty for `Required` purposes: blank text, or an unchecked flag.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::Number(_) => false,
        }
    }
}

/// Flat record of entered form values, keyed by field name. The key set is
/// fixed per form variant; unknown keys are carried but never validated.
pub type FormRecord = BTreeMap<String, FieldValue>;

/// Field names used by the account step and the per-role detail steps.
pub mod fields {
    pub const FULL_NAME: &str = "full_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const AGREE_TERMS: &str = "agree_terms";

    pub const COLLEGE_NAME: &str = "college_name";
    pub const GRADUATION_YEAR: &str = "graduation_year";
    pub const DEGREE_BRANCH: &str = "degree_branch";

    pub const INSTITUTE_NAME: &str = "institute_name";
    pub const INSTITUTE_LOCATION: &str = "institute_location";
    pub const OFFICIAL_WEBSITE: &str = "official_website";

    pub const COMPANY_NAME: &str = "company_name";
    pub const DESIGNATION: &str = "designation";
    pub const INDUSTRY: &str = "industry";
}

/// A finished registration produced by the wizard's final step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedRegistration {
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub details: FormRecord,
}

impl CompletedRegistration {
    pub fn redirect(&self) -> AppRoute {
        AppRoute::dashboard_for(Some(self.role))
    }
}

/// Stored registration plus the metadata the dashboards need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRecord {
    pub account_id: AccountId,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub registered_at: DateTime<Utc>,
    pub details: FormRecord,
}

impl AccountRecord {
    pub fn account(&self) -> UserAccount {
        UserAccount {
            id: self.account_id.0.clone(),
            name: self.full_name.clone(),
            role: self.role,
        }
    }

    pub fn status_view(&self) -> RegistrationView {
        RegistrationView {
            account_id: self.account_id.clone(),
            role: self.role.label(),
            redirect: AppRoute::dashboard_for(Some(self.role)).path(),
        }
    }
}

/// Sanitized representation returned by the registration endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub account_id: AccountId,
    pub role: &'static str,
    pub redirect: &'static str,
}
