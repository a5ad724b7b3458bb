use serde::{Deserialize, Serialize};

use super::domain::{fields, CompletedRegistration, FieldValue, FormRecord};
use super::validation::{
    email_pattern, validate, website_pattern, year_pattern, FieldRules, ValidationReport,
};
use crate::session::Role;

/// Steps of the registration wizard. The account step is shared; the detail
/// step's field set is determined by the selected role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    AccountDetails,
    RoleDetails,
}

impl WizardStep {
    pub const fn number(self) -> u8 {
        match self {
            WizardStep::AccountDetails => 1,
            WizardStep::RoleDetails => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::AccountDetails),
            2 => Some(WizardStep::RoleDetails),
            _ => None,
        }
    }
}

/// Rules for the shared account step.
pub fn account_rules() -> Vec<FieldRules> {
    vec![
        FieldRules::new(fields::FULL_NAME).required().min_length(2),
        FieldRules::new(fields::EMAIL)
            .required()
            .pattern(email_pattern(), "Enter a valid email address"),
        FieldRules::new(fields::PASSWORD).required().password(),
        FieldRules::new(fields::CONFIRM_PASSWORD)
            .required()
            .matches(fields::PASSWORD, "Passwords do not match"),
        FieldRules::new(fields::AGREE_TERMS).required(),
    ]
}

/// Rules for the detail step, keyed off the selected role. Never reuses the
/// account-step rules.
pub fn role_rules(role: Role) -> Vec<FieldRules> {
    match role {
        Role::Student => vec![
            FieldRules::new(fields::COLLEGE_NAME).required(),
            FieldRules::new(fields::GRADUATION_YEAR)
                .required()
                .pattern(year_pattern(), "Enter a four digit year"),
            FieldRules::new(fields::DEGREE_BRANCH).required(),
        ],
        Role::College => vec![
            FieldRules::new(fields::INSTITUTE_NAME).required(),
            FieldRules::new(fields::INSTITUTE_LOCATION).required(),
            FieldRules::new(fields::OFFICIAL_WEBSITE)
                .required()
                .pattern(website_pattern(), "Enter a valid website URL"),
        ],
        Role::Employer => vec![
            FieldRules::new(fields::COMPANY_NAME).required(),
            FieldRules::new(fields::DESIGNATION).required(),
            FieldRules::new(fields::INDUSTRY).required(),
        ],
    }
}

pub fn rules_for(step: WizardStep, role: Role) -> Vec<FieldRules> {
    match step {
        WizardStep::AccountDetails => account_rules(),
        WizardStep::RoleDetails => role_rules(role),
    }
}

/// Errors surfaced by the wizard's completion path.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("registration is only completed from the final step")]
    NotAtFinalStep,
    #[error("registration form rejected")]
    Rejected(ValidationReport),
}

/// Two-step registration machine. Entered values survive every transition;
/// only a successful validation of the current step's fields moves forward.
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: WizardStep,
    role: Role,
    values: FormRecord,
}

impl RegistrationWizard {
    pub fn new(role: Role) -> Self {
        Self {
            step: WizardStep::AccountDetails,
            role,
            values: FormRecord::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn values(&self) -> &FormRecord {
        &self.values
    }

    /// Change the selected role. The detail step's field set follows.
    pub fn select_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Merge the submitted values and validate only the current step's
    /// fields. On success the wizard moves to the detail step; on failure it
    /// stays put and hands back the per-field report. Entered values are
    /// kept either way. On the final step this is a no-op (completion goes
    /// through `complete`).
    pub fn advance(&mut self, input: &FormRecord) -> Result<WizardStep, ValidationReport> {
        self.absorb(input);

        if self.step == WizardStep::RoleDetails {
            return Ok(self.step);
        }

        let report = validate(&self.values, &account_rules());
        if !report.is_empty() {
            return Err(report);
        }

        self.step = WizardStep::RoleDetails;
        Ok(self.step)
    }

    /// Step back without validating and without clearing anything.
    pub fn back(&mut self) -> WizardStep {
        self.step = WizardStep::AccountDetails;
        self.step
    }

    /// Final submit. Only reachable from the detail step; validates the
    /// role-specific fields and never re-validates them with account rules.
    pub fn complete(&mut self, input: &FormRecord) -> Result<CompletedRegistration, WizardError> {
        if self.step != WizardStep::RoleDetails {
            return Err(WizardError::NotAtFinalStep);
        }

        self.absorb(input);

        let report = validate(&self.values, &role_rules(self.role));
        if !report.is_empty() {
            return Err(WizardError::Rejected(report));
        }

        Ok(CompletedRegistration {
            role: self.role,
            full_name: self.entered_text(fields::FULL_NAME),
            email: self.entered_text(fields::EMAIL),
            details: self.role_details(),
        })
    }

    fn absorb(&mut self, input: &FormRecord) {
        for (field, value) in input {
            self.values.insert(field.clone(), value.clone());
        }
    }

    fn entered_text(&self, field: &str) -> String {
        self.values
            .get(field)
            .and_then(FieldValue::rendered)
            .map(|rendered| rendered.trim().to_string())
            .unwrap_or_default()
    }

    fn role_details(&self) -> FormRecord {
        let role_fields: Vec<&'static str> = role_rules(self.role)
            .iter()
            .map(|rules| rules.field)
            .collect();

        self.values
            .iter()
            .filter(|(field, _)| role_fields.contains(&field.as_str()))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }
}
